use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;

use crate::models::settings::CountdownSettings;

pub const SETTINGS_FILE_NAME: &str = "config.toml";

/// Platform config location, e.g. `~/.config/cny-countdown/config.toml`.
pub fn default_settings_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "CnyCountdown", "cny-countdown")
        .map(|dirs| dirs.config_dir().join(SETTINGS_FILE_NAME))
}

/// Load settings from `path`, falling back to defaults when the file is absent.
pub fn load_settings(path: &Path) -> Result<CountdownSettings> {
    if !path.exists() {
        log::info!("No settings file at {}, using defaults", path.display());
        return Ok(CountdownSettings::default());
    }

    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read settings from {}", path.display()))?;
    let settings: CountdownSettings = toml::from_str(&data)
        .with_context(|| format!("failed to parse settings from {}", path.display()))?;
    settings
        .validate()
        .with_context(|| format!("invalid settings in {}", path.display()))?;
    Ok(settings)
}

pub fn save_settings(path: &Path, settings: &CountdownSettings) -> Result<()> {
    settings.validate().context("refusing to save invalid settings")?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create dir {}", parent.display()))?;
    }

    let data = toml::to_string_pretty(settings).context("failed to serialize settings")?;
    fs::write(path, data)
        .with_context(|| format!("failed to write settings to {}", path.display()))?;
    Ok(())
}
