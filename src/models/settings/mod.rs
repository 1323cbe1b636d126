// Settings module
// User-tunable behaviour of the countdown display

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::occurrence::{OccurrenceTable, TableError};

pub const DEFAULT_REFRESH_INTERVAL_MS: u64 = 1_000;
pub const DEFAULT_PLACEHOLDER: &str = "—";
pub const DEFAULT_CELEBRATION_MESSAGE: &str = "新年快乐！";

/// Locale used to render the resolved occurrence date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DateLocale {
    /// `2025年1月29日`
    #[default]
    #[serde(rename = "zh-CN")]
    ZhCn,
    /// `January 29, 2025`
    #[serde(rename = "en-US")]
    EnUs,
}

/// One user supplied row of the occurrence table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccurrenceEntry {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("refresh interval must be at least 1 ms")]
    ZeroRefreshInterval,
    #[error("celebration message must not be empty")]
    EmptyCelebrationMessage,
    #[error("invalid occurrence table: {0}")]
    Table(#[from] TableError),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CountdownSettings {
    pub refresh_interval_ms: u64,
    pub locale: DateLocale,
    /// Shown by the countdown formatter when there is nothing to count down.
    pub placeholder: String,
    /// Written to the countdown slot on the day of the occurrence.
    pub celebration_message: String,
    pub notify_on_celebration: bool,
    /// Replaces the built-in table when non-empty.
    pub occurrences: Vec<OccurrenceEntry>,
}

impl Default for CountdownSettings {
    fn default() -> Self {
        Self {
            refresh_interval_ms: DEFAULT_REFRESH_INTERVAL_MS,
            locale: DateLocale::default(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            celebration_message: DEFAULT_CELEBRATION_MESSAGE.to_string(),
            notify_on_celebration: false,
            occurrences: Vec::new(),
        }
    }
}

impl CountdownSettings {
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.refresh_interval_ms == 0 {
            return Err(SettingsError::ZeroRefreshInterval);
        }
        if self.celebration_message.trim().is_empty() {
            return Err(SettingsError::EmptyCelebrationMessage);
        }
        self.occurrence_table()?;
        Ok(())
    }

    /// The table these settings describe: the override if present, otherwise
    /// the built-in Chinese New Year dates.
    pub fn occurrence_table(&self) -> Result<OccurrenceTable, TableError> {
        if self.occurrences.is_empty() {
            return Ok(OccurrenceTable::chinese_new_year());
        }

        let rows: Vec<(i32, u32, u32)> = self
            .occurrences
            .iter()
            .map(|entry| (entry.year, entry.month, entry.day))
            .collect();
        OccurrenceTable::from_ymd(&rows)
    }
}
