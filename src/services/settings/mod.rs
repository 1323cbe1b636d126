mod persistence;

pub use persistence::{default_settings_path, load_settings, save_settings, SETTINGS_FILE_NAME};
