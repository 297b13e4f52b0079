//! User settings for the contact book

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::paths::ContactsPaths;
use crate::error::ContactsError;
use crate::models::DEFAULT_WINDOW_DAYS;
use crate::storage::{read_bytes, write_json_atomic};

/// User settings, stored as `config.json` in the base directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Look-ahead window for the `birthdays` command, in days
    #[serde(default = "default_birthday_window_days")]
    pub birthday_window_days: u32,

    /// Whether to color success and error messages
    #[serde(default = "default_true")]
    pub color_output: bool,

    /// Whether contact changes are recorded in the audit log
    #[serde(default = "default_true")]
    pub audit_enabled: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_birthday_window_days() -> u32 {
    DEFAULT_WINDOW_DAYS
}

fn default_true() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            birthday_window_days: default_birthday_window_days(),
            color_output: true,
            audit_enabled: true,
        }
    }
}

impl Settings {
    /// Load settings from disk, writing the defaults on first run
    pub fn load_or_create(paths: &ContactsPaths) -> Result<Self, ContactsError> {
        let settings_path = paths.settings_file();

        match read_bytes(&settings_path)? {
            Some(bytes) => serde_json::from_slice(&bytes).map_err(|e| {
                ContactsError::Config(format!("Failed to parse settings file: {}", e))
            }),
            None => {
                let settings = Settings::default();
                settings.save(paths)?;
                debug!(path = %settings_path.display(), "wrote default settings");
                Ok(settings)
            }
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ContactsPaths) -> Result<(), ContactsError> {
        write_json_atomic(paths.settings_file(), self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.birthday_window_days, 7);
        assert!(settings.color_output);
        assert!(settings.audit_enabled);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ContactsPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings {
            birthday_window_days: 14,
            color_output: false,
            ..Settings::default()
        };
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_first_run_writes_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ContactsPaths::with_base_dir(temp_dir.path().join("fresh"));

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings, Settings::default());
        assert!(paths.settings_file().exists());

        let written: Settings =
            serde_json::from_slice(&std::fs::read(paths.settings_file()).unwrap()).unwrap();
        assert_eq!(written, settings);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"color_output": false}"#).unwrap();
        assert!(!settings.color_output);
        assert_eq!(settings.birthday_window_days, 7);
        assert!(settings.audit_enabled);
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ContactsPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "{ nope").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, ContactsError::Config(_)));
    }
}
