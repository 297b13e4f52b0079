//! Path management for the contact book
//!
//! ## Path Resolution Order
//!
//! 1. `CONTACT_BOOK_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/contact-book` or `~/.config/contact-book`
//! 3. Windows: `%APPDATA%\contact-book`

use std::path::PathBuf;

use crate::error::ContactsError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "CONTACT_BOOK_DATA_DIR";

/// Manages all paths used by the contact book
#[derive(Debug, Clone)]
pub struct ContactsPaths {
    base_dir: PathBuf,
}

impl ContactsPaths {
    /// Resolve the base directory from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, ContactsError> {
        Self::from_override(std::env::var(DATA_DIR_ENV).ok())
    }

    /// Use `custom` as the base directory when set and non-empty
    fn from_override(custom: Option<String>) -> Result<Self, ContactsError> {
        let base_dir = match custom {
            Some(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create paths rooted at a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/contact-book/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the saved address book
    pub fn book_file(&self) -> PathBuf {
        self.base_dir.join("addressbook.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, ContactsError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg),
        _ => {
            let home = std::env::var("HOME").map_err(|_| {
                ContactsError::Config("Could not determine HOME directory".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("contact-book"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, ContactsError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| ContactsError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("contact-book"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ContactsPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.book_file(), temp_dir.path().join("addressbook.json"));
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(paths.audit_log(), temp_dir.path().join("audit.log"));
    }

    #[test]
    fn test_override_sets_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let custom_path = temp_dir.path().to_str().unwrap().to_string();

        let paths = ContactsPaths::from_override(Some(custom_path)).unwrap();
        assert_eq!(paths.base_dir(), temp_dir.path());
    }

    #[test]
    fn test_empty_override_is_ignored() {
        let custom = ContactsPaths::from_override(Some("/tmp/contacts-custom".into())).unwrap();
        if let Ok(paths) = ContactsPaths::from_override(Some(String::new())) {
            assert_ne!(paths.base_dir(), custom.base_dir());
            assert!(paths.base_dir().ends_with("contact-book"));
        }
    }
}
