//! Path management for phonebook-cli
//!
//! Provides XDG-compliant path resolution for configuration and data.
//!
//! ## Path Resolution Order
//!
//! 1. `PHONEBOOK_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/phonebook-cli` or `~/.config/phonebook-cli`
//! 3. Windows: `%APPDATA%\phonebook-cli`

use std::path::PathBuf;

use crate::config::settings::StorageFormat;
use crate::error::PhonebookError;

/// Manages all paths used by phonebook-cli
#[derive(Debug, Clone)]
pub struct PhonebookPaths {
    /// Base directory for all phonebook-cli data
    base_dir: PathBuf,
}

impl PhonebookPaths {
    /// Create a new PhonebookPaths instance
    ///
    /// Path resolution:
    /// 1. `PHONEBOOK_DATA_DIR` env var (explicit override)
    /// 2. Unix: `$XDG_CONFIG_HOME/phonebook-cli` or `~/.config/phonebook-cli`
    /// 3. Windows: `%APPDATA%\phonebook-cli`
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, PhonebookError> {
        let base_dir = if let Ok(custom) = std::env::var("PHONEBOOK_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create PhonebookPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/phonebook-cli/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (~/.config/phonebook-cli/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the phone book file for the given storage format
    pub fn phonebook_file(&self, format: StorageFormat) -> PathBuf {
        match format {
            StorageFormat::Text => self.data_dir().join("phonebook.txt"),
            StorageFormat::Json => self.data_dir().join("phonebook.json"),
        }
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), PhonebookError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| PhonebookError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| PhonebookError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, PhonebookError> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").expect("HOME environment variable not set");
            PathBuf::from(home).join(".config")
        });
    Ok(config_base.join("phonebook-cli"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, PhonebookError> {
    // Windows: Use APPDATA
    let appdata = std::env::var("APPDATA")
        .map_err(|_| PhonebookError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("phonebook-cli"))
}
