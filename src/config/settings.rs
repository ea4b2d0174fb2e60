//! User settings for phonebook-cli
//!
//! Manages user preferences, currently just the on-disk storage format.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::paths::PhonebookPaths;
use crate::error::PhonebookError;

/// On-disk storage format for the phone book
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageFormat {
    /// Semicolon-delimited text, one contact per line (default)
    #[default]
    Text,
    /// Pretty-printed JSON document
    Json,
}

/// User settings for phonebook-cli
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Preferred storage format
    #[serde(default)]
    pub format: StorageFormat,
}

fn default_schema_version() -> u32 {
    1
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            format: StorageFormat::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &PhonebookPaths) -> Result<Self, PhonebookError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| PhonebookError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                PhonebookError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &PhonebookPaths) -> Result<(), PhonebookError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| PhonebookError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| PhonebookError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
