//! Configuration and path management for phonebook-cli

pub mod paths;
pub mod settings;

pub use paths::PhonebookPaths;
pub use settings::{Settings, StorageFormat};
