//! Storage layer for phonebook-cli
//!
//! The two historical on-disk formats (semicolon-delimited text and a
//! structured JSON document) sit behind one `ContactStore` capability, with
//! the format selected by configuration. Both stores treat a missing backing
//! file as an empty phone book; any other I/O failure is a storage error.

pub mod file_io;
pub mod json;
pub mod text;

pub use json::JsonStore;
pub use text::TextStore;

use std::path::{Path, PathBuf};

use crate::config::StorageFormat;
use crate::directory::ContactDirectory;
use crate::error::PhonebookResult;

/// Load/save boundary between the in-memory directory and its on-disk form
pub trait ContactStore {
    /// Read the backing file into a directory
    ///
    /// A missing file yields an empty directory.
    fn load(&self) -> PhonebookResult<ContactDirectory>;

    /// Overwrite the backing file with the entire directory contents
    fn save(&self, directory: &ContactDirectory) -> PhonebookResult<()>;

    /// Path of the backing file
    fn path(&self) -> &Path;
}

/// Open a store for the given format and backing file path
pub fn open_store(format: StorageFormat, path: PathBuf) -> Box<dyn ContactStore> {
    match format {
        StorageFormat::Text => Box::new(TextStore::new(path)),
        StorageFormat::Json => Box::new(JsonStore::new(path)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_store_selects_format() {
        let temp_dir = TempDir::new().unwrap();

        let text = open_store(StorageFormat::Text, temp_dir.path().join("book.txt"));
        assert_eq!(text.path(), temp_dir.path().join("book.txt"));

        let json = open_store(StorageFormat::Json, temp_dir.path().join("book.json"));
        assert_eq!(json.path(), temp_dir.path().join("book.json"));
    }

    #[test]
    fn test_formats_round_trip_same_directory() {
        let temp_dir = TempDir::new().unwrap();

        let mut directory = ContactDirectory::new();
        directory.add_person("Alice").unwrap();
        directory.add_phone_number("Alice", "555-1111").unwrap();
        directory.add_person("Bob").unwrap();

        for (format, file) in [
            (StorageFormat::Text, "book.txt"),
            (StorageFormat::Json, "book.json"),
        ] {
            let store = open_store(format, temp_dir.path().join(file));
            store.save(&directory).unwrap();
            assert_eq!(store.load().unwrap(), directory);
        }
    }
}
