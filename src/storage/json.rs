//! Structured JSON storage
//!
//! One pretty-printed document holding an ordered sequence of contacts, each
//! with a `name` and a `phoneNumbers` list.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::file_io::{read_to_string_optional, write_atomic};
use super::ContactStore;
use crate::directory::ContactDirectory;
use crate::error::{PhonebookError, PhonebookResult};
use crate::models::Contact;

/// Serializable phone book document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct PhonebookData {
    contacts: Vec<Contact>,
}

/// Store backed by a JSON document
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    /// Create a store backed by the given file
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl ContactStore for JsonStore {
    fn load(&self) -> PhonebookResult<ContactDirectory> {
        let contents = match read_to_string_optional(&self.path)? {
            Some(contents) => contents,
            None => return Ok(ContactDirectory::new()),
        };

        let data: PhonebookData = serde_json::from_str(&contents).map_err(|e| {
            PhonebookError::Storage(format!("Failed to parse {}: {}", self.path.display(), e))
        })?;

        ContactDirectory::from_contacts(data.contacts)
    }

    fn save(&self, directory: &ContactDirectory) -> PhonebookResult<()> {
        let data = PhonebookData {
            contacts: directory.contacts().to_vec(),
        };

        let mut contents = serde_json::to_string_pretty(&data).map_err(|e| {
            PhonebookError::Storage(format!("Failed to serialize phone book: {}", e))
        })?;
        contents.push('\n');

        write_atomic(&self.path, &contents)
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, JsonStore) {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonStore::new(temp_dir.path().join("phonebook.json"));
        (temp_dir, store)
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let (_temp_dir, store) = create_test_store();

        let directory = store.load().unwrap();
        assert!(directory.is_empty());
    }

    #[test]
    fn test_save_and_reload() {
        let (_temp_dir, store) = create_test_store();

        let mut directory = ContactDirectory::new();
        directory.add_person("Alice").unwrap();
        directory.add_phone_number("Alice", "555-1111").unwrap();
        directory.add_phone_number("Alice", "555-2222").unwrap();
        directory.add_person("Bob").unwrap();

        store.save(&directory).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded, directory);
    }

    #[test]
    fn test_document_shape() {
        let (_temp_dir, store) = create_test_store();

        let mut directory = ContactDirectory::new();
        directory.add_person("Alice").unwrap();
        directory.add_phone_number("Alice", "555-1111").unwrap();

        store.save(&directory).unwrap();

        let contents = std::fs::read_to_string(store.path()).unwrap();
        // Pretty-printed with the historical field names
        assert!(contents.contains("\"contacts\""));
        assert!(contents.contains("\"phoneNumbers\""));
        assert!(contents.contains('\n'));
    }

    #[test]
    fn test_load_rejects_invalid_document() {
        let (_temp_dir, store) = create_test_store();
        std::fs::write(store.path(), "not json at all").unwrap();

        let err = store.load().unwrap_err();
        assert!(matches!(err, PhonebookError::Storage(_)));
    }

    #[test]
    fn test_load_accepts_missing_numbers_field() {
        let (_temp_dir, store) = create_test_store();
        std::fs::write(store.path(), r#"{"contacts": [{"name": "Alice"}]}"#).unwrap();

        let directory = store.load().unwrap();
        let alice = directory.find_person("Alice").unwrap();
        assert!(alice.phone_numbers.is_empty());
    }
}
