//! Semicolon-delimited text storage
//!
//! One contact per line: `name;number1;number2;...`. A name with no numbers
//! is a valid line, and blank lines are skipped. A line whose name field is
//! empty is reported as a storage error with its line number.

use std::path::{Path, PathBuf};

use super::file_io::{read_to_string_optional, write_atomic};
use super::ContactStore;
use crate::directory::ContactDirectory;
use crate::error::{PhonebookError, PhonebookResult};
use crate::models::Contact;

/// Field delimiter within a line
const DELIMITER: char = ';';

/// Store backed by a delimited text file
pub struct TextStore {
    path: PathBuf,
}

impl TextStore {
    /// Create a store backed by the given file
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl ContactStore for TextStore {
    fn load(&self) -> PhonebookResult<ContactDirectory> {
        let contents = match read_to_string_optional(&self.path)? {
            Some(contents) => contents,
            None => return Ok(ContactDirectory::new()),
        };

        let mut contacts = Vec::new();
        for (index, line) in contents.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }

            let mut fields = line.split(DELIMITER);
            let name = fields.next().unwrap_or_default();
            if name.trim().is_empty() {
                return Err(PhonebookError::Storage(format!(
                    "{}: line {}: missing contact name",
                    self.path.display(),
                    index + 1
                )));
            }

            let mut contact = Contact::new(name);
            for number in fields {
                contact.add_number(number);
            }
            contacts.push(contact);
        }

        ContactDirectory::from_contacts(contacts)
    }

    fn save(&self, directory: &ContactDirectory) -> PhonebookResult<()> {
        let mut contents = String::new();
        for contact in directory.contacts() {
            contents.push_str(&contact.name);
            for number in &contact.phone_numbers {
                contents.push(DELIMITER);
                contents.push_str(number);
            }
            contents.push('\n');
        }

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

    fn create_test_store() -> (TempDir, TextStore) {
        let temp_dir = TempDir::new().unwrap();
        let store = TextStore::new(temp_dir.path().join("phonebook.txt"));
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
    fn test_line_format() {
        let (_temp_dir, store) = create_test_store();

        let mut directory = ContactDirectory::new();
        directory.add_person("Alice").unwrap();
        directory.add_phone_number("Alice", "555-1111").unwrap();
        directory.add_person("Bob").unwrap();

        store.save(&directory).unwrap();

        let contents = std::fs::read_to_string(store.path()).unwrap();
        assert_eq!(contents, "Alice;555-1111\nBob\n");
    }

    #[test]
    fn test_load_contact_without_numbers() {
        let (_temp_dir, store) = create_test_store();
        std::fs::write(store.path(), "Alice\n").unwrap();

        let directory = store.load().unwrap();
        let alice = directory.find_person("Alice").unwrap();
        assert!(alice.phone_numbers.is_empty());
    }

    #[test]
    fn test_load_skips_blank_lines() {
        let (_temp_dir, store) = create_test_store();
        std::fs::write(store.path(), "Alice;555-1111\n\nBob;555-2222\n").unwrap();

        let directory = store.load().unwrap();
        assert_eq!(directory.len(), 2);
    }

    #[test]
    fn test_load_rejects_missing_name() {
        let (_temp_dir, store) = create_test_store();
        std::fs::write(store.path(), "Alice;555-1111\n;555-2222\n").unwrap();

        let err = store.load().unwrap_err();
        assert!(matches!(err, PhonebookError::Storage(ref msg) if msg.contains("line 2")));
    }

    #[test]
    fn test_load_preserves_insertion_order() {
        let (_temp_dir, store) = create_test_store();
        std::fs::write(store.path(), "Charlie\nAlice\nBob\n").unwrap();

        let directory = store.load().unwrap();
        let names: Vec<_> = directory.contacts().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Charlie", "Alice", "Bob"]);
    }
}
