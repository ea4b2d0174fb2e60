//! In-memory contact directory
//!
//! The directory owns every contact for the lifetime of one run and preserves
//! insertion order. All lookups are linear scans over the backing vector;
//! there is no index and no ordering beyond first-added-first-listed.

use crate::error::{PhonebookError, PhonebookResult};
use crate::models::Contact;

/// Owning collection of contacts, in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDirectory {
    contacts: Vec<Contact>,
}

impl ContactDirectory {
    /// Create an empty directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a directory from loaded contacts, validating each one
    pub fn from_contacts(contacts: Vec<Contact>) -> PhonebookResult<Self> {
        for contact in &contacts {
            contact
                .validate()
                .map_err(|e| PhonebookError::Validation(e.to_string()))?;
        }

        Ok(Self { contacts })
    }

    /// Add a person by name, or return the existing entry if already present
    ///
    /// The name is trimmed before use. An empty name is a validation error
    /// and leaves the directory unchanged.
    pub fn add_person(&mut self, name: &str) -> PhonebookResult<&Contact> {
        let name = name.trim();
        if name.is_empty() {
            return Err(PhonebookError::Validation(
                "Contact name cannot be empty".into(),
            ));
        }

        match self.contacts.iter().position(|c| c.name == name) {
            Some(index) => Ok(&self.contacts[index]),
            None => {
                self.contacts.push(Contact::new(name));
                Ok(self.contacts.last().expect("just pushed"))
            }
        }
    }

    /// Append a phone number to an existing contact
    pub fn add_phone_number(&mut self, name: &str, number: &str) -> PhonebookResult<()> {
        let contact = self
            .contacts
            .iter_mut()
            .find(|c| c.name == name)
            .ok_or_else(|| PhonebookError::contact_not_found(name))?;

        contact.add_number(number);
        Ok(())
    }

    /// Find a contact by exact name (case-sensitive, first match only)
    pub fn find_person(&self, name: &str) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.name == name)
    }

    /// All contacts in insertion order
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    /// Number of contacts
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    /// Whether the directory holds no contacts
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }
}
