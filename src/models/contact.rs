//! Contact model
//!
//! A contact is a named entity with an ordered list of phone numbers. The
//! name acts as the lookup key; numbers carry no format restrictions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A named contact with zero or more phone numbers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Contact name, the unique lookup key
    pub name: String,

    /// Phone numbers in the order they were added
    #[serde(rename = "phoneNumbers", default)]
    pub phone_numbers: Vec<String>,
}

impl Contact {
    /// Create a new contact with no phone numbers
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone_numbers: Vec::new(),
        }
    }

    /// Append a phone number
    pub fn add_number(&mut self, number: impl Into<String>) {
        self.phone_numbers.push(number.into());
    }

    /// Validate the contact
    pub fn validate(&self) -> Result<(), ContactValidationError> {
        if self.name.trim().is_empty() {
            return Err(ContactValidationError::EmptyName);
        }

        Ok(())
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.phone_numbers.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{}: {}", self.name, self.phone_numbers.join(", "))
        }
    }
}

/// Validation errors for contacts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactValidationError {
    EmptyName,
}

impl fmt::Display for ContactValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Contact name cannot be empty"),
        }
    }
}

impl std::error::Error for ContactValidationError {}
