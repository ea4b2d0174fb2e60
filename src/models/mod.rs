//! Core data models for phonebook-cli

pub mod contact;

pub use contact::Contact;
