//! phonebook-cli - Terminal-based interactive phone book
//!
//! This library provides the core functionality for the phonebook CLI: an
//! in-memory contact directory, flat-file persistence in two formats, and
//! the interactive menu loop that drives them.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data model (contacts)
//! - `directory`: In-memory contact directory
//! - `storage`: Flat-file storage layer (delimited text or JSON)
//! - `ui`: Interactive menu loop
//!
//! # Example
//!
//! ```rust,ignore
//! use phonebook_cli::config::{PhonebookPaths, Settings};
//!
//! let paths = PhonebookPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! ```

pub mod config;
pub mod directory;
pub mod error;
pub mod models;
pub mod storage;
pub mod ui;

pub use error::PhonebookError;
