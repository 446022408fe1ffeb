//! Error types for docfind
//!
//! This module defines all error types used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.
//!
//! The two user-visible search outcomes ("query too short" and "nothing
//! found") are NOT errors; they are normal results carried as
//! [`crate::response::Notice`] values.

use thiserror::Error;

/// Result type alias for docfind operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the docfind search engine
#[derive(Debug, Error)]
pub enum Error {
    /// A catalog entry is missing a required field
    #[error("Entry {index} has an empty {field}")]
    EmptyField {
        /// Position of the offending entry in the input collection
        index: usize,
        /// Name of the missing field
        field: &'static str,
    },

    /// A configuration value is degenerate
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
