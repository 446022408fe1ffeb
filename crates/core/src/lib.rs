//! Core types for the docfind documentation search engine
//!
//! This crate defines the foundational types used throughout the system:
//! - Entry, SubEntry: one searchable documentation unit and its members
//! - Catalog: the immutable, validated entry collection
//! - CategoryRegistry: category metadata, belongs-to expansion, grouping
//! - Lexicon: stop words, replacement table, stem table
//! - SearchConfig: tunable knobs (minimum query length, snippet size, ...)
//! - Match, MatchGroup, SearchResponse, Notice: result types
//! - Error: error type hierarchy

#![warn(missing_docs)]
#![warn(clippy::all)]

// Module declarations
pub mod category;
pub mod config;
pub mod entry;
pub mod error;
pub mod lexicon;
pub mod response;

// Re-export commonly used types
pub use category::{CategoryInfo, CategoryRegistry, UNKNOWN_CATEGORY};
pub use config::{
    SearchConfig, DEFAULT_MAX_RESULTS_PER_GROUP, DEFAULT_MINIMUM_LENGTH, DEFAULT_SNIPPET_WORDS,
};
pub use entry::{Catalog, Entry, SubEntry};
pub use error::{Error, Result};
pub use lexicon::Lexicon;
pub use response::{Match, MatchGroup, Notice, SearchResponse, Span, SubMatch, NO_MATCH_SCORE};
