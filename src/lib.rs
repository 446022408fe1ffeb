//! docfind - Embedded search engine for generated API documentation
//!
//! docfind ranks a fixed, pre-loaded collection of documentation entries
//! (classes, functions, variables, ...) against free-text queries and
//! returns category-grouped, score-ordered matches for a host UI to
//! render.
//!
//! # Quick Start
//!
//! ```
//! use docfind::{Catalog, CategoryInfo, CategoryRegistry, Entry, SearchConfig, SearchEngine};
//! use std::sync::Arc;
//!
//! // Load the entry collection once.
//! let catalog = Catalog::new(vec![
//!     Entry::new("Finder", "class_Finder.html", "class")
//!         .with_text("Searches a haystack for occurrences of a needle."),
//! ])?;
//!
//! let config = SearchConfig::new()
//!     .with_categories(CategoryRegistry::new().register("class", CategoryInfo::new("Class")));
//!
//! // Search it as often as needed; the engine is pure and read-only.
//! let engine = SearchEngine::new(Arc::new(catalog), config)?;
//! let response = engine.search("finder", &["class"]);
//! assert_eq!(response.groups[0].matches[0].title, "Finder");
//! # Ok::<(), docfind::Error>(())
//! ```
//!
//! # Architecture
//!
//! The entry types, configuration, and result types live in
//! [`docfind_core`]; the tokenizer, scorer, and grouping pipeline live in
//! [`docfind_search`]. Interactive hosts wrap the engine in a
//! [`SearchSession`] to get latest-wins sequencing of invocations.

// Re-export the public API from the member crates
pub use docfind_core::*;
pub use docfind_search::*;
