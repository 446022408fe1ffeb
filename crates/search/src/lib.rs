//! Query matching, scoring, and grouping for docfind
//!
//! This crate provides:
//! - query tokenization and normalization (stop words, replacements, stems)
//! - the find-and-score ranking routine
//! - category filtering with belongs-to expansion
//! - match decoration (highlight spans, snippets)
//! - result grouping and ordering
//! - SearchEngine: the pure search pipeline
//! - SearchSession: latest-wins invocation sequencing for host UIs
//!
//! # Usage
//!
//! ```
//! use docfind_core::{Catalog, CategoryInfo, CategoryRegistry, Entry, SearchConfig};
//! use docfind_search::SearchEngine;
//! use std::sync::Arc;
//!
//! let catalog = Catalog::new(vec![
//!     Entry::new("Finder", "class_Finder.html", "class")
//!         .with_text("Searches a haystack for a needle."),
//! ])?;
//! let config = SearchConfig::new()
//!     .with_categories(CategoryRegistry::new().register("class", CategoryInfo::new("Class")));
//!
//! let engine = SearchEngine::new(Arc::new(catalog), config)?;
//! let response = engine.search("finder", &["class"]);
//! assert_eq!(response.total_matches(), 1);
//! # Ok::<(), docfind_core::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod engine;
pub mod filter;
pub mod group;
pub mod highlight;
pub mod scorer;
pub mod session;
pub mod snippet;
pub mod tokenizer;

// Re-export commonly used types
pub use engine::SearchEngine;
pub use filter::CategoryFilter;
pub use group::group_matches;
pub use highlight::{decorate, Decoration};
pub use scorer::{find_ignore_case, score_entry};
pub use session::{SearchSession, SequencedResponse, Submission};
pub use snippet::make_snippet;
pub use tokenizer::{tokenize_query, QueryTokens, Tokenization};
