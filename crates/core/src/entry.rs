//! Entry records and the immutable catalog
//!
//! This module defines:
//! - SubEntry: one member of an entry (e.g. a member function)
//! - Entry: one searchable documentation unit
//! - Catalog: the validated, read-only entry collection
//!
//! Entries are produced by an external loader before the first search and
//! are never created, mutated, or destroyed afterwards. Collection order is
//! significant: it is the tie-break order for equal scores.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

// ============================================================================
// SubEntry
// ============================================================================

/// One sub-entry of a documentation unit
///
/// Sub-entries are the addressable members listed under an entry, such as
/// the member functions of a class. The `id` is the fragment identifier
/// appended to the parent entry's location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubEntry {
    /// Display title of the sub-entry
    pub title: String,

    /// Fragment identifier within the parent entry's page
    pub id: String,

    /// Kind tag of the sub-entry (e.g. "memfn", "memvar")
    #[serde(default)]
    pub kind: String,
}

impl SubEntry {
    /// Create a new SubEntry
    pub fn new(title: impl Into<String>, id: impl Into<String>) -> Self {
        SubEntry {
            title: title.into(),
            id: id.into(),
            kind: String::new(),
        }
    }

    /// Builder: set the kind tag
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }
}

// ============================================================================
// Entry
// ============================================================================

/// One searchable documentation unit
///
/// The searchable fields of an entry, in scoring order, are its title, its
/// descriptive text, its aliases, and its sub-entry titles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Primary display title
    pub title: String,

    /// Descriptive body text
    #[serde(default)]
    pub text: String,

    /// Location (page path) this entry links to
    pub location: String,

    /// Alias names ("also known as")
    #[serde(default)]
    pub akas: Vec<String>,

    /// Sub-entries, in display order
    #[serde(default)]
    pub subentries: Vec<SubEntry>,

    /// Category tag classifying the entry (e.g. "class", "variable")
    pub category: String,
}

impl Entry {
    /// Create a new Entry with the required fields
    pub fn new(
        title: impl Into<String>,
        location: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Entry {
            title: title.into(),
            text: String::new(),
            location: location.into(),
            akas: vec![],
            subentries: vec![],
            category: category.into(),
        }
    }

    /// Builder: set the descriptive text
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Builder: set the alias list
    pub fn with_akas(mut self, akas: Vec<String>) -> Self {
        self.akas = akas;
        self
    }

    /// Builder: set the sub-entries
    pub fn with_subentries(mut self, subentries: Vec<SubEntry>) -> Self {
        self.subentries = subentries;
        self
    }

    /// The searchable fields in scoring order:
    /// `[title, text, akas..., subentry titles...]`
    pub fn search_fields(&self) -> Vec<&str> {
        let mut fields = Vec::with_capacity(2 + self.akas.len() + self.subentries.len());
        fields.push(self.title.as_str());
        fields.push(self.text.as_str());
        fields.extend(self.akas.iter().map(String::as_str));
        fields.extend(self.subentries.iter().map(|s| s.title.as_str()));
        fields
    }
}

// ============================================================================
// Catalog
// ============================================================================

/// The immutable, validated entry collection
///
/// A catalog is constructed once from loader output and only read
/// afterwards. Construction fails fast on malformed records rather than
/// tolerating them mid-scoring; deserialization therefore targets
/// `Vec<Entry>`, not the catalog itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<Entry>,
}

impl Catalog {
    /// Validate and wrap a collection of entries
    ///
    /// An entry with an empty `title` or empty `location` is rejected with
    /// [`Error::EmptyField`] naming the offending index.
    pub fn new(entries: Vec<Entry>) -> Result<Self> {
        for (index, entry) in entries.iter().enumerate() {
            if entry.title.is_empty() {
                return Err(Error::EmptyField {
                    index,
                    field: "title",
                });
            }
            if entry.location.is_empty() {
                return Err(Error::EmptyField {
                    index,
                    field: "location",
                });
            }
        }
        Ok(Catalog { entries })
    }

    /// Entries in collection order
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the catalog has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get an entry by collection index
    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }
}

// ============================================================================
// Tests
// ============================================================================
