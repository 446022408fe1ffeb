//! Category metadata and filtering tables
//!
//! A category is the classification tag of an entry (e.g. "class",
//! "variable", "typedef"). Two explicit finite mappings drive filtering and
//! display:
//! - the belongs-to mapping: enabling a parent category also enables every
//!   category that declares membership in it
//! - the grouping mapping: remaps a category tag to a broader tag before
//!   filtering and grouping
//!
//! Tags that survive remapping but are not registered resolve to the
//! reserved [`UNKNOWN_CATEGORY`] tag for display.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Reserved tag for entries whose category is not registered
pub const UNKNOWN_CATEGORY: &str = "unknown";

// ============================================================================
// CategoryInfo
// ============================================================================

/// Metadata for one category tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryInfo {
    /// Human-readable display name (e.g. "Class")
    pub name: String,

    /// Parent category this tag belongs to, if any
    #[serde(default)]
    pub belongs_to: Option<String>,
}

impl CategoryInfo {
    /// Create a new CategoryInfo
    pub fn new(name: impl Into<String>) -> Self {
        CategoryInfo {
            name: name.into(),
            belongs_to: None,
        }
    }

    /// Builder: set the parent category
    pub fn belongs_to(mut self, parent: impl Into<String>) -> Self {
        self.belongs_to = Some(parent.into());
        self
    }
}

// ============================================================================
// CategoryRegistry
// ============================================================================

/// Registry of known categories plus the grouping remap table
///
/// The registry is part of the immutable search configuration; it is built
/// once by the host and only read during searches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRegistry {
    categories: HashMap<String, CategoryInfo>,

    /// Flat (from, to) remap pairs; first match wins
    groups: Vec<(String, String)>,
}

impl CategoryRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        CategoryRegistry::default()
    }

    /// Register a category tag
    pub fn register(mut self, tag: impl Into<String>, info: CategoryInfo) -> Self {
        self.categories.insert(tag.into(), info);
        self
    }

    /// Add a grouping remap pair (`from` renders and filters as `to`)
    pub fn with_group(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.groups.push((from.into(), to.into()));
        self
    }

    /// Check whether a tag is registered
    pub fn contains(&self, tag: &str) -> bool {
        self.categories.contains_key(tag)
    }

    /// Look up the metadata for a tag
    pub fn info(&self, tag: &str) -> Option<&CategoryInfo> {
        self.categories.get(tag)
    }

    /// Registered tags, in unspecified order
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    /// Apply the grouping remap table to a tag
    ///
    /// Returns the first matching remap target, or the tag itself when no
    /// pair matches.
    pub fn remap<'a>(&'a self, tag: &'a str) -> &'a str {
        self.groups
            .iter()
            .find(|(from, _)| from == tag)
            .map(|(_, to)| to.as_str())
            .unwrap_or(tag)
    }

    /// Resolve a remapped tag to its display tag
    ///
    /// Unregistered tags resolve to [`UNKNOWN_CATEGORY`].
    pub fn resolve<'a>(&'a self, tag: &'a str) -> &'a str {
        if self.contains(tag) {
            tag
        } else {
            UNKNOWN_CATEGORY
        }
    }

    /// Expand an enabled-category selection
    ///
    /// The expanded set contains every selected tag plus every registered
    /// tag whose `belongs_to` is a selected tag.
    pub fn expand<I, S>(&self, enabled: I) -> HashSet<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut expanded = HashSet::new();
        for selection in enabled {
            let selection = selection.as_ref();
            expanded.insert(selection.to_string());
            for (tag, info) in &self.categories {
                if info.belongs_to.as_deref() == Some(selection) {
                    expanded.insert(tag.clone());
                }
            }
        }
        expanded
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn test_registry() -> CategoryRegistry {
        CategoryRegistry::new()
            .register("class", CategoryInfo::new("Class"))
            .register("function", CategoryInfo::new("Function"))
            .register(
                "member_function",
                CategoryInfo::new("Member Function").belongs_to("function"),
            )
            .register(
                "interface_function",
                CategoryInfo::new("Interface Function").belongs_to("function"),
            )
            .register("variable", CategoryInfo::new("Variable"))
            .with_group("grouped_typedef", "typedef")
            .register("typedef", CategoryInfo::new("Typedef"))
    }

    #[test]
    fn test_register_and_lookup() {
        let registry = test_registry();
        assert!(registry.contains("class"));
        assert!(!registry.contains("concept"));
        assert_eq!(registry.info("class").unwrap().name, "Class");
        assert_eq!(
            registry.info("member_function").unwrap().belongs_to.as_deref(),
            Some("function")
        );
    }

    #[test]
    fn test_remap_applies_first_match() {
        let registry = test_registry();
        assert_eq!(registry.remap("grouped_typedef"), "typedef");
        assert_eq!(registry.remap("class"), "class");
    }

    #[test]
    fn test_resolve_unknown() {
        let registry = test_registry();
        assert_eq!(registry.resolve("class"), "class");
        assert_eq!(registry.resolve("no_such_tag"), UNKNOWN_CATEGORY);
    }

    #[test]
    fn test_expand_includes_selection() {
        let registry = test_registry();
        let expanded = registry.expand(["class"]);
        assert!(expanded.contains("class"));
        assert_eq!(expanded.len(), 1);
    }

    #[test]
    fn test_expand_includes_members() {
        let registry = test_registry();
        let expanded = registry.expand(["function"]);
        assert!(expanded.contains("function"));
        assert!(expanded.contains("member_function"));
        assert!(expanded.contains("interface_function"));
        assert!(!expanded.contains("class"));
    }

    #[test]
    fn test_expand_multiple_selections() {
        let registry = test_registry();
        let expanded = registry.expand(["function", "variable"]);
        assert!(expanded.contains("member_function"));
        assert!(expanded.contains("variable"));
        assert!(!expanded.contains("typedef"));
    }

    #[test]
    fn test_expand_empty_selection() {
        let registry = test_registry();
        assert!(registry.expand(Vec::<String>::new()).is_empty());
    }

    #[test]
    fn test_expand_unregistered_selection_kept() {
        // A selection that is not a registered tag still filters literally.
        let registry = test_registry();
        let expanded = registry.expand(["concept"]);
        assert!(expanded.contains("concept"));
        assert_eq!(expanded.len(), 1);
    }
}
