//! Category filtering
//!
//! Filtering runs BEFORE scoring: an entry whose remapped category is not
//! in the expanded enabled set is never scored. The expansion and the
//! remap both come from the [`CategoryRegistry`] in the configuration.

use docfind_core::CategoryRegistry;
use std::collections::HashSet;

/// A per-invocation category filter
///
/// Precomputes the expanded enabled set once so admission is a cheap
/// lookup per entry.
#[derive(Debug)]
pub struct CategoryFilter<'a> {
    registry: &'a CategoryRegistry,
    enabled: HashSet<String>,
}

impl<'a> CategoryFilter<'a> {
    /// Build a filter from the enabled-category selection
    pub fn new<I, S>(registry: &'a CategoryRegistry, enabled: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        CategoryFilter {
            registry,
            enabled: registry.expand(enabled),
        }
    }

    /// Admit an entry category
    ///
    /// Applies the grouping remap, checks the expanded enabled set, and
    /// resolves the surviving tag to its display tag (`unknown` when
    /// unregistered). Returns `None` when the entry must be excluded.
    pub fn admit(&self, category: &str) -> Option<String> {
        let remapped = self.registry.remap(category);
        if !self.enabled.contains(remapped) {
            return None;
        }
        Some(self.registry.resolve(remapped).to_string())
    }

    /// The expanded enabled set, sorted (stable identity for caching)
    pub fn enabled_sorted(&self) -> Vec<String> {
        let mut tags: Vec<String> = self.enabled.iter().cloned().collect();
        tags.sort();
        tags
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use docfind_core::CategoryInfo;

    fn registry() -> CategoryRegistry {
        CategoryRegistry::new()
            .register("class", CategoryInfo::new("Class"))
            .register("function", CategoryInfo::new("Function"))
            .register(
                "member_function",
                CategoryInfo::new("Member Function").belongs_to("function"),
            )
            .with_group("global_variable", "variable")
            .register("variable", CategoryInfo::new("Variable"))
    }

    #[test]
    fn test_admit_enabled_category() {
        let registry = registry();
        let filter = CategoryFilter::new(&registry, ["class"]);
        assert_eq!(filter.admit("class"), Some("class".to_string()));
    }

    #[test]
    fn test_exclude_disabled_category() {
        let registry = registry();
        let filter = CategoryFilter::new(&registry, ["class"]);
        assert_eq!(filter.admit("variable"), None);
    }

    #[test]
    fn test_admit_via_belongs_to() {
        let registry = registry();
        let filter = CategoryFilter::new(&registry, ["function"]);
        assert_eq!(filter.admit("member_function"), Some("member_function".to_string()));
    }

    #[test]
    fn test_remap_before_membership_check() {
        // "global_variable" remaps to "variable", which is enabled.
        let registry = registry();
        let filter = CategoryFilter::new(&registry, ["variable"]);
        assert_eq!(filter.admit("global_variable"), Some("variable".to_string()));

        // Enabling only the pre-remap tag does not admit it.
        let filter = CategoryFilter::new(&registry, ["global_variable"]);
        assert_eq!(filter.admit("global_variable"), None);
    }

    #[test]
    fn test_unregistered_tag_resolves_unknown() {
        let registry = registry();
        // The tag is enabled literally but not registered.
        let filter = CategoryFilter::new(&registry, ["concept"]);
        assert_eq!(filter.admit("concept"), Some("unknown".to_string()));
    }

    #[test]
    fn test_enabled_sorted_is_deterministic() {
        let registry = registry();
        let filter = CategoryFilter::new(&registry, ["function", "class"]);
        assert_eq!(
            filter.enabled_sorted(),
            vec!["class".to_string(), "function".to_string(), "member_function".to_string()]
        );
    }
}
