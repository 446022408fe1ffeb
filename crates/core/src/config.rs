//! Search configuration
//!
//! All tunable knobs live in one explicit, immutable configuration object
//! passed to the engine at construction time. There is no process-wide
//! mutable state.

use crate::category::CategoryRegistry;
use crate::error::{Error, Result};
use crate::lexicon::Lexicon;

/// Default minimum joined-token length for a query to be searchable
pub const DEFAULT_MINIMUM_LENGTH: usize = 3;

/// Default number of words in the descriptive snippet
pub const DEFAULT_SNIPPET_WORDS: usize = 25;

/// Default display cap per result group
pub const DEFAULT_MAX_RESULTS_PER_GROUP: usize = 5;

// ============================================================================
// SearchConfig
// ============================================================================

/// Immutable configuration for a search engine
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Minimum length of the joined non-stop-word tokens; shorter queries
    /// report "query too short" without scoring (default: 3)
    pub minimum_length: usize,

    /// Number of leading words kept in the descriptive snippet (default: 25)
    pub snippet_words: usize,

    /// Display cap per category group; excess matches are hidden behind a
    /// "more" affordance (default: 5)
    pub max_results_per_group: usize,

    /// Query normalization tables
    pub lexicon: Lexicon,

    /// Category metadata, belongs-to expansion, and grouping remap
    pub categories: CategoryRegistry,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchConfig {
    /// Create a configuration with default knobs and the default lexicon
    pub fn new() -> Self {
        SearchConfig {
            minimum_length: DEFAULT_MINIMUM_LENGTH,
            snippet_words: DEFAULT_SNIPPET_WORDS,
            max_results_per_group: DEFAULT_MAX_RESULTS_PER_GROUP,
            lexicon: Lexicon::default(),
            categories: CategoryRegistry::new(),
        }
    }

    /// Builder: set the minimum query length
    pub fn with_minimum_length(mut self, minimum_length: usize) -> Self {
        self.minimum_length = minimum_length;
        self
    }

    /// Builder: set the snippet word count
    pub fn with_snippet_words(mut self, snippet_words: usize) -> Self {
        self.snippet_words = snippet_words;
        self
    }

    /// Builder: set the per-group display cap
    pub fn with_max_results_per_group(mut self, max: usize) -> Self {
        self.max_results_per_group = max;
        self
    }

    /// Builder: set the lexicon
    pub fn with_lexicon(mut self, lexicon: Lexicon) -> Self {
        self.lexicon = lexicon;
        self
    }

    /// Builder: set the category registry
    pub fn with_categories(mut self, categories: CategoryRegistry) -> Self {
        self.categories = categories;
        self
    }

    /// Validate the configuration
    ///
    /// Degenerate values fail fast here rather than producing surprising
    /// search behavior later.
    pub fn validate(&self) -> Result<()> {
        if self.minimum_length == 0 {
            return Err(Error::InvalidConfig(
                "minimum_length must be at least 1".to_string(),
            ));
        }
        if self.snippet_words == 0 {
            return Err(Error::InvalidConfig(
                "snippet_words must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
