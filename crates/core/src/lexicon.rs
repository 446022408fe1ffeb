//! Query normalization tables
//!
//! The lexicon holds the three static lookup tables applied during query
//! normalization:
//! - stop words: tokens dropped from the query
//! - replacements: (from, to) pairs substituting a token; first match wins
//! - stems: (from, to) pairs appending an additional token; every match
//!   appends, and the original token is retained
//!
//! The default lexicon ships a small English stop-word list and empty
//! replacement/stem tables; hosts inject their own tables for their
//! documentation corpus.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Default English stop words
static DEFAULT_STOP_WORDS: Lazy<Vec<String>> = Lazy::new(|| {
    [
        "a", "an", "and", "are", "as", "at", "be", "by", "for", "from", "how", "in", "is", "it",
        "of", "on", "or", "that", "the", "this", "to", "was", "what", "when", "where", "which",
        "who", "will", "with",
    ]
    .iter()
    .map(|w| w.to_string())
    .collect()
});

// ============================================================================
// Lexicon
// ============================================================================

/// Static lookup tables for query normalization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lexicon {
    /// Tokens ignored during normalization
    pub stop_words: Vec<String>,

    /// Token substitutions; first matching pair wins
    pub replacements: Vec<(String, String)>,

    /// Token expansions; every matching pair appends its replacement
    pub stems: Vec<(String, String)>,
}

impl Default for Lexicon {
    fn default() -> Self {
        Lexicon {
            stop_words: DEFAULT_STOP_WORDS.clone(),
            replacements: vec![],
            stems: vec![],
        }
    }
}

impl Lexicon {
    /// Create a lexicon with empty tables
    pub fn empty() -> Self {
        Lexicon {
            stop_words: vec![],
            replacements: vec![],
            stems: vec![],
        }
    }

    /// Builder: set the stop-word list
    pub fn with_stop_words(mut self, stop_words: Vec<String>) -> Self {
        self.stop_words = stop_words;
        self
    }

    /// Builder: set the replacement table
    pub fn with_replacements(mut self, replacements: Vec<(String, String)>) -> Self {
        self.replacements = replacements;
        self
    }

    /// Builder: set the stem table
    pub fn with_stems(mut self, stems: Vec<(String, String)>) -> Self {
        self.stems = stems;
        self
    }

    /// Check whether a token is a stop word
    pub fn is_stop_word(&self, token: &str) -> bool {
        self.stop_words.iter().any(|w| w == token)
    }

    /// Look up the replacement for a token, if any
    pub fn replacement(&self, token: &str) -> Option<&str> {
        self.replacements
            .iter()
            .find(|(from, _)| from == token)
            .map(|(_, to)| to.as_str())
    }

    /// All stem expansions for a token, in table order
    pub fn stems_of<'a>(&'a self, token: &'a str) -> impl Iterator<Item = &'a str> {
        self.stems
            .iter()
            .filter(move |(from, _)| from == token)
            .map(|(_, to)| to.as_str())
    }
}

// ============================================================================
// Tests
// ============================================================================
