//! Query tokenization and normalization
//!
//! A raw query is normalized in a fixed order before scoring:
//! 1. trim, lowercase, split on single spaces
//! 2. drop stop words
//! 3. reject queries whose joined remaining tokens are shorter than the
//!    configured minimum
//! 4. apply the replacement table (optional per invocation)
//! 5. append stem expansions (originals retained)
//!
//! The resulting token list is used in order for scoring: earlier tokens
//! are dampened less than later ones.

use docfind_core::Lexicon;

// ============================================================================
// QueryTokens
// ============================================================================

/// A normalized query ready for scoring
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryTokens {
    /// Tokens in scoring order
    pub tokens: Vec<String>,

    /// True when the replacement table introduced a token that does not
    /// appear among the words as typed
    pub replaced: bool,

    /// The trimmed, lowercased query as typed
    pub raw: String,
}

impl QueryTokens {
    /// The effective query string (tokens joined by spaces)
    pub fn effective(&self) -> String {
        self.tokens.join(" ")
    }
}

// ============================================================================
// Tokenization
// ============================================================================

/// Outcome of normalizing a raw query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tokenization {
    /// The query is too short to search
    TooShort {
        /// True iff at least one token was dropped as a stop word, i.e.
        /// the query only became too short through stop-word removal
        stop_words_removed: bool,
    },

    /// The query normalized into a scorable token list
    Tokens(QueryTokens),
}

/// Normalize a raw query against a lexicon
///
/// `minimum_length` applies to the non-stop-word tokens joined with
/// spaces, so the separators count. `apply_replacements` disables step 4
/// when false so a host can re-run the literal query after a rewrite
/// notice.
pub fn tokenize_query(
    raw: &str,
    lexicon: &Lexicon,
    minimum_length: usize,
    apply_replacements: bool,
) -> Tokenization {
    let raw = raw.trim().to_lowercase();
    let words: Vec<&str> = raw.split(' ').collect();

    let non_stop: Vec<&str> = words
        .iter()
        .copied()
        .filter(|w| !lexicon.is_stop_word(w))
        .collect();

    if non_stop.join(" ").len() < minimum_length {
        return Tokenization::TooShort {
            stop_words_removed: non_stop.len() != words.len(),
        };
    }

    let substituted: Vec<&str> = non_stop
        .iter()
        .map(|w| {
            if !apply_replacements {
                return *w;
            }
            lexicon.replacement(w).unwrap_or(*w)
        })
        .collect();

    // A rewrite is only reported when it introduced a token absent from
    // the words as typed.
    let replaced = substituted.iter().any(|w| !words.contains(w));

    let mut tokens = Vec::with_capacity(substituted.len());
    for word in substituted {
        tokens.push(word.to_string());
        for stem in lexicon.stems_of(word) {
            tokens.push(stem.to_string());
        }
    }

    Tokenization::Tokens(QueryTokens {
        tokens,
        replaced,
        raw,
    })
}

// ============================================================================
// Tests
// ============================================================================
