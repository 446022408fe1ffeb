//! Search result types
//!
//! This module defines the external-facing result types:
//! - Span: a highlightable byte range into an original string
//! - SubMatch: a matched sub-entry
//! - Match: one scored result with its display fields
//! - MatchGroup: matches of one category, ordered by score
//! - Notice: the user-visible non-fault outcomes
//! - SearchResponse: groups plus an optional notice
//!
//! Results are recomputed from scratch on every search; nothing here is
//! persisted.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Ranking sentinel: a real match always scores strictly below this value,
/// and lower is better
pub const NO_MATCH_SCORE: f64 = 1_000_000_000.0;

// ============================================================================
// Span
// ============================================================================

/// A byte range into an original (un-lowercased) string, for highlighting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    /// Inclusive start byte offset
    pub start: usize,
    /// Exclusive end byte offset
    pub end: usize,
}

impl Span {
    /// Create a new Span
    pub fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    /// Length of the span in bytes
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if the span is empty
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

// ============================================================================
// SubMatch
// ============================================================================

/// A sub-entry whose title matched the query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubMatch {
    /// Sub-entry title
    pub title: String,

    /// Fragment identifier within the parent entry's page
    pub id: String,

    /// Matched span within the title
    pub span: Span,
}

// ============================================================================
// Match
// ============================================================================

/// One scored search result
///
/// Carries the entry's display fields plus which sub-parts matched.
/// Lower scores are stronger matches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    /// Ranking key; lower is better
    pub score: f64,

    /// Entry title
    pub title: String,

    /// Matched spans within the title, for highlighting
    pub title_spans: Vec<Span>,

    /// Leading words of the entry's descriptive text
    pub snippet: String,

    /// Location the result links to
    pub location: String,

    /// First alias that matched, with its matched span
    pub aka: Option<(String, Span)>,

    /// Matched sub-entries, in sub-entry order
    pub sub_matches: Vec<SubMatch>,

    /// Resolved display category of the entry
    pub category: String,
}

// ============================================================================
// MatchGroup
// ============================================================================

/// The matches of one category, ordered by ascending score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchGroup {
    /// Resolved display category shared by all contained matches
    pub category: String,

    /// Matches, ascending by score; catalog order breaks ties
    pub matches: Vec<Match>,
}

impl MatchGroup {
    /// The group's rank key: its best (lowest) contained score
    ///
    /// An empty group ranks at the no-match sentinel.
    pub fn best_score(&self) -> f64 {
        self.matches
            .iter()
            .map(|m| m.score)
            .fold(NO_MATCH_SCORE, f64::min)
    }

    /// Matches shown before the "more" affordance, given a display cap
    pub fn visible(&self, cap: usize) -> &[Match] {
        &self.matches[..self.matches.len().min(cap)]
    }

    /// Number of matches hidden behind the "more" affordance
    pub fn hidden(&self, cap: usize) -> usize {
        self.matches.len().saturating_sub(cap)
    }

    /// Number of matches in the group
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    /// Check if the group has no matches
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}

// ============================================================================
// Notice
// ============================================================================

/// User-visible, non-fault search outcomes
///
/// These are normal results, not errors. `Display` renders the message a
/// host UI would show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Notice {
    /// The query is shorter than the configured minimum
    QueryTooShort {
        /// The configured minimum joined-token length
        minimum: usize,
    },

    /// The query became too short because stop words were removed
    CommonWordsIgnored,

    /// Tokenization succeeded but no entry matched
    NothingFound,

    /// The replacement table rewrote the query; results reflect the
    /// rewritten form
    ShowingReplacedQuery {
        /// The query as typed
        original: String,
        /// The effective query after replacement
        replaced: String,
    },
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::QueryTooShort { minimum: 1 } => {
                write!(f, "Search too short: should be one character or more")
            }
            Notice::QueryTooShort { minimum } => {
                write!(f, "Search too short: should be {minimum} characters or more")
            }
            Notice::CommonWordsIgnored => {
                write!(f, "Nothing found: common words are largely ignored")
            }
            Notice::NothingFound => write!(f, "Nothing found"),
            Notice::ShowingReplacedQuery { original, replaced } => {
                write!(
                    f,
                    "Showing results for {replaced}. Search instead for {original}"
                )
            }
        }
    }
}

// ============================================================================
// SearchResponse
// ============================================================================

/// The outcome of one search invocation
///
/// Groups are ordered by each group's best contained score, ascending.
/// Repeating an identical invocation yields an identical response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Optional user-visible notice accompanying the results
    pub notice: Option<Notice>,

    /// Result groups, best group first
    pub groups: Vec<MatchGroup>,
}

impl SearchResponse {
    /// Create a response carrying only a notice
    pub fn notice(notice: Notice) -> Self {
        SearchResponse {
            notice: Some(notice),
            groups: vec![],
        }
    }

    /// Create a response from ordered groups
    pub fn with_groups(groups: Vec<MatchGroup>) -> Self {
        SearchResponse {
            notice: None,
            groups,
        }
    }

    /// The rendered notice message, if any
    pub fn message(&self) -> Option<String> {
        self.notice.as_ref().map(Notice::to_string)
    }

    /// Check if the response carries no matches
    pub fn is_empty(&self) -> bool {
        self.groups.iter().all(MatchGroup::is_empty)
    }

    /// Total number of matches across all groups
    pub fn total_matches(&self) -> usize {
        self.groups.iter().map(MatchGroup::len).sum()
    }

    /// All matches in final display order (groups concatenated)
    pub fn iter_matches(&self) -> impl Iterator<Item = &Match> {
        self.groups.iter().flat_map(|g| g.matches.iter())
    }
}

// ============================================================================
// Tests
// ============================================================================
