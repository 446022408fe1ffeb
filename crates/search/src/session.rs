//! Latest-wins invocation sequencing
//!
//! A host UI fires a search on every keystroke; the session serializes
//! those invocations so a displayer can never paint a stale result over a
//! newer one. Each fresh invocation gets a strictly increasing sequence
//! number, and a repeated identical invocation (same effective tokens,
//! same expanded category set) is reported as unchanged instead of being
//! recomputed.

use crate::engine::SearchEngine;
use crate::filter::CategoryFilter;
use crate::tokenizer::{tokenize_query, Tokenization};
use docfind_core::SearchResponse;
use tracing::debug;

// ============================================================================
// Submission
// ============================================================================

/// A response tagged with its invocation number
#[derive(Debug, Clone, PartialEq)]
pub struct SequencedResponse {
    /// Strictly increasing invocation number within the session
    pub invocation: u64,

    /// The computed response
    pub response: SearchResponse,
}

/// Outcome of submitting a query to a session
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    /// The invocation matches the previous one; the displayed result is
    /// already current
    Unchanged,

    /// A new result that supersedes every earlier invocation
    Fresh(SequencedResponse),
}

// ============================================================================
// SearchSession
// ============================================================================

/// Serialized search invocations over one engine
///
/// Single-threaded and synchronous: each submission runs to completion
/// before returning. A result is current only while its invocation number
/// equals [`SearchSession::latest`].
#[derive(Debug)]
pub struct SearchSession {
    engine: SearchEngine,
    latest: u64,
    last_key: Option<(String, Vec<String>)>,
    last_submission: Option<(String, Vec<String>)>,
}

impl SearchSession {
    /// Create a session over an engine
    pub fn new(engine: SearchEngine) -> Self {
        SearchSession {
            engine,
            latest: 0,
            last_key: None,
            last_submission: None,
        }
    }

    /// The underlying engine
    pub fn engine(&self) -> &SearchEngine {
        &self.engine
    }

    /// The invocation number of the newest submission (0 before the first)
    pub fn latest(&self) -> u64 {
        self.latest
    }

    /// Check whether a result with this invocation number may be displayed
    pub fn is_current(&self, invocation: u64) -> bool {
        invocation == self.latest && self.latest != 0
    }

    /// Submit a query and enabled-category selection
    pub fn submit<S: AsRef<str>>(&mut self, query: &str, enabled: &[S]) -> Submission {
        self.submit_opts(query, enabled, true)
    }

    /// Re-run the last submission with the replacement table disabled
    ///
    /// Returns `None` when nothing has been submitted yet. This backs the
    /// "search instead for ..." affordance of a rewrite notice.
    pub fn retry_without_replacements(&mut self) -> Option<Submission> {
        let (query, enabled) = self.last_submission.clone()?;
        Some(self.submit_opts(&query, &enabled, false))
    }

    fn submit_opts<S: AsRef<str>>(
        &mut self,
        query: &str,
        enabled: &[S],
        apply_replacements: bool,
    ) -> Submission {
        let enabled_owned: Vec<String> =
            enabled.iter().map(|s| s.as_ref().to_string()).collect();

        let key = self.invocation_key(query, &enabled_owned, apply_replacements);
        match key {
            Some(key) => {
                if self.last_key.as_ref() == Some(&key) {
                    debug!(invocation = self.latest, "identical invocation skipped");
                    return Submission::Unchanged;
                }
                self.last_key = Some(key);
            }
            // Short queries always re-report their notice.
            None => self.last_key = None,
        }

        self.last_submission = Some((query.to_string(), enabled_owned.clone()));
        self.latest += 1;

        let response = self
            .engine
            .search_opts(query, &enabled_owned, apply_replacements);

        Submission::Fresh(SequencedResponse {
            invocation: self.latest,
            response,
        })
    }

    /// The dedup key: effective tokens plus the expanded category set
    ///
    /// `None` when the query is too short to tokenize.
    fn invocation_key(
        &self,
        query: &str,
        enabled: &[String],
        apply_replacements: bool,
    ) -> Option<(String, Vec<String>)> {
        let config = self.engine.config();
        match tokenize_query(
            query,
            &config.lexicon,
            config.minimum_length,
            apply_replacements,
        ) {
            Tokenization::Tokens(tokens) => {
                let filter = CategoryFilter::new(&config.categories, enabled.iter());
                Some((tokens.effective(), filter.enabled_sorted()))
            }
            Tokenization::TooShort { .. } => None,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
