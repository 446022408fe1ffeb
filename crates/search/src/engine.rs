//! The search engine: a pure function over the catalog
//!
//! One invocation runs the full pipeline synchronously: tokenize the
//! query, expand and apply the category filter, score each surviving
//! entry, decorate matches for display, then group and order the results.
//! The engine holds no mutable state; identical inputs produce identical
//! responses.

use crate::filter::CategoryFilter;
use crate::group::group_matches;
use crate::highlight::decorate;
use crate::scorer::score_entry;
use crate::snippet::make_snippet;
use crate::tokenizer::{tokenize_query, QueryTokens, Tokenization};
use docfind_core::{Catalog, Match, Notice, Result, SearchConfig, SearchResponse, NO_MATCH_SCORE};
use std::sync::Arc;
use tracing::debug;

// ============================================================================
// SearchEngine
// ============================================================================

/// Query matcher and ranker over a fixed entry collection
///
/// The catalog is loaded once and only read afterwards; every search is a
/// pure function of (catalog, config, query, enabled categories).
#[derive(Debug, Clone)]
pub struct SearchEngine {
    catalog: Arc<Catalog>,
    config: SearchConfig,
}

impl SearchEngine {
    /// Create an engine over a validated catalog
    ///
    /// Fails fast on a degenerate configuration.
    pub fn new(catalog: Arc<Catalog>, config: SearchConfig) -> Result<Self> {
        config.validate()?;
        Ok(SearchEngine { catalog, config })
    }

    /// The engine's catalog
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The engine's configuration
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Run a search with replacements enabled
    pub fn search<S: AsRef<str>>(&self, query: &str, enabled: &[S]) -> SearchResponse {
        self.search_opts(query, enabled, true)
    }

    /// Run a search, optionally disabling the replacement table
    ///
    /// Hosts pass `apply_replacements = false` to honor a "search instead
    /// for" retry after a [`Notice::ShowingReplacedQuery`].
    pub fn search_opts<S: AsRef<str>>(
        &self,
        query: &str,
        enabled: &[S],
        apply_replacements: bool,
    ) -> SearchResponse {
        let tokens = match tokenize_query(
            query,
            &self.config.lexicon,
            self.config.minimum_length,
            apply_replacements,
        ) {
            Tokenization::TooShort {
                stop_words_removed: true,
            } => {
                debug!(query, "query reduced to stop words");
                return SearchResponse::notice(Notice::CommonWordsIgnored);
            }
            Tokenization::TooShort { .. } => {
                debug!(query, minimum = self.config.minimum_length, "query too short");
                return SearchResponse::notice(Notice::QueryTooShort {
                    minimum: self.config.minimum_length,
                });
            }
            Tokenization::Tokens(tokens) => tokens,
        };

        let response = self.run_scored(&tokens, enabled);
        debug!(
            query,
            tokens = ?tokens.tokens,
            groups = response.groups.len(),
            matches = response.total_matches(),
            "search completed"
        );
        response
    }

    fn run_scored<S: AsRef<str>>(&self, tokens: &QueryTokens, enabled: &[S]) -> SearchResponse {
        let filter = CategoryFilter::new(&self.config.categories, enabled.iter());

        let mut matches: Vec<Match> = Vec::new();
        for entry in self.catalog.entries() {
            let category = match filter.admit(&entry.category) {
                Some(category) => category,
                None => continue,
            };

            let score = match score_entry(&tokens.tokens, &entry.search_fields()) {
                Some(score) if score < NO_MATCH_SCORE => score,
                _ => continue,
            };

            let decoration = decorate(entry, &tokens.tokens);
            matches.push(Match {
                score,
                title: entry.title.clone(),
                title_spans: decoration.title_spans,
                snippet: make_snippet(&entry.text, self.config.snippet_words),
                location: entry.location.clone(),
                aka: decoration.aka,
                sub_matches: decoration.sub_matches,
                category,
            });
        }

        if matches.is_empty() {
            return SearchResponse::notice(Notice::NothingFound);
        }

        let mut response = SearchResponse::with_groups(group_matches(matches));
        if tokens.replaced {
            response.notice = Some(Notice::ShowingReplacedQuery {
                original: tokens.raw.clone(),
                replaced: tokens.effective(),
            });
        }
        response
    }
}

// ============================================================================
// Tests
// ============================================================================
