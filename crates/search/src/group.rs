//! Result grouping and ordering
//!
//! Surviving matches are partitioned by resolved category. Within a group
//! matches sort ascending by score; groups sort ascending by their best
//! (lowest) contained score. Both sorts are stable, so equal scores keep
//! catalog order and equal groups keep first-match order.

use docfind_core::{Match, MatchGroup};
use std::collections::HashMap;

/// Partition scored matches into ordered category groups
///
/// `matches` must be in catalog order; that order is the tie-break within
/// groups.
pub fn group_matches(matches: Vec<Match>) -> Vec<MatchGroup> {
    let mut order: Vec<String> = Vec::new();
    let mut clusters: HashMap<String, Vec<Match>> = HashMap::new();

    for m in matches {
        if !clusters.contains_key(&m.category) {
            order.push(m.category.clone());
        }
        clusters.entry(m.category.clone()).or_default().push(m);
    }

    let mut groups: Vec<MatchGroup> = order
        .into_iter()
        .map(|category| {
            let mut matches = clusters.remove(&category).unwrap_or_default();
            matches.sort_by(|a, b| a.score.total_cmp(&b.score));
            MatchGroup { category, matches }
        })
        .collect();

    groups.sort_by(|a, b| a.best_score().total_cmp(&b.best_score()));
    groups
}

// ============================================================================
// Tests
// ============================================================================
