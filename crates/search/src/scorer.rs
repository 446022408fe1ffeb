//! Find-and-score: the ranking routine
//!
//! Each query token scans an entry's searchable fields in order; the first
//! field containing a case-insensitive substring match wins for that token.
//! The candidate score rewards full-field, prefix, and suffix matches,
//! scales with the matched fraction of the field, and is dampened
//! multiplicatively for later fields and later query tokens. The entry's
//! score is the minimum candidate over all matching tokens; lower is
//! better, and [`NO_MATCH_SCORE`] is the exclusive upper bound for real
//! matches.
//!
//! The dampening arithmetic is a long-standing heuristic tie-break, not a
//! principled ranking function; downstream ordering depends on its exact
//! behavior, so the constants and the multiplication order are load-bearing.

use docfind_core::{Span, NO_MATCH_SCORE};

/// Weight of one rank point before dampening
const RANK_FACTOR: f64 = 10_000.0;

/// Dampening per field position skipped before the winning field
const DAMPENING_FIELD: f64 = 0.99;

/// Dampening per query-token position after the first
const DAMPENING_QUERY: f64 = 0.99;

// ============================================================================
// Case-insensitive matching
// ============================================================================

/// Find the first case-insensitive occurrence of `needle` in `haystack`
///
/// `needle` must already be lowercase (query tokens are). The returned span
/// indexes the original `haystack` bytes. Empty needles never match.
pub fn find_ignore_case(haystack: &str, needle: &str) -> Option<Span> {
    if needle.is_empty() {
        return None;
    }
    for (pos, _) in haystack.char_indices() {
        if let Some(len) = ci_prefix_len(&haystack[pos..], needle) {
            return Some(Span::new(pos, pos + len));
        }
    }
    None
}

/// Length of the prefix of `rest` that case-folds to `needle`, if any
fn ci_prefix_len(rest: &str, needle: &str) -> Option<usize> {
    let mut want = needle.chars();
    let mut next = want.next()?;
    let mut consumed = 0;
    for c in rest.chars() {
        for folded in c.to_lowercase() {
            if folded != next {
                return None;
            }
            match want.next() {
                Some(n) => next = n,
                // The span covers the whole final character even when the
                // needle ends inside its case expansion.
                None => return Some(consumed + c.len_utf8()),
            }
        }
        consumed += c.len_utf8();
    }
    None
}

// ============================================================================
// score_entry
// ============================================================================

/// Score an entry's searchable fields against a query token list
///
/// `fields` must be ordered `[title, text, akas..., subentry titles...]`.
/// Returns `None` when no token matches any field; otherwise the minimum
/// candidate score, strictly below [`NO_MATCH_SCORE`].
pub fn score_entry(tokens: &[String], fields: &[&str]) -> Option<f64> {
    let mut best: Option<f64> = None;

    for (token_idx, token) in tokens.iter().enumerate() {
        if let Some(candidate) = score_token(token, token_idx, fields) {
            best = Some(match best {
                Some(b) => b.min(candidate),
                None => candidate,
            });
        }
    }

    best
}

/// Score one query token: first matching field wins
fn score_token(token: &str, token_idx: usize, fields: &[&str]) -> Option<f64> {
    for (field_idx, field) in fields.iter().enumerate() {
        let span = match find_ignore_case(field, token) {
            Some(span) => span,
            None => continue,
        };

        // Rank points: (4) full match, (3) prefix, (2) suffix, (1) infix.
        let mut rank_points = 1.0;
        if span.start == 0 {
            rank_points += 2.0;
        }
        if span.end == field.len() {
            rank_points += 1.0;
        }

        let ratio = span.len() as f64 / field.len() as f64;

        let mut delta = rank_points * RANK_FACTOR * ratio;
        for _ in 0..token_idx {
            delta *= DAMPENING_QUERY;
        }
        for _ in 0..field_idx {
            delta *= DAMPENING_FIELD;
        }

        return Some(NO_MATCH_SCORE - delta);
    }

    None
}

// ============================================================================
// Tests
// ============================================================================
