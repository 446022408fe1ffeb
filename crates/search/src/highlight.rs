//! Match decoration for highlighting
//!
//! Once an entry has a score, its display fields are decorated with the
//! sub-parts that matched: spans within the title, the first matching
//! alias, and every matching sub-entry. Spans index the original strings
//! so a host UI can wrap the matched text.

use crate::scorer::find_ignore_case;
use docfind_core::{Entry, Span, SubMatch};

/// The matched sub-parts of one entry
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Decoration {
    /// Matched spans within the entry title, deduplicated
    pub title_spans: Vec<Span>,

    /// First alias containing any query token, with its matched span
    pub aka: Option<(String, Span)>,

    /// Matched sub-entries, in sub-entry order, deduplicated by id
    pub sub_matches: Vec<SubMatch>,
}

/// Decorate a matched entry against the query token list
pub fn decorate(entry: &Entry, tokens: &[String]) -> Decoration {
    let mut decoration = Decoration::default();

    for token in tokens {
        if let Some(span) = find_ignore_case(&entry.title, token) {
            if !decoration.title_spans.contains(&span) {
                decoration.title_spans.push(span);
            }
        }

        if decoration.aka.is_none() {
            for aka in &entry.akas {
                if let Some(span) = find_ignore_case(aka, token) {
                    decoration.aka = Some((aka.clone(), span));
                    break;
                }
            }
        }
    }

    for sub in &entry.subentries {
        let span = tokens
            .iter()
            .find_map(|token| find_ignore_case(&sub.title, token));
        if let Some(span) = span {
            if !decoration.sub_matches.iter().any(|m| m.id == sub.id) {
                decoration.sub_matches.push(SubMatch {
                    title: sub.title.clone(),
                    id: sub.id.clone(),
                    span,
                });
            }
        }
    }

    decoration
}

// ============================================================================
// Tests
// ============================================================================
