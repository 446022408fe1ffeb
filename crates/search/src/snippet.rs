//! Descriptive snippets
//!
//! A match displays the leading words of its entry's body text. Texts at
//! or above the configured word count are cut and suffixed with an
//! ellipsis.

/// Build the display snippet from an entry's body text
///
/// Keeps the first `max_words` space-separated words; when the text has at
/// least that many words it is truncated and suffixed with ` ...`.
pub fn make_snippet(text: &str, max_words: usize) -> String {
    let words: Vec<&str> = text.split(' ').collect();
    if words.len() < max_words {
        text.trim().to_string()
    } else {
        let mut snippet = words[..max_words].join(" ").trim().to_string();
        snippet.push_str(" ...");
        snippet
    }
}
