//! Pure utility functions for content manipulation
//!
//! These functions contain NO side effects - they take inputs and return outputs
//! without touching the store, making API calls, or performing I/O.
//! This makes them easy to test and reason about.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Matches any HTML/XML tag, e.g. <p>, </div>, <br/>
    static ref HTML_TAG_REGEX: Regex = Regex::new(r"<[^>]*>").unwrap();
}

/// Remove all HTML tags from a string, leaving only the text content.
pub fn strip_html(content: &str) -> String {
    HTML_TAG_REGEX.replace_all(content, "").into_owned()
}

/// Take the first `max_chars` characters of a string.
///
/// Counts characters, not bytes: article bodies and chat messages are
/// Italian text, so truncation must never land inside a multi-byte char.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

/// Derive an article excerpt from its body.
///
/// Strips HTML tags, then truncates to at most `max_length` characters
/// including the trailing "..." when the plain text is longer than the
/// limit. Text at or under the limit is returned unchanged.
pub fn generate_excerpt(content: &str, max_length: usize) -> String {
    let plain = strip_html(content);
    if plain.chars().count() > max_length {
        let truncate_at = max_length.saturating_sub(3);
        format!("{}...", truncate_chars(&plain, truncate_at))
    } else {
        plain
    }
}
