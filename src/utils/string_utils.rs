//! String utility functions
//!
//! Utilities for working with strings and text data.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();
}

/// Collapse every run of whitespace to a single space and trim both ends
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text.trim(), " ").into_owned()
}

/// Split text into whitespace-separated tokens
///
/// Empty or whitespace-only text yields no tokens.
pub fn whitespace_tokens(text: &str) -> Vec<String> {
    let collapsed = collapse_whitespace(text);
    if collapsed.is_empty() {
        return Vec::new();
    }
    collapsed.split(' ').map(str::to_string).collect()
}
