//! Word tokenizer for free-text log lines

use regex::Regex;
use std::sync::OnceLock;

/// Anything that is not a lowercase ASCII letter, digit, or whitespace
fn separator_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"[^a-z0-9\s]").unwrap())
}

/// Split text into lowercase word tokens.
///
/// Punctuation and non-ASCII characters act as separators and empty tokens
/// are dropped, so `"React, and SQL!!"` yields `["react", "and", "sql"]`.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    separator_regex()
        .replace_all(&lowered, " ")
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
