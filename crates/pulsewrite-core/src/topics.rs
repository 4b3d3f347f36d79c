//! Normalization of topic labels returned by the analysis backend.
//!
//! The backend sometimes returns several topics joined into one string
//! (`"Tech, AI"`) and leaks tokenizer artifacts such as `"non"` or `"com"`.

use std::collections::HashSet;

/// Tokens the topic model emits that are never meaningful topics.
const STOP_TOKENS: &[&str] = &["non", "com"];

/// Title-case every whitespace-separated word: first character upper,
/// the rest lower. Inner whitespace collapses to a single space.
#[must_use]
pub fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Flatten, clean and de-duplicate raw topic labels.
///
/// Comma-joined entries are split into separate topics, each token is
/// trimmed and title-cased, empty tokens and the stop tokens `non`/`com`
/// are dropped, and duplicates (case-insensitive) keep their first position.
#[must_use]
pub fn normalize_topics(raw: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    raw.iter()
        .flat_map(|entry| entry.split(','))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .filter(|token| !STOP_TOKENS.contains(&token.to_lowercase().as_str()))
        .map(title_case)
        .filter(|topic| seen.insert(topic.to_lowercase()))
        .collect()
}
