//! Text normalization for uigen-in.
//!
//! Matching is raw substring search over lowercased, trimmed text. No
//! tokenization happens here, so "hovered" still contains "red".

/// Normalize text for keyword matching
pub fn normalize(text: &str) -> String {
    text.to_lowercase().trim().to_string()
}

/// Number of non-overlapping occurrences of `needle` in `haystack`
pub fn occurrences(haystack: &str, needle: &str) -> usize {
    if needle.is_empty() {
        return 0;
    }
    haystack.matches(needle).count()
}

/// True when every word appears somewhere in the text
pub fn contains_all(text: &str, words: &[&str]) -> bool {
    words.iter().all(|w| text.contains(w))
}
