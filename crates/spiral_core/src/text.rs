//! Text helpers shared by both pipelines.

/// Number of words kept in a mirror reflection snippet.
pub const SNIPPET_WORDS: usize = 22;

/// Collapse whitespace runs to a single space and strip both ends.
pub fn normalize(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Case-fold for keyword matching.
pub fn fold(text: &str) -> String {
    text.to_lowercase()
}

/// Keep the first `max_words` whitespace-delimited tokens.
pub fn trim_to_words(text: &str, max_words: usize) -> String {
    text.split_whitespace()
        .take(max_words)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Plain substring containment against any keyword.
///
/// No word boundaries: "stuck" also hits inside longer tokens.
pub fn contains_any(haystack: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| haystack.contains(k))
}
