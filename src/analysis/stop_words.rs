//! English stop words excluded from the fitted vocabulary.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Common English words that carry no matching relevance for this corpus.
const ENGLISH_STOP_WORD_LIST: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "if", "in", "into", "is", "it",
    "no", "not", "of", "on", "or", "such", "that", "the", "their", "then", "there", "these",
    "they", "this", "to", "was", "will", "with",
];

/// English stop words as a HashSet.
pub static ENGLISH_STOP_WORDS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| ENGLISH_STOP_WORD_LIST.iter().copied().collect());

/// Check whether a token is an English stop word.
pub fn is_stop_word(token: &str) -> bool {
    ENGLISH_STOP_WORDS.contains(token)
}
