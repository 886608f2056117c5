//! Text analysis for query matching.
//!
//! This module provides the small analysis pipeline the matching engine
//! needs: message normalization, word tokenization, and the English
//! stop-word set excluded from the fitted vocabulary.

pub mod normalizer;
pub mod stop_words;
pub mod tokenizer;

pub use normalizer::normalize;
pub use stop_words::ENGLISH_STOP_WORDS;
pub use tokenizer::tokenize;
