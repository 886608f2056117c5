//! Hindi/English translation support.
//!
//! Translation here is deliberately shallow: fixed bilingual dictionaries,
//! a small table of canned Hindi answers keyed by English phrases, and
//! Devanagari-ratio language detection. There is no grammatical translation
//! and none is attempted; unmapped words pass through unchanged.

pub mod dictionary;
pub mod translator;

pub use translator::{Translation, TranslationKind, Translator};
