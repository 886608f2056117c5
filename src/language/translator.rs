//! Best-effort Hindi/English translation.
//!
//! Every translation resolves to usable text; the outcome kind records how
//! it was produced (canned phrase, word substitution, or pass-through) so
//! callers and tests can observe which path was taken instead of the
//! decision being swallowed.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::knowledge::Language;
use crate::language::dictionary::{EN_HI_DICT, HI_EN_DICT, HI_EN_PHRASES, HINDI_PHRASE_RESPONSES};

static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s]").expect("static pattern"));

/// How a translation result was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TranslationKind {
    /// A canned phrase response replaced the whole text.
    Phrase,
    /// At least one word was substituted via the bilingual dictionary.
    WordByWord,
    /// Nothing matched; the text passed through unchanged.
    Passthrough,
    /// Nothing matched; the text was prefixed with the Hindi
    /// "Information:" marker.
    Marked,
}

/// A translation result with its provenance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    /// The output text.
    pub text: String,
    /// How the output was produced.
    pub kind: TranslationKind,
}

/// Dictionary-driven translator between Hindi and English.
#[derive(Debug, Clone, Copy, Default)]
pub struct Translator;

impl Translator {
    /// Create a translator.
    pub fn new() -> Self {
        Translator
    }

    /// Translate Hindi text to its English equivalent.
    ///
    /// Multi-word dictionary phrases are replaced first, then remaining
    /// words are substituted one by one. Untranslatable words pass through
    /// unchanged.
    pub fn translate_to_english(&self, hindi_text: &str) -> Translation {
        if hindi_text.is_empty() {
            return Translation {
                text: String::new(),
                kind: TranslationKind::Passthrough,
            };
        }

        let mut text = hindi_text.to_string();
        let mut substituted = false;

        for &(hindi, english) in HI_EN_PHRASES.iter() {
            if text.contains(hindi) {
                text = text.replace(hindi, english);
                substituted = true;
            }
        }

        let mut translated_words = Vec::new();
        for word in text.split_whitespace() {
            let clean = NON_WORD.replace_all(word, "");
            match HI_EN_DICT.get(clean.as_ref()) {
                Some(&english) => {
                    translated_words.push(english.to_string());
                    substituted = true;
                }
                None => translated_words.push(word.to_string()),
            }
        }

        Translation {
            text: translated_words.join(" "),
            kind: if substituted {
                TranslationKind::WordByWord
            } else {
                TranslationKind::Passthrough
            },
        }
    }

    /// Translate an English answer to Hindi.
    ///
    /// Checks the canned phrase table first, then falls back to word-by-word
    /// substitution. When no substitution happens at all, the untranslated
    /// text is prefixed with a Hindi "Information:" marker rather than being
    /// returned as silently untranslated English.
    pub fn translate_to_hindi(&self, english_text: &str) -> Translation {
        if english_text.is_empty() {
            return Translation {
                text: String::new(),
                kind: TranslationKind::Passthrough,
            };
        }

        let english_lower = english_text.to_lowercase();
        for &(phrase, hindi_response) in HINDI_PHRASE_RESPONSES {
            if english_lower.contains(phrase) {
                return Translation {
                    text: hindi_response.to_string(),
                    kind: TranslationKind::Phrase,
                };
            }
        }

        let mut translated_words = Vec::new();
        for word in english_text.split_whitespace() {
            let clean = word
                .to_lowercase()
                .trim_matches(['.', ',', '!', '?', ';', ':'])
                .to_string();
            match EN_HI_DICT.get(clean.as_str()) {
                Some(&hindi) => translated_words.push(hindi.to_string()),
                None => translated_words.push(word.to_string()),
            }
        }

        let result = translated_words.join(" ");
        if result == english_text {
            Translation {
                text: format!("जानकारी: {english_text}"),
                kind: TranslationKind::Marked,
            }
        } else {
            Translation {
                text: result,
                kind: TranslationKind::WordByWord,
            }
        }
    }

    /// Detect whether text is Hindi or English by Devanagari ratio.
    ///
    /// Counts codepoints in the Devanagari block (U+0900..=U+097F) against
    /// all non-whitespace codepoints; a ratio strictly above the threshold
    /// means Hindi. Empty text counts as English.
    pub fn detect_language(&self, text: &str, devanagari_ratio_threshold: f64) -> Language {
        let total_chars = text.chars().filter(|c| !c.is_whitespace()).count();
        if total_chars == 0 {
            return Language::English;
        }

        let hindi_chars = text
            .chars()
            .filter(|&c| ('\u{0900}'..='\u{097F}').contains(&c))
            .count();

        let ratio = hindi_chars as f64 / total_chars as f64;
        if ratio > devanagari_ratio_threshold {
            Language::Hindi
        } else {
            Language::English
        }
    }
}
