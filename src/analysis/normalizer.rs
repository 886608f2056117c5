//! Message normalization.
//!
//! Incoming messages are normalized before vectorization: lowercased,
//! punctuation collapsed to spaces, repeated whitespace collapsed, and
//! surrounding whitespace stripped. The same rules apply to Devanagari
//! text since `\w` is Unicode-aware.
//!
//! # Examples
//!
//! ```
//! use jalmitra::analysis::normalize;
//!
//! assert_eq!(normalize("  How to APPLY?!  "), "how to apply");
//! assert_eq!(normalize("???"), "");
//! ```

use std::sync::LazyLock;

use regex::Regex;

static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s]").expect("static pattern"));

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("static pattern"));

/// Normalize a raw message for matching.
///
/// Returns an empty string when the input carries no word characters at
/// all (e.g. `"???"`), which the engine treats as an empty query.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let no_punct = NON_WORD.replace_all(&lowered, " ");
    let collapsed = WHITESPACE.replace_all(&no_punct, " ");
    collapsed.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_basic() {
        assert_eq!(
            normalize("How to apply for irrigation connection?"),
            "how to apply for irrigation connection"
        );
    }

    #[test]
    fn test_normalize_collapses_punctuation_and_whitespace() {
        assert_eq!(normalize("water -- supply!!   status"), "water supply status");
    }

    #[test]
    fn test_normalize_empty_results() {
        assert_eq!(normalize("   "), "");
        assert_eq!(normalize("???"), "");
        assert_eq!(normalize("!!! ... ---"), "");
    }

    #[test]
    fn test_normalize_devanagari_preserved() {
        assert_eq!(normalize("सिंचाई शुल्क क्या है?"), "सिंचाई शुल्क क्या है");
    }
}
