//! Regex-based word tokenization.
//!
//! Tokens are lowercased runs of two or more word characters. Single-letter
//! fragments carry no matching signal for this corpus and are dropped, in
//! line with the deployed vectorizer's token pattern.
//!
//! # Examples
//!
//! ```
//! use jalmitra::analysis::tokenize;
//!
//! let tokens = tokenize("Apply for irrigation connection");
//! assert_eq!(tokens, vec!["apply", "for", "irrigation", "connection"]);
//! ```

use std::sync::LazyLock;

use regex::Regex;

static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w\w+").expect("static pattern"));

/// Split text into lowercase word tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    WORD.find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}
