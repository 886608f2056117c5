//! TF-IDF vectorizer for question text.
//!
//! The vectorizer is fitted once over all corpus question variants and then
//! reused for every query. The vocabulary is bounded: when the corpus yields
//! more distinct terms than the cap, the most frequent terms by document
//! frequency are kept (ties broken lexicographically so refits are
//! deterministic). English stop words never enter the vocabulary.
//!
//! `transform` is infallible by design: out-of-vocabulary terms are ignored,
//! and text with no known terms produces a valid all-zero vector.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::analysis::stop_words::is_stop_word;
use crate::analysis::tokenize;
use crate::error::{JalmitraError, Result};

/// TF-IDF vectorizer over a bounded vocabulary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TfIdfVectorizer {
    /// Term -> feature index mapping.
    vocabulary: HashMap<String, usize>,
    /// Inverse document frequency per feature index.
    idf: Vec<f64>,
    /// Number of documents seen during fit.
    n_documents: usize,
    /// Vocabulary size cap.
    max_vocabulary_size: usize,
}

impl TfIdfVectorizer {
    /// Create an unfitted vectorizer with the given vocabulary cap.
    pub fn new(max_vocabulary_size: usize) -> Self {
        TfIdfVectorizer {
            vocabulary: HashMap::new(),
            idf: Vec::new(),
            n_documents: 0,
            max_vocabulary_size,
        }
    }

    /// Fit the vocabulary and IDF weights on the corpus questions.
    pub fn fit(&mut self, documents: &[&str]) -> Result<()> {
        if documents.is_empty() {
            return Err(JalmitraError::training(
                "cannot fit vectorizer on an empty corpus",
            ));
        }

        let mut document_frequency: HashMap<String, usize> = HashMap::new();
        for doc in documents {
            let unique_tokens: HashSet<String> = Self::analyze(doc).into_iter().collect();
            for token in unique_tokens {
                *document_frequency.entry(token).or_insert(0) += 1;
            }
        }

        // Rank terms by document frequency, lexicographic on ties, and keep
        // at most max_vocabulary_size of them. Index assignment follows the
        // same ranking so a refit over the same corpus is identical.
        let mut ranked: Vec<(String, usize)> = document_frequency.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked.truncate(self.max_vocabulary_size);

        let mut vocabulary = HashMap::with_capacity(ranked.len());
        let mut idf = Vec::with_capacity(ranked.len());
        let n = documents.len() as f64;
        for (idx, (term, df)) in ranked.into_iter().enumerate() {
            // Smooth IDF: ln((N + 1) / (df + 1)) + 1.
            idf.push(((n + 1.0) / (df as f64 + 1.0)).ln() + 1.0);
            vocabulary.insert(term, idx);
        }

        self.vocabulary = vocabulary;
        self.idf = idf;
        self.n_documents = documents.len();

        Ok(())
    }

    /// Transform text into a TF-IDF feature vector.
    ///
    /// Unknown terms are skipped; all-unknown text yields a zero vector.
    pub fn transform(&self, text: &str) -> Vec<f64> {
        let tokens = Self::analyze(text);
        let mut tf = vec![0.0; self.vocabulary.len()];

        for token in &tokens {
            if let Some(&idx) = self.vocabulary.get(token) {
                tf[idx] += 1.0;
            }
        }

        let doc_length = tokens.len() as f64;
        if doc_length > 0.0 {
            for count in &mut tf {
                *count /= doc_length;
            }
        }

        for (idx, weight) in tf.iter_mut().enumerate() {
            *weight *= self.idf[idx];
        }

        tf
    }

    /// Tokenize and drop stop words.
    fn analyze(text: &str) -> Vec<String> {
        tokenize(text)
            .into_iter()
            .filter(|t| !is_stop_word(t))
            .collect()
    }

    /// Number of terms in the fitted vocabulary.
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Number of documents the vectorizer was fitted on.
    pub fn document_count(&self) -> usize {
        self.n_documents
    }

    /// Whether `fit` has been called.
    pub fn is_fitted(&self) -> bool {
        self.n_documents > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fitted() -> TfIdfVectorizer {
        let documents = vec![
            "how to apply for irrigation connection",
            "what are the irrigation charges",
            "how to register complaint online",
        ];
        let mut vectorizer = TfIdfVectorizer::new(5000);
        vectorizer.fit(&documents).unwrap();
        vectorizer
    }

    #[test]
    fn test_fit_builds_vocabulary() {
        let vectorizer = fitted();
        assert!(vectorizer.is_fitted());
        assert!(vectorizer.vocabulary_size() > 0);
        assert_eq!(vectorizer.document_count(), 3);
    }

    #[test]
    fn test_fit_empty_corpus_fails() {
        let mut vectorizer = TfIdfVectorizer::new(5000);
        assert!(vectorizer.fit(&[]).is_err());
    }

    #[test]
    fn test_stop_words_excluded_from_vocabulary() {
        let mut vectorizer = TfIdfVectorizer::new(5000);
        vectorizer.fit(&["the irrigation and the connection"]).unwrap();
        // "the" and "and" are stop words; only two terms remain.
        assert_eq!(vectorizer.vocabulary_size(), 2);
    }

    #[test]
    fn test_vocabulary_cap_keeps_most_frequent_terms() {
        let documents = vec![
            "water water canal",
            "water charges",
            "water connection",
        ];
        let mut vectorizer = TfIdfVectorizer::new(2);
        vectorizer.fit(&documents).unwrap();

        assert_eq!(vectorizer.vocabulary_size(), 2);
        // "water" appears in every document and must survive the cap.
        let v = vectorizer.transform("water");
        assert!(v.iter().any(|&w| w > 0.0));
    }

    #[test]
    fn test_transform_out_of_vocabulary_is_zero_vector() {
        let vectorizer = fitted();
        let v = vectorizer.transform("asdkjashdkjh gibberish");
        assert_eq!(v.len(), vectorizer.vocabulary_size());
        assert!(v.iter().all(|&w| w == 0.0));
    }

    #[test]
    fn test_transform_is_deterministic() {
        let vectorizer = fitted();
        let first = vectorizer.transform("irrigation connection charges");
        let second = vectorizer.transform("irrigation connection charges");
        assert_eq!(first, second);
    }

    #[test]
    fn test_rare_terms_weigh_more() {
        let documents = vec![
            "water supply",
            "water charges",
            "water connection",
        ];
        let mut vectorizer = TfIdfVectorizer::new(5000);
        vectorizer.fit(&documents).unwrap();

        let common = vectorizer.transform("water");
        let rare = vectorizer.transform("charges");
        let max_common = common.iter().cloned().fold(0.0, f64::max);
        let max_rare = rare.iter().cloned().fold(0.0, f64::max);
        assert!(max_rare > max_common);
    }
}
