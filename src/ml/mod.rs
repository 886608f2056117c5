//! Matching models for the response engine.
//!
//! This module provides the three numeric pieces of the matching pipeline:
//! TF-IDF vectorization over the question corpus, a multinomial naive-Bayes
//! category classifier, and cosine-similarity ranking against the stored
//! question variants.

pub mod naive_bayes;
pub mod similarity;
pub mod tfidf;

pub use naive_bayes::MultinomialNb;
pub use similarity::{BestMatch, cosine_similarity, find_best_match};
pub use tfidf::TfIdfVectorizer;
