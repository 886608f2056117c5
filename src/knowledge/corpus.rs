//! Corpus and response index containers.
//!
//! The corpus is the raw ordered sequence of (variant, answer, category)
//! triples the vectorizer and classifier are fitted on; duplicates are kept
//! as generated. The response index dedups variants with last-write-wins
//! semantics while preserving each key's first insertion position, matching
//! the mapping behavior of the deployed system. Collisions only happen when
//! two hand-authored entries share a keyword, which the curators accept.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::knowledge::category::Category;

/// One (variant, answer, category) training triple.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorpusEntry {
    /// Question variant text.
    pub question: String,
    /// Answer shared with the variant's source entry.
    pub answer: String,
    /// Category shared with the variant's source entry.
    pub category: Category,
}

/// Ordered sequence of training triples.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Corpus {
    entries: Vec<CorpusEntry>,
}

impl Corpus {
    /// Create an empty corpus.
    pub fn new() -> Self {
        Corpus::default()
    }

    /// Append a training triple.
    pub fn push(&mut self, question: String, answer: String, category: Category) {
        self.entries.push(CorpusEntry {
            question,
            answer,
            category,
        });
    }

    /// All triples in insertion order.
    pub fn entries(&self) -> &[CorpusEntry] {
        &self.entries
    }

    /// All variant questions in insertion order.
    pub fn questions(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.question.as_str()).collect()
    }

    /// Number of triples.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the corpus is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Insertion-ordered variant-to-answer map.
///
/// Re-inserting an existing key overwrites its answer in place: the key
/// keeps its original position, the value is replaced. Iteration order is
/// therefore exactly corpus insertion order, which makes the ranker's
/// first-seen-wins tie handling deterministic.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResponseIndex {
    entries: Vec<(String, String)>,
    positions: HashMap<String, usize>,
}

impl ResponseIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        ResponseIndex::default()
    }

    /// Insert or overwrite an answer for a variant.
    pub fn insert(&mut self, question: String, answer: String) {
        match self.positions.get(&question) {
            Some(&pos) => {
                self.entries[pos].1 = answer;
            }
            None => {
                self.positions.insert(question.clone(), self.entries.len());
                self.entries.push((question, answer));
            }
        }
    }

    /// Look up the answer for a variant.
    pub fn get(&self, question: &str) -> Option<&str> {
        self.positions
            .get(question)
            .map(|&pos| self.entries[pos].1.as_str())
    }

    /// Iterate (variant, answer) pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(q, a)| (q.as_str(), a.as_str()))
    }

    /// Number of distinct variants.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the index is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
