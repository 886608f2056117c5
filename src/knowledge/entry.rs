//! Knowledge entry types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::knowledge::category::Category;

/// Supported interaction languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English.
    English,
    /// Hindi.
    Hindi,
}

/// A single hand-authored question/answer pair.
///
/// Entries are immutable once authored. The comma-separated keyword list
/// drives variant generation during corpus construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnowledgeEntry {
    /// Canonical question text.
    pub question: String,
    /// Canned answer returned for the question and its variants.
    pub answer: String,
    /// Topic the entry belongs to.
    pub category: Category,
    /// Language the question/answer pair is written in.
    pub language: Language,
    /// Comma-separated keywords used to generate question variants.
    pub keywords: String,
}

impl KnowledgeEntry {
    /// Create an entry from literal parts.
    pub fn new(
        question: &str,
        answer: &str,
        category: Category,
        language: Language,
        keywords: &str,
    ) -> Self {
        KnowledgeEntry {
            question: question.to_string(),
            answer: answer.to_string(),
            category,
            language,
            keywords: keywords.to_string(),
        }
    }

    /// Keywords split on commas, trimmed, with fragments of two characters
    /// or fewer dropped.
    pub fn keyword_list(&self) -> Vec<&str> {
        self.keywords
            .split(',')
            .map(str::trim)
            .filter(|k| k.chars().count() > 2)
            .collect()
    }
}

/// The assembled knowledge base: per-category question-key to answer maps.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KnowledgeBase {
    categories: BTreeMap<Category, BTreeMap<String, String>>,
}

impl KnowledgeBase {
    /// Create an empty knowledge base with every category present.
    pub fn new() -> Self {
        let mut categories = BTreeMap::new();
        for category in Category::ALL {
            categories.insert(category, BTreeMap::new());
        }
        KnowledgeBase { categories }
    }

    /// Store an answer under a normalized question key.
    pub fn insert(&mut self, category: Category, key: String, answer: String) {
        self.categories.entry(category).or_default().insert(key, answer);
    }

    /// Look up an answer by category and question key.
    pub fn get(&self, category: Category, key: &str) -> Option<&str> {
        self.categories
            .get(&category)
            .and_then(|m| m.get(key))
            .map(String::as_str)
    }

    /// Number of stored question keys in a category.
    pub fn category_len(&self, category: Category) -> usize {
        self.categories.get(&category).map_or(0, BTreeMap::len)
    }

    /// Total number of stored question keys.
    pub fn len(&self) -> usize {
        self.categories.values().map(BTreeMap::len).sum()
    }

    /// Whether the knowledge base holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
