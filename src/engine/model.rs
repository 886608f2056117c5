//! The immutable trained model bundle.
//!
//! One `TrainedModel` is produced per training pass and never mutated
//! afterwards; the engine swaps a fresh instance in atomically on retrain.
//! Variant vectors are computed once here so queries only pay for a single
//! `transform` plus the similarity scan.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::error::Result;
use crate::knowledge::enrichment::Enrichment;
use crate::knowledge::{Category, KnowledgeBase, KnowledgeBaseBuilder, ResponseIndex};
use crate::ml::{BestMatch, MultinomialNb, TfIdfVectorizer, find_best_match};

/// A fitted, immutable model: vectorizer, classifier, response index, and
/// the precomputed variant vectors the ranker scans.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainedModel {
    /// Fitted TF-IDF vectorizer.
    pub vectorizer: TfIdfVectorizer,
    /// Fitted category classifier.
    pub classifier: MultinomialNb,
    /// Per-category knowledge base.
    pub knowledge_base: KnowledgeBase,
    /// Variant-to-answer index, in corpus insertion order.
    pub response_index: ResponseIndex,
    /// TF-IDF vectors aligned with `response_index` iteration order.
    pub(crate) variant_vectors: Vec<Vec<f64>>,
    /// When the model was fitted.
    pub trained_at: DateTime<Utc>,
}

impl TrainedModel {
    /// Build the corpus and fit a complete model.
    pub fn train(
        builder: &KnowledgeBaseBuilder,
        enrichment: &Enrichment,
        config: &EngineConfig,
    ) -> Result<Self> {
        let (knowledge_base, corpus) = builder.build(enrichment);

        let questions = corpus.questions();
        let mut vectorizer = TfIdfVectorizer::new(config.max_vocabulary_size);
        vectorizer.fit(&questions)?;

        let vectors: Vec<Vec<f64>> = questions.iter().map(|q| vectorizer.transform(q)).collect();
        let labels: Vec<Category> = corpus.entries().iter().map(|e| e.category).collect();
        let classifier = MultinomialNb::fit(&vectors, &labels)?;

        let mut response_index = ResponseIndex::new();
        for entry in corpus.entries() {
            response_index.insert(entry.question.clone(), entry.answer.clone());
        }
        let variant_vectors = response_index
            .iter()
            .map(|(question, _)| vectorizer.transform(question))
            .collect();

        Ok(TrainedModel {
            vectorizer,
            classifier,
            knowledge_base,
            response_index,
            variant_vectors,
            trained_at: Utc::now(),
        })
    }

    /// Transform a normalized query into its feature vector.
    pub fn vectorize(&self, normalized_query: &str) -> Vec<f64> {
        self.vectorizer.transform(normalized_query)
    }

    /// Predict the query's category.
    pub fn classify(&self, query_vector: &[f64]) -> Category {
        self.classifier.predict(query_vector)
    }

    /// Rank the query against every stored variant.
    pub fn best_match(&self, query_vector: &[f64]) -> Option<BestMatch> {
        find_best_match(query_vector, &self.response_index, &self.variant_vectors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::enrichment::EnrichmentMap;
    use crate::ml::cosine_similarity;

    fn trained() -> TrainedModel {
        TrainedModel::train(
            &KnowledgeBaseBuilder::new(),
            &Enrichment::Fetched(EnrichmentMap::new()),
            &EngineConfig::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_train_fits_all_parts() {
        let model = trained();
        assert!(model.vectorizer.is_fitted());
        assert!(!model.response_index.is_empty());
        assert_eq!(model.variant_vectors.len(), model.response_index.len());
        assert!(!model.classifier.categories().is_empty());
    }

    #[test]
    fn test_exact_question_scores_one() {
        let model = trained();
        let query = "how to apply for irrigation connection";
        let query_vector = model.vectorize(query);

        let best = model.best_match(&query_vector).unwrap();
        assert!((best.score - 1.0).abs() < 1e-9);
        assert!(best.answer.starts_with("To apply for irrigation connection"));
    }

    #[test]
    fn test_variant_vectors_match_fresh_transforms() {
        let model = trained();
        for ((question, _), stored) in model.response_index.iter().zip(&model.variant_vectors) {
            let fresh = model.vectorize(question);
            assert!((cosine_similarity(&fresh, stored) - 1.0).abs() < 1e-9 || fresh.iter().all(|&w| w == 0.0));
        }
    }
}
