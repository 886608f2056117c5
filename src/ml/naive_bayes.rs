//! Multinomial naive-Bayes category classifier.
//!
//! Fitted jointly with the vectorizer over the same corpus: one TF-IDF
//! vector and one category label per question variant. Fractional TF-IDF
//! weights are accumulated like counts, with Laplace smoothing, which is the
//! standard multinomial formulation for weighted features.
//!
//! `predict` is total: a zero vector contributes nothing to the likelihood
//! term, so the prior-most-likely category wins. Argmax iterates categories
//! in their fixed declaration order with a strict comparison, making exact
//! ties deterministic.

use serde::{Deserialize, Serialize};

use crate::error::{JalmitraError, Result};
use crate::knowledge::Category;

/// Laplace smoothing constant.
const SMOOTHING_ALPHA: f64 = 1.0;

/// A fitted multinomial naive-Bayes model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MultinomialNb {
    /// Categories observed during fit, in `Category::ALL` order.
    categories: Vec<Category>,
    /// Log prior per observed category.
    log_priors: Vec<f64>,
    /// Per-category log feature probabilities.
    feature_log_prob: Vec<Vec<f64>>,
}

impl MultinomialNb {
    /// Fit the classifier on (vector, label) pairs.
    pub fn fit(vectors: &[Vec<f64>], labels: &[Category]) -> Result<Self> {
        if vectors.is_empty() {
            return Err(JalmitraError::training(
                "cannot fit classifier on an empty corpus",
            ));
        }
        if vectors.len() != labels.len() {
            return Err(JalmitraError::training(format!(
                "vector/label length mismatch: {} vs {}",
                vectors.len(),
                labels.len()
            )));
        }
        let n_features = vectors[0].len();
        if vectors.iter().any(|v| v.len() != n_features) {
            return Err(JalmitraError::training(
                "inconsistent feature vector dimensionality",
            ));
        }

        // Fixed declaration order keeps prediction deterministic.
        let categories: Vec<Category> = Category::ALL
            .into_iter()
            .filter(|c| labels.contains(c))
            .collect();

        let mut log_priors = Vec::with_capacity(categories.len());
        let mut feature_log_prob = Vec::with_capacity(categories.len());
        let total = labels.len() as f64;

        for &category in &categories {
            let mut class_count = 0usize;
            let mut feature_sums = vec![0.0; n_features];
            for (vector, &label) in vectors.iter().zip(labels) {
                if label == category {
                    class_count += 1;
                    for (sum, &weight) in feature_sums.iter_mut().zip(vector) {
                        *sum += weight;
                    }
                }
            }

            log_priors.push((class_count as f64 / total).ln());

            let total_weight: f64 = feature_sums.iter().sum();
            let denominator = total_weight + SMOOTHING_ALPHA * n_features as f64;
            let log_probs = feature_sums
                .into_iter()
                .map(|sum| ((sum + SMOOTHING_ALPHA) / denominator).ln())
                .collect();
            feature_log_prob.push(log_probs);
        }

        Ok(MultinomialNb {
            categories,
            log_priors,
            feature_log_prob,
        })
    }

    /// Predict the category for a feature vector.
    ///
    /// Never fails: unseen or all-zero vectors resolve to the
    /// prior-most-likely category.
    pub fn predict(&self, vector: &[f64]) -> Category {
        let mut best_category = self.categories[0];
        let mut best_score = f64::NEG_INFINITY;

        for ((&category, &log_prior), log_probs) in self
            .categories
            .iter()
            .zip(&self.log_priors)
            .zip(&self.feature_log_prob)
        {
            let likelihood: f64 = vector
                .iter()
                .zip(log_probs)
                .map(|(&weight, &log_prob)| weight * log_prob)
                .sum();
            let score = log_prior + likelihood;

            if score > best_score {
                best_score = score;
                best_category = category;
            }
        }

        best_category
    }

    /// Categories observed during fit.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ml::tfidf::TfIdfVectorizer;

    fn fitted() -> (TfIdfVectorizer, MultinomialNb) {
        let documents = vec![
            "how to apply for irrigation connection",
            "apply for connection online",
            "what are the irrigation charges",
            "kharif rabi charges per acre",
            "register complaint online",
            "track complaint status",
        ];
        let labels = vec![
            Category::Services,
            Category::Services,
            Category::Charges,
            Category::Charges,
            Category::Complaints,
            Category::Complaints,
        ];

        let mut vectorizer = TfIdfVectorizer::new(5000);
        vectorizer.fit(&documents).unwrap();
        let vectors: Vec<Vec<f64>> = documents.iter().map(|d| vectorizer.transform(d)).collect();
        let classifier = MultinomialNb::fit(&vectors, &labels).unwrap();
        (vectorizer, classifier)
    }

    #[test]
    fn test_predict_known_topics() {
        let (vectorizer, classifier) = fitted();

        let v = vectorizer.transform("charges for kharif crops");
        assert_eq!(classifier.predict(&v), Category::Charges);

        let v = vectorizer.transform("complaint status");
        assert_eq!(classifier.predict(&v), Category::Complaints);
    }

    #[test]
    fn test_predict_zero_vector_returns_prior_most_likely() {
        let (vectorizer, classifier) = fitted();
        let zero = vec![0.0; vectorizer.vocabulary_size()];

        // All priors are equal here, so the first category in declaration
        // order wins the tie.
        assert_eq!(classifier.predict(&zero), Category::Services);
    }

    #[test]
    fn test_predict_is_deterministic() {
        let (vectorizer, classifier) = fitted();
        let v = vectorizer.transform("online application");
        assert_eq!(classifier.predict(&v), classifier.predict(&v));
    }

    #[test]
    fn test_fit_rejects_empty_and_mismatched_input() {
        assert!(MultinomialNb::fit(&[], &[]).is_err());
        assert!(MultinomialNb::fit(&[vec![1.0]], &[]).is_err());
        assert!(
            MultinomialNb::fit(
                &[vec![1.0], vec![1.0, 2.0]],
                &[Category::About, Category::About]
            )
            .is_err()
        );
    }

    #[test]
    fn test_skewed_priors_break_zero_vector_ties() {
        let vectors = vec![vec![0.0, 0.0]; 3];
        let labels = vec![Category::Contact, Category::Contact, Category::About];
        let classifier = MultinomialNb::fit(&vectors, &labels).unwrap();

        // Contact has the larger prior even though About sorts earlier.
        assert_eq!(classifier.predict(&[0.0, 0.0]), Category::Contact);
    }
}
