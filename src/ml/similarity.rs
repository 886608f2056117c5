//! Cosine-similarity ranking against stored question variants.
//!
//! The ranker is a linear scan: with a hand-curated corpus of at most a few
//! hundred variants there is nothing to gain from an index structure, and
//! the scan is the scalability ceiling to revisit if the corpus ever grows
//! by orders of magnitude.

use crate::knowledge::ResponseIndex;

/// The strongest variant match for a query.
#[derive(Debug, Clone, PartialEq)]
pub struct BestMatch {
    /// The matched variant's answer.
    pub answer: String,
    /// Cosine similarity of the query against that variant.
    pub score: f64,
}

/// Cosine similarity between two vectors.
///
/// Returns 0.0 for mismatched lengths or zero-magnitude inputs.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    if a.len() != b.len() {
        return 0.0;
    }

    let dot_product: f64 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let magnitude_a: f64 = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let magnitude_b: f64 = b.iter().map(|x| x * x).sum::<f64>().sqrt();

    if magnitude_a == 0.0 || magnitude_b == 0.0 {
        0.0
    } else {
        dot_product / (magnitude_a * magnitude_b)
    }
}

/// Scan every stored variant and return the maximum-similarity answer.
///
/// `variant_vectors` must be aligned with the index's iteration order.
/// Comparison is strict `>`, so the first-seen variant wins exact ties and
/// a query similar to nothing (score 0.0 everywhere) yields `None`.
pub fn find_best_match(
    query_vector: &[f64],
    index: &ResponseIndex,
    variant_vectors: &[Vec<f64>],
) -> Option<BestMatch> {
    let mut best: Option<BestMatch> = None;
    let mut max_score = 0.0;

    for ((_, answer), vector) in index.iter().zip(variant_vectors) {
        let score = cosine_similarity(query_vector, vector);
        if score > max_score {
            max_score = score;
            best = Some(BestMatch {
                answer: answer.to_string(),
                score,
            });
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cosine_identical_vectors() {
        let v = vec![0.5, 0.0, 1.2];
        assert!((cosine_similarity(&v, &v) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_cosine_orthogonal_vectors() {
        let a = vec![1.0, 0.0];
        let b = vec![0.0, 1.0];
        assert_eq!(cosine_similarity(&a, &b), 0.0);
    }

    #[test]
    fn test_cosine_zero_and_mismatched_vectors() {
        let a = vec![0.0, 0.0];
        let b = vec![1.0, 1.0];
        assert_eq!(cosine_similarity(&a, &b), 0.0);
        assert_eq!(cosine_similarity(&[1.0], &[1.0, 2.0]), 0.0);
    }

    #[test]
    fn test_find_best_match_picks_maximum() {
        let mut index = ResponseIndex::new();
        index.insert("water".into(), "water answer".into());
        index.insert("charges".into(), "charges answer".into());
        let vectors = vec![vec![1.0, 0.0], vec![0.0, 1.0]];

        let best = find_best_match(&[0.1, 0.9], &index, &vectors).unwrap();
        assert_eq!(best.answer, "charges answer");
        assert!(best.score > 0.9);
    }

    #[test]
    fn test_find_best_match_first_seen_wins_ties() {
        let mut index = ResponseIndex::new();
        index.insert("first".into(), "first answer".into());
        index.insert("second".into(), "second answer".into());
        // Identical vectors: identical scores, strict > keeps the first.
        let vectors = vec![vec![1.0, 1.0], vec![1.0, 1.0]];

        let best = find_best_match(&[1.0, 1.0], &index, &vectors).unwrap();
        assert_eq!(best.answer, "first answer");
    }

    #[test]
    fn test_find_best_match_zero_query_yields_none() {
        let mut index = ResponseIndex::new();
        index.insert("water".into(), "water answer".into());
        let vectors = vec![vec![1.0, 0.0]];

        assert!(find_best_match(&[0.0, 0.0], &index, &vectors).is_none());
    }
}
