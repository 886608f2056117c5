//! Threshold-based answer selection.

use crate::knowledge::Category;
use crate::ml::BestMatch;

use super::responses;

/// Choose between the literal best match and a category-level fallback.
///
/// A best match scoring strictly below the threshold is judged too weak to
/// trust; an honest category-level sentence beats a confidently wrong
/// literal answer. The comparison is strict: a score exactly at the
/// threshold keeps the literal answer.
pub fn select(best: Option<&BestMatch>, category: Category, similarity_threshold: f64) -> String {
    match best {
        Some(m) if m.score >= similarity_threshold => m.answer.clone(),
        _ => responses::category_response(category).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn best(score: f64) -> BestMatch {
        BestMatch {
            answer: "the literal answer".to_string(),
            score,
        }
    }

    #[test]
    fn test_above_threshold_keeps_literal_answer() {
        let m = best(0.5);
        assert_eq!(select(Some(&m), Category::Charges, 0.1), "the literal answer");
    }

    #[test]
    fn test_below_threshold_falls_back_to_category() {
        let m = best(0.0999);
        assert_eq!(
            select(Some(&m), Category::Charges, 0.1),
            responses::category_response(Category::Charges)
        );
    }

    #[test]
    fn test_exactly_at_threshold_keeps_literal_answer() {
        // Strict less-than semantics: equality does not trigger fallback.
        let m = best(0.1);
        assert_eq!(select(Some(&m), Category::Charges, 0.1), "the literal answer");
    }

    #[test]
    fn test_no_match_falls_back_to_category() {
        assert_eq!(
            select(None, Category::Contact, 0.1),
            responses::category_response(Category::Contact)
        );
    }
}
