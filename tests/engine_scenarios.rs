//! End-to-end scenarios for the chat engine.

use std::collections::BTreeMap;
use std::sync::Arc;

use jalmitra::config::EngineConfig;
use jalmitra::engine::{responses, ChatEngine};
use jalmitra::knowledge::{Category, Language, StaticEnrichmentSource};
use tempfile::TempDir;

fn trained_engine(dir: &TempDir) -> ChatEngine {
    let config = EngineConfig::default().with_model_path(dir.path().join("model.bin"));
    let engine = ChatEngine::new(config);
    engine.initialize().unwrap();
    engine
}

#[test]
fn test_exact_question_returns_literal_answer() {
    let dir = TempDir::new().unwrap();
    let engine = trained_engine(&dir);

    let response = engine.get_response(
        "How do I apply for irrigation connection?",
        Language::English,
    );
    assert!(
        response.starts_with("To apply for irrigation connection: 1) Visit your nearest WRD office"),
        "unexpected response: {response}"
    );
}

#[test]
fn test_paraphrased_question_reaches_the_same_answer() {
    let dir = TempDir::new().unwrap();
    let engine = trained_engine(&dir);

    let exact = engine.get_response("How to apply for irrigation connection?", Language::English);
    let paraphrased = engine.get_response("apply for irrigation connection", Language::English);
    assert_eq!(exact, paraphrased);
}

#[test]
fn test_responses_are_deterministic() {
    let dir = TempDir::new().unwrap();
    let engine = trained_engine(&dir);

    let first = engine.get_response("What are the irrigation charges?", Language::English);
    let second = engine.get_response("What are the irrigation charges?", Language::English);
    assert_eq!(first, second);

    // A separately trained engine gives the same answer.
    let other_dir = TempDir::new().unwrap();
    let other = trained_engine(&other_dir);
    assert_eq!(
        other.get_response("What are the irrigation charges?", Language::English),
        first
    );
}

#[test]
fn test_empty_and_punctuation_only_input_returns_greeting() {
    let dir = TempDir::new().unwrap();
    let engine = trained_engine(&dir);

    assert_eq!(
        engine.get_response("", Language::English),
        responses::default_response(Language::English)
    );
    assert_eq!(
        engine.get_response("???", Language::English),
        responses::default_response(Language::English)
    );
    assert_eq!(
        engine.get_response("   ", Language::Hindi),
        responses::default_response(Language::Hindi)
    );
}

#[test]
fn test_unrelated_query_falls_back_to_a_category_response() {
    let dir = TempDir::new().unwrap();
    let engine = trained_engine(&dir);

    let response = engine.get_response("xyzzy frobnicate quux", Language::English);
    let category_responses: Vec<&str> = Category::ALL
        .iter()
        .map(|&c| responses::category_response(c))
        .collect();
    assert!(
        category_responses.contains(&response.as_str()),
        "expected a category fallback, got: {response}"
    );
}

#[test]
fn test_high_threshold_forces_category_fallback() {
    let dir = TempDir::new().unwrap();
    let config = EngineConfig::default()
        .with_model_path(dir.path().join("model.bin"))
        .with_similarity_threshold(1.1);
    let engine = ChatEngine::new(config);
    engine.initialize().unwrap();

    // Cosine similarity never exceeds 1.0, so even an exact question falls
    // back to its category sentence.
    let response = engine.get_response("How to apply for irrigation connection?", Language::English);
    assert_eq!(response, responses::category_response(Category::Services));
}

#[test]
fn test_hindi_charges_question_gets_canned_hindi_answer() {
    let dir = TempDir::new().unwrap();
    let engine = trained_engine(&dir);

    assert_eq!(engine.detect_language("सिंचाई शुल्क क्या है?"), Language::Hindi);

    let response = engine.get_response("सिंचाई शुल्क क्या है?", Language::Hindi);
    assert!(
        response.starts_with("सिंचाई शुल्क: खरीफ 50-100 रुपये/एकड़"),
        "unexpected response: {response}"
    );
}

#[test]
fn test_hindi_response_without_known_phrase_is_marked() {
    let dir = TempDir::new().unwrap();
    let engine = trained_engine(&dir);

    let response = engine.get_response("नहर की जानकारी", Language::Hindi);
    assert!(!response.is_empty());
    // Whatever path the answer takes, a Hindi request never yields a bare
    // untranslated English sentence without the information marker.
    let devanagari = response
        .chars()
        .any(|c| ('\u{0900}'..='\u{097F}').contains(&c));
    assert!(devanagari, "expected Devanagari content: {response}");
}

#[test]
fn test_retrain_picks_up_new_enrichment_terms() {
    let dir = TempDir::new().unwrap();
    let config = EngineConfig::default().with_model_path(dir.path().join("model.bin"));

    let mut services = BTreeMap::new();
    services.insert(
        "canal slot booking".to_string(),
        "Canal slots can be booked at the division office between 10 AM and 4 PM.".to_string(),
    );
    let mut map = BTreeMap::new();
    map.insert(Category::Services, services);

    let engine = ChatEngine::new(config)
        .with_enrichment_source(Arc::new(StaticEnrichmentSource::new(map)));
    engine.retrain().unwrap();

    let response = engine.get_response("what is canal slot booking", Language::English);
    assert_eq!(
        response,
        "Canal slots can be booked at the division office between 10 AM and 4 PM."
    );
}

#[test]
fn test_persisted_model_round_trip() {
    let dir = TempDir::new().unwrap();
    let config = EngineConfig::default().with_model_path(dir.path().join("model.bin"));

    let engine = ChatEngine::new(config.clone());
    engine.initialize().unwrap();
    let trained_at = engine.stats().unwrap().trained_at;
    let answer = engine.get_response("What is PMKSY scheme?", Language::English);

    let reloaded = ChatEngine::new(config);
    reloaded.initialize().unwrap();
    assert_eq!(reloaded.stats().unwrap().trained_at, trained_at);
    assert_eq!(
        reloaded.get_response("What is PMKSY scheme?", Language::English),
        answer
    );
}

#[test]
fn test_stats_reflect_trained_model() {
    let dir = TempDir::new().unwrap();
    let engine = trained_engine(&dir);

    let stats = engine.stats().unwrap();
    assert!(stats.vocabulary_size > 0);
    assert!(stats.variant_count > 18);
    assert_eq!(stats.category_count, Category::ALL.len());
}
