//! Engine configuration.
//!
//! Two of the defaults here are uncalibrated constants inherited from the
//! deployed system: the 0.1 similarity threshold and the 0.3 Devanagari
//! ratio used for language detection. They are kept configurable because no
//! tuning rationale exists for either value.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default minimum cosine similarity for trusting a literal best match.
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.1;

/// Default fraction of Devanagari codepoints above which text is treated as Hindi.
pub const DEFAULT_DEVANAGARI_RATIO_THRESHOLD: f64 = 0.3;

/// Default cap on the fitted vocabulary size.
pub const DEFAULT_MAX_VOCABULARY_SIZE: usize = 5000;

/// Configuration for the chat engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Best-match scores strictly below this value fall back to a
    /// category-level response.
    pub similarity_threshold: f64,

    /// Devanagari character ratio above which input is detected as Hindi.
    pub devanagari_ratio_threshold: f64,

    /// Maximum number of terms retained by the vectorizer.
    pub max_vocabulary_size: usize,

    /// Path of the persisted model bundle.
    pub model_path: PathBuf,

    /// Optional endpoint serving the supplementary knowledge mapping.
    pub enrichment_endpoint: Option<String>,

    /// Bounded wait for the enrichment fetch.
    pub enrichment_timeout: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
            devanagari_ratio_threshold: DEFAULT_DEVANAGARI_RATIO_THRESHOLD,
            max_vocabulary_size: DEFAULT_MAX_VOCABULARY_SIZE,
            model_path: PathBuf::from("jalmitra_model.bin"),
            enrichment_endpoint: None,
            enrichment_timeout: Duration::from_secs(10),
        }
    }
}

impl EngineConfig {
    /// Create a configuration with all defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the similarity threshold.
    pub fn with_similarity_threshold(mut self, threshold: f64) -> Self {
        self.similarity_threshold = threshold;
        self
    }

    /// Set the Devanagari ratio threshold for language detection.
    pub fn with_devanagari_ratio_threshold(mut self, threshold: f64) -> Self {
        self.devanagari_ratio_threshold = threshold;
        self
    }

    /// Set the vocabulary cap.
    pub fn with_max_vocabulary_size(mut self, size: usize) -> Self {
        self.max_vocabulary_size = size;
        self
    }

    /// Set the model bundle path.
    pub fn with_model_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.model_path = path.into();
        self
    }

    /// Set the enrichment endpoint URL.
    pub fn with_enrichment_endpoint<S: Into<String>>(mut self, endpoint: S) -> Self {
        self.enrichment_endpoint = Some(endpoint.into());
        self
    }

    /// Set the enrichment fetch timeout.
    pub fn with_enrichment_timeout(mut self, timeout: Duration) -> Self {
        self.enrichment_timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.similarity_threshold, 0.1);
        assert_eq!(config.devanagari_ratio_threshold, 0.3);
        assert_eq!(config.max_vocabulary_size, 5000);
        assert!(config.enrichment_endpoint.is_none());
    }

    #[test]
    fn test_builder_setters() {
        let config = EngineConfig::new()
            .with_similarity_threshold(0.2)
            .with_model_path("/tmp/model.bin")
            .with_enrichment_endpoint("http://example.invalid/knowledge");

        assert_eq!(config.similarity_threshold, 0.2);
        assert_eq!(config.model_path, PathBuf::from("/tmp/model.bin"));
        assert_eq!(
            config.enrichment_endpoint.as_deref(),
            Some("http://example.invalid/knowledge")
        );
    }
}
