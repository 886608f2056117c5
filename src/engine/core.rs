//! The chat engine entry point.
//!
//! `ChatEngine` owns the shared, effectively-read-only model behind a
//! `parking_lot::RwLock<Option<Arc<TrainedModel>>>`. Queries clone the Arc
//! and run against a consistent snapshot; retrain builds a complete new
//! model first and swaps it in atomically, so concurrent readers never see
//! a partially updated model.
//!
//! `get_response` never fails: every internal problem resolves to a fixed
//! textual response and is logged instead of surfaced.

use std::sync::Arc;

use log::{error, info};
use parking_lot::RwLock;

use crate::analysis::normalize;
use crate::config::EngineConfig;
use crate::engine::model::TrainedModel;
use crate::engine::{responses, selector};
use crate::error::{JalmitraError, Result};
use crate::knowledge::enrichment::{EnrichmentSource, HttpEnrichmentSource, StaticEnrichmentSource};
use crate::knowledge::{KnowledgeBaseBuilder, Language};
use crate::language::Translator;
use crate::storage;

/// Summary statistics for the current model.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ModelStats {
    /// Number of terms in the fitted vocabulary.
    pub vocabulary_size: usize,
    /// Number of distinct question variants.
    pub variant_count: usize,
    /// Number of categories the classifier observed.
    pub category_count: usize,
    /// When the model was fitted (RFC 3339).
    pub trained_at: String,
}

/// The bilingual FAQ-matching engine.
pub struct ChatEngine {
    config: EngineConfig,
    builder: KnowledgeBaseBuilder,
    enrichment: Arc<dyn EnrichmentSource>,
    translator: Translator,
    model: RwLock<Option<Arc<TrainedModel>>>,
}

impl std::fmt::Debug for ChatEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatEngine")
            .field("config", &self.config)
            .field("trained", &self.is_trained())
            .finish()
    }
}

impl ChatEngine {
    /// Create an engine from configuration.
    ///
    /// When an enrichment endpoint is configured the engine fetches from it
    /// at (re)train time; otherwise it serves the static fallback mapping.
    /// The engine starts untrained; call [`initialize`](Self::initialize).
    pub fn new(config: EngineConfig) -> Self {
        let enrichment: Arc<dyn EnrichmentSource> = match &config.enrichment_endpoint {
            Some(endpoint) => Arc::new(HttpEnrichmentSource::new(
                endpoint.clone(),
                config.enrichment_timeout,
            )),
            None => Arc::new(StaticEnrichmentSource::fallback()),
        };

        ChatEngine {
            config,
            builder: KnowledgeBaseBuilder::new(),
            enrichment,
            translator: Translator::new(),
            model: RwLock::new(None),
        }
    }

    /// Replace the enrichment source.
    pub fn with_enrichment_source(mut self, source: Arc<dyn EnrichmentSource>) -> Self {
        self.enrichment = source;
        self
    }

    /// Replace the knowledge entry list.
    pub fn with_builder(mut self, builder: KnowledgeBaseBuilder) -> Self {
        self.builder = builder;
        self
    }

    /// Load the persisted model if present and valid, otherwise train and
    /// persist a fresh one.
    pub fn initialize(&self) -> Result<()> {
        if let Some(model) = storage::load_model(&self.config.model_path)? {
            *self.model.write() = Some(Arc::new(model));
            return Ok(());
        }
        self.retrain()
    }

    /// Force a full rebuild: fetch enrichment, fit a new model, persist it,
    /// and swap it in atomically.
    pub fn retrain(&self) -> Result<()> {
        let enrichment = self.enrichment.fetch();
        let model = TrainedModel::train(&self.builder, &enrichment, &self.config)?;
        storage::save_model(&model, &self.config.model_path)?;

        info!(
            "trained model: {} variants, {} terms",
            model.response_index.len(),
            model.vectorizer.vocabulary_size()
        );
        *self.model.write() = Some(Arc::new(model));
        Ok(())
    }

    /// Whether a model is currently available.
    pub fn is_trained(&self) -> bool {
        self.model.read().is_some()
    }

    /// Statistics for the current model, if trained.
    pub fn stats(&self) -> Option<ModelStats> {
        self.current_model().map(|model| ModelStats {
            vocabulary_size: model.vectorizer.vocabulary_size(),
            variant_count: model.response_index.len(),
            category_count: model.classifier.categories().len(),
            trained_at: model.trained_at.to_rfc3339(),
        })
    }

    /// Detect the language of a message using the configured Devanagari
    /// ratio threshold.
    pub fn detect_language(&self, message: &str) -> Language {
        self.translator
            .detect_language(message, self.config.devanagari_ratio_threshold)
    }

    /// Answer a message in the requested language. Never fails: any error
    /// escaping the response flow resolves to a fixed language-specific
    /// apology instead of reaching the caller.
    pub fn get_response(&self, message: &str, language: Language) -> String {
        match self.try_respond(message, language) {
            Ok(response) => response,
            Err(e) => {
                error!("response flow failed: {e}");
                responses::error_response(language).to_string()
            }
        }
    }

    /// The response flow: translate, normalize, match, translate back.
    ///
    /// The fixed greeting for untrained models and empty input is returned
    /// as-is; the Hindi translate-back step applies only to answers produced
    /// by the matching layer.
    fn try_respond(&self, message: &str, language: Language) -> Result<String> {
        let english_message = match language {
            Language::Hindi => self.translator.translate_to_english(message).text,
            Language::English => message.to_string(),
        };
        let normalized = normalize(&english_message);

        let model = match self.current_model() {
            Some(model) if !normalized.is_empty() => model,
            _ => return Ok(responses::default_response(language).to_string()),
        };

        let answer = match self.respond(&model, &normalized) {
            Ok(answer) => answer,
            Err(e) => {
                error!("matching pipeline failed for query: {e}");
                responses::general_help_response().to_string()
            }
        };

        Ok(match language {
            Language::Hindi => self.translator.translate_to_hindi(&answer).text,
            Language::English => answer,
        })
    }

    /// Run vectorize -> classify -> rank -> select against a model snapshot.
    fn respond(&self, model: &TrainedModel, normalized: &str) -> Result<String> {
        if !model.vectorizer.is_fitted() {
            return Err(JalmitraError::other("model vectorizer is unfitted"));
        }

        let query_vector = model.vectorize(normalized);
        let category = model.classify(&query_vector);
        let best = model.best_match(&query_vector);

        Ok(selector::select(
            best.as_ref(),
            category,
            self.config.similarity_threshold,
        ))
    }

    fn current_model(&self) -> Option<Arc<TrainedModel>> {
        self.model.read().clone()
    }
}
