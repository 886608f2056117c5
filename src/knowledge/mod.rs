//! Knowledge base construction.
//!
//! This module owns the curated question/answer corpus: the closed category
//! set, the literal knowledge entries, keyword-driven question variant
//! generation, the ordered corpus and response index derived from them, and
//! the best-effort enrichment source that can extend the base with
//! supplementary terms.

pub mod builder;
pub mod category;
pub mod corpus;
pub mod enrichment;
pub mod entry;

pub use builder::KnowledgeBaseBuilder;
pub use category::Category;
pub use corpus::{Corpus, CorpusEntry, ResponseIndex};
pub use enrichment::{Enrichment, EnrichmentSource, HttpEnrichmentSource, StaticEnrichmentSource};
pub use entry::{KnowledgeBase, KnowledgeEntry, Language};
