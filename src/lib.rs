//! # Jalmitra
//!
//! A bilingual (English/Hindi) FAQ assistant library for water-resources
//! department services.
//!
//! ## Features
//!
//! - TF-IDF vectorization with a capped vocabulary
//! - Naive Bayes intent classification over eight service categories
//! - Cosine-similarity nearest-neighbor answer retrieval
//! - Category fallback responses below a similarity threshold
//! - Dictionary-based Hindi/English translation and language detection
//! - Model persistence with atomic writes

pub mod analysis;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod knowledge;
pub mod language;
pub mod ml;
pub mod storage;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
