//! Error types for the Jalmitra library.
//!
//! All fallible operations in the crate return [`Result`], an alias over
//! [`JalmitraError`]. Note that the response path (`ChatEngine::get_response`)
//! deliberately does NOT return this type: every internal failure there is
//! resolved to a best-effort textual response before it can reach a caller.

use std::io;

use thiserror::Error;

/// The main error type for Jalmitra operations.
#[derive(Error, Debug)]
pub enum JalmitraError {
    /// I/O errors (model files, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Text analysis errors (normalization, tokenization)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Knowledge-base construction errors
    #[error("Knowledge error: {0}")]
    Knowledge(String),

    /// Model training errors (vectorizer or classifier fit)
    #[error("Training error: {0}")]
    Training(String),

    /// Persisted model bundle errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with JalmitraError.
pub type Result<T> = std::result::Result<T, JalmitraError>;

impl JalmitraError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        JalmitraError::Analysis(msg.into())
    }

    /// Create a new knowledge error.
    pub fn knowledge<S: Into<String>>(msg: S) -> Self {
        JalmitraError::Knowledge(msg.into())
    }

    /// Create a new training error.
    pub fn training<S: Into<String>>(msg: S) -> Self {
        JalmitraError::Training(msg.into())
    }

    /// Create a new storage error.
    pub fn storage<S: Into<String>>(msg: S) -> Self {
        JalmitraError::Storage(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        JalmitraError::Other(msg.into())
    }
}
