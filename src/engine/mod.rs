//! The response engine.
//!
//! Ties the pipeline together: an immutable [`model::TrainedModel`] built
//! once per (re)train, threshold-based answer selection, the canned
//! response tables, and the [`core::ChatEngine`] entry point that owns the
//! current model behind an atomic swap.

pub mod core;
pub mod model;
pub mod responses;
pub mod selector;

pub use core::{ChatEngine, ModelStats};
pub use model::TrainedModel;
pub use selector::select;
