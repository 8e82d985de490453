//! Delay Classifier Invocation
//!
//! Wraps the pretrained delay classifier behind a synchronous prediction
//! API and maps its labels to user-facing outcomes.

mod engine;

pub use engine::{DelayClassifier, DelayOutcome, Prediction};

use thiserror::Error;

/// Errors during classification
#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("model load failed: {0}")]
    ModelLoad(String),
    #[error("classification failed: {0}")]
    ClassificationFailed(String),
}
