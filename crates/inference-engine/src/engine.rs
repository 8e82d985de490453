//! Classifier Wrapper

use crate::InferenceError;
use feature_engine::FeatureRow;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// User-facing outcome of a delay classification.
///
/// The classifier is binary, but anything outside {0, 1} is mapped to
/// `Inconclusive` rather than trusted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DelayOutcome {
    /// Label 0: the flight is expected on time
    OnTime,
    /// Label 1: a meaningful delay is expected
    Delayed,
    /// Any other label
    Inconclusive,
}

impl DelayOutcome {
    /// Map a raw classifier label to its outcome.
    pub fn from_label(label: i64) -> Self {
        match label {
            0 => DelayOutcome::OnTime,
            1 => DelayOutcome::Delayed,
            _ => DelayOutcome::Inconclusive,
        }
    }

    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            DelayOutcome::OnTime => "on_time",
            DelayOutcome::Delayed => "delayed",
            DelayOutcome::Inconclusive => "inconclusive",
        }
    }

    /// Get the message shown to the user
    pub fn description(&self) -> &'static str {
        match self {
            DelayOutcome::OnTime => "No delay predicted",
            DelayOutcome::Delayed => "A delay of at least 15 minutes is predicted",
            DelayOutcome::Inconclusive => "The prediction was inconclusive",
        }
    }
}

/// Result of classifying one feature row.
#[derive(Debug, Clone, Serialize)]
pub struct Prediction {
    /// Raw label returned by the classifier
    pub label: i64,
    /// Outcome presented to the caller
    pub outcome: DelayOutcome,
}

/// Delay classifier (mock implementation until the real artifact ships)
pub struct DelayClassifier {
    /// Model path
    model_path: String,
    /// Whether model is loaded
    loaded: bool,
    /// Enable mock mode (no actual model)
    mock_mode: bool,
}

impl DelayClassifier {
    /// Create a classifier backed by a model artifact on disk.
    pub fn new(model_path: &str) -> Result<Self, InferenceError> {
        info!("Creating delay classifier with model: {}", model_path);

        Ok(Self {
            model_path: model_path.to_string(),
            loaded: false,
            mock_mode: true, // Start in mock mode until real model exists
        })
    }

    /// Create a mock classifier for testing
    pub fn mock() -> Self {
        info!("Creating mock delay classifier");
        Self {
            model_path: "mock".to_string(),
            loaded: true,
            mock_mode: true,
        }
    }

    /// Load the model artifact.
    pub fn load(&mut self) -> Result<(), InferenceError> {
        if self.mock_mode {
            debug!("Mock mode: skipping model load");
            self.loaded = true;
            return Ok(());
        }

        // In real implementation the serialized classifier would be
        // deserialized from self.model_path here.

        info!("Model loaded successfully");
        self.loaded = true;
        Ok(())
    }

    /// Classify one feature row.
    ///
    /// The classifier sees exactly the row shape produced by feature
    /// assembly and nothing else.
    pub fn predict(&self, features: &FeatureRow) -> Result<Prediction, InferenceError> {
        if !self.loaded {
            return Err(InferenceError::ModelLoad("Model not loaded".to_string()));
        }

        let label = if self.mock_mode {
            self.mock_label(features)
        } else {
            // Real model dispatch would consume features.to_values() here
            self.mock_label(features)
        };

        let outcome = DelayOutcome::from_label(label);
        debug!("Classified row as {} (label {})", outcome.as_str(), label);

        Ok(Prediction { label, outcome })
    }

    /// Generate a mock label from simple feature thresholds
    fn mock_label(&self, features: &FeatureRow) -> i64 {
        // Long routes departing in the evening peak lean delayed
        let hour = features.dep_time / 100;
        if (16..=21).contains(&hour) && features.distance > 1500.0 {
            1
        } else {
            0
        }
    }

    /// Check if the model is loaded
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Get model path
    pub fn model_path(&self) -> &str {
        &self.model_path
    }
}
