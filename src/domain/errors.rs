use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while turning an artifact on disk into a predictor
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Failed to read model artifact {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Model artifact is corrupt: {reason}")]
    Corrupt { reason: String },
}

/// Faults raised by a single predict call
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PredictionError {
    #[error("X has {actual} features, but the model is expecting {expected} features as input")]
    ShapeMismatch { expected: usize, actual: usize },

    #[error("Feature names mismatch: model was trained on {expected:?}, got {actual:?}")]
    FeatureMismatch {
        expected: Vec<String>,
        actual: Vec<String>,
    },

    #[error("Prediction is not a finite number: {value}")]
    NonFinite { value: f64 },

    #[error("Model failure: {reason}")]
    Model { reason: String },
}
