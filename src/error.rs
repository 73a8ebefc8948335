//! Error types for the prediction engine

use std::fmt;

/// Errors that can occur while loading artifacts or running a prediction
#[derive(Debug, Clone)]
pub enum PredictError {
    /// Artifact could not be read or deserialized; message names the path
    ArtifactLoad(String),

    /// Invalid input readings (wrong count, negative or non-finite value)
    InvalidInput(String),

    /// Feature dimensions disagree between input, scaler, and model
    ShapeMismatch(String),

    /// Numerical error (non-finite intermediate or output)
    NumericalError(String),
}

impl fmt::Display for PredictError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PredictError::ArtifactLoad(msg) => write!(f, "Failed to load artifact: {}", msg),
            PredictError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            PredictError::ShapeMismatch(msg) => write!(f, "Shape mismatch: {}", msg),
            PredictError::NumericalError(msg) => write!(f, "Numerical error: {}", msg),
        }
    }
}

impl std::error::Error for PredictError {}
