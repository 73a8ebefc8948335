//! Pre-fit regression model

use ndarray::Array1;
use serde::{Deserialize, Serialize};

use crate::error::PredictError;

/// Linear regression model learned at training time
///
/// Predicts `weights · x + intercept` for a standardized feature vector
/// `x`. Like the scaler, the parameters are opaque pre-fit values loaded
/// from the serialized artifact, valid only for the schema (and scaler)
/// they were fitted with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Regressor {
    weights: Array1<f64>,
    intercept: f64,
}

impl Regressor {
    /// Build a regressor from pre-fit parameters
    pub fn new(weights: Array1<f64>, intercept: f64) -> Self {
        Self { weights, intercept }
    }

    /// Number of features the model was fitted on
    pub fn n_features(&self) -> usize {
        self.weights.len()
    }

    /// Predict the raw AQI score for a standardized feature vector
    ///
    /// # Errors
    ///
    /// Returns `ShapeMismatch` if the input length does not match the
    /// fitted feature count, and `NumericalError` if the prediction is
    /// non-finite.
    pub fn predict(&self, x: &Array1<f64>) -> Result<f64, PredictError> {
        if x.len() != self.weights.len() {
            return Err(PredictError::ShapeMismatch(format!(
                "model fitted on {} features, input has {}",
                self.weights.len(),
                x.len()
            )));
        }

        let raw = self.weights.dot(x) + self.intercept;
        if !raw.is_finite() {
            return Err(PredictError::NumericalError(format!(
                "prediction is not finite: {}",
                raw
            )));
        }
        Ok(raw)
    }
}
