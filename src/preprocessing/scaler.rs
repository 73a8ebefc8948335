//! Pre-fit standardization scaler

use ndarray::Array1;
use serde::{Deserialize, Serialize};

use crate::error::PredictError;

/// Standardization transform learned at training time
///
/// Maps a feature vector `x` to `(x - mean) / scale` elementwise. The
/// parameters are opaque to this crate: they are whatever the training run
/// produced, loaded from the serialized artifact. A scaler is only valid
/// for the schema it was fitted on and is always applied together with the
/// model fitted on the same standardized features.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scaler {
    mean: Array1<f64>,
    scale: Array1<f64>,
}

impl Scaler {
    /// Build a scaler from pre-fit parameters
    pub fn new(mean: Array1<f64>, scale: Array1<f64>) -> Self {
        Self { mean, scale }
    }

    /// Number of features the scaler was fitted on
    pub fn n_features(&self) -> usize {
        self.mean.len()
    }

    /// Standardize a feature vector
    ///
    /// # Errors
    ///
    /// Returns `ShapeMismatch` if the input length does not match the
    /// fitted feature count (or the artifact itself is internally
    /// inconsistent), and `NumericalError` if standardization produces a
    /// non-finite value (e.g. a zero scale entry).
    pub fn transform(&self, x: &Array1<f64>) -> Result<Array1<f64>, PredictError> {
        if self.scale.len() != self.mean.len() {
            return Err(PredictError::ShapeMismatch(format!(
                "corrupt scaler: mean has {} entries, scale has {}",
                self.mean.len(),
                self.scale.len()
            )));
        }
        if x.len() != self.mean.len() {
            return Err(PredictError::ShapeMismatch(format!(
                "scaler fitted on {} features, input has {}",
                self.mean.len(),
                x.len()
            )));
        }

        let scaled = (x - &self.mean) / &self.scale;
        if scaled.iter().any(|v| !v.is_finite()) {
            return Err(PredictError::NumericalError(
                "non-finite value after standardization".to_string(),
            ));
        }
        Ok(scaled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_transform_standardizes() {
        let scaler = Scaler::new(array![10.0, 20.0, 30.0], array![2.0, 4.0, 5.0]);
        let scaled = scaler.transform(&array![12.0, 12.0, 30.0]).unwrap();
        assert_eq!(scaled, array![1.0, -2.0, 0.0]);
    }

    #[test]
    fn test_identity_scaler_passes_through() {
        let scaler = Scaler::new(Array1::zeros(11), Array1::ones(11));
        let input = Array1::from_elem(11, 3.5);
        assert_eq!(scaler.transform(&input).unwrap(), input);
    }

    #[test]
    fn test_transform_rejects_wrong_length() {
        let scaler = Scaler::new(Array1::zeros(11), Array1::ones(11));
        let err = scaler.transform(&Array1::zeros(12)).unwrap_err();
        assert!(matches!(err, PredictError::ShapeMismatch(_)));
    }

    #[test]
    fn test_transform_rejects_zero_scale() {
        let scaler = Scaler::new(array![0.0, 0.0], array![1.0, 0.0]);
        let err = scaler.transform(&array![1.0, 1.0]).unwrap_err();
        assert!(matches!(err, PredictError::NumericalError(_)));
    }

    #[test]
    fn test_transform_rejects_inconsistent_artifact() {
        let scaler = Scaler::new(Array1::zeros(11), Array1::ones(12));
        let err = scaler.transform(&Array1::zeros(11)).unwrap_err();
        assert!(matches!(err, PredictError::ShapeMismatch(_)));
    }
}
