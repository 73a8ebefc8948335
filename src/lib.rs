//! # AQI Engine
//!
//! An Air Quality Index prediction engine, turning user-entered pollutant
//! concentrations into a calibrated AQI value and severity category using
//! pre-fit regression artifacts.
//!
//! ## Features
//!
//! - **Two model modes**: with or without Xylene as the twelfth feature,
//!   each backed by its own scaler/model pair
//! - **Pre-fit artifacts**: bincode-serialized scalers and regression
//!   models loaded once at startup, immutable afterwards
//! - **Fixed calibration**: affine correction and clamping to the
//!   `[0, 500]` AQI scale, classified into six severity bands
//!
//! ## Quick Start
//!
//! ```
//! use aqi_engine::io::artifact::Artifacts;
//! use aqi_engine::ml::regressor::Regressor;
//! use aqi_engine::preprocessing::scaler::Scaler;
//! use aqi_engine::{predict_aqi, AqiBucket, ModelMode};
//! use ndarray::Array1;
//!
//! // Artifacts normally come from `Artifacts::load`; build a stand-in
//! // bundle inline here (identity scalers, intercept-only models).
//! let artifacts = Artifacts::new(
//!     Regressor::new(Array1::zeros(12), 90.0),
//!     Regressor::new(Array1::zeros(11), 90.0),
//!     Scaler::new(Array1::zeros(12), Array1::ones(12)),
//!     Scaler::new(Array1::zeros(11), Array1::ones(11)),
//! );
//!
//! let readings = vec![0.0; 11];
//! let prediction = predict_aqi(&readings, ModelMode::WithoutXylene, &artifacts)?;
//! assert_eq!(prediction.aqi, 104.5); // 1.05 * 90 + 10
//! assert_eq!(prediction.bucket, AqiBucket::Moderate);
//! # Ok::<(), aqi_engine::PredictError>(())
//! ```
//!
//! ## Architecture
//!
//! The prediction pipeline is strictly linear and synchronous:
//!
//! ```text
//! Readings → Schema Check → Scaler Transform → Model Predict → Calibrate → Clamp → Bucket
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod config;
pub mod error;
pub mod input;
pub mod io;
pub mod ml;
pub mod preprocessing;
pub mod schema;

// Re-export main types
pub use analysis::calibration::calibrate;
pub use analysis::result::{AqiBucket, Prediction};
pub use config::EngineConfig;
pub use error::PredictError;
pub use io::artifact::Artifacts;
pub use ml::regressor::Regressor;
pub use preprocessing::scaler::Scaler;
pub use schema::{ModelMode, Pollutant, POLLUTANTS};

use ndarray::Array1;

/// Main prediction function
///
/// Runs the full pipeline for one interaction: validates the readings
/// against the active schema, standardizes them with the mode's scaler,
/// predicts with the mode's model, then calibrates, clamps, and classifies
/// the result. Artifacts are selected strictly by `mode`; pairs are never
/// mixed.
///
/// # Arguments
///
/// * `readings` - Pollutant readings in schema order (see
///   [`ModelMode::features`]), all non-negative
/// * `mode` - Active model mode
/// * `artifacts` - Loaded artifact bundle
///
/// # Returns
///
/// A [`Prediction`] carrying the raw score, calibrated AQI, and severity
/// band. No partial result is produced on failure.
///
/// # Errors
///
/// Returns [`PredictError`] if the readings do not match the schema or the
/// scaler/model stage fails (shape mismatch, numerical error).
///
/// # Example
///
/// ```no_run
/// use aqi_engine::{predict_aqi, Artifacts, EngineConfig, ModelMode};
///
/// let artifacts = Artifacts::load(&EngineConfig::default())?;
/// let readings = vec![12.5, 40.0, 8.0, 20.0, 25.0, 10.0, 1.2, 6.0, 30.0, 2.0, 3.5];
/// let prediction = predict_aqi(&readings, ModelMode::WithoutXylene, &artifacts)?;
/// println!("AQI: {:.2} ({})", prediction.aqi, prediction.bucket.label());
/// # Ok::<(), aqi_engine::PredictError>(())
/// ```
pub fn predict_aqi(
    readings: &[f64],
    mode: ModelMode,
    artifacts: &Artifacts,
) -> Result<Prediction, PredictError> {
    log::debug!(
        "Starting prediction: {} readings, mode {}",
        readings.len(),
        mode.label()
    );

    let features = mode.features();
    if readings.len() != features.len() {
        return Err(PredictError::InvalidInput(format!(
            "{} schema expects {} readings, got {}",
            mode.label(),
            features.len(),
            readings.len()
        )));
    }
    for (pollutant, &value) in features.iter().zip(readings) {
        if !value.is_finite() || value < 0.0 {
            return Err(PredictError::InvalidInput(format!(
                "reading for {} must be a non-negative number, got {}",
                pollutant.name, value
            )));
        }
    }

    let vector = Array1::from_vec(readings.to_vec());
    let (scaler, model) = artifacts.pair(mode);

    let scaled = scaler.transform(&vector)?;
    let raw_score = model.predict(&scaled)?;

    let aqi = calibrate(raw_score);
    let bucket = AqiBucket::from_aqi(aqi);

    log::debug!(
        "Prediction complete: raw {:.4}, calibrated {:.2}, bucket {}",
        raw_score,
        aqi,
        bucket.label()
    );

    Ok(Prediction {
        raw_score,
        aqi,
        bucket,
        mode,
    })
}
