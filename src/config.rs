//! Configuration for the prediction engine

use std::path::PathBuf;

/// Locations of the four pre-fit artifacts
///
/// Paths are fixed at deploy time. The artifacts are loaded once at startup
/// and are immutable afterwards; every prediction shares the same loaded set.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Regression model fitted on the 12-feature schema
    /// (default: models/model_with_xylene.bin)
    pub model_with_path: PathBuf,

    /// Regression model fitted on the 11-feature schema
    /// (default: models/model.bin)
    pub model_without_path: PathBuf,

    /// Scaler fitted together with the 12-feature model
    /// (default: models/scaler_with_xylene.bin)
    pub scaler_with_path: PathBuf,

    /// Scaler fitted together with the 11-feature model
    /// (default: models/scaler.bin)
    pub scaler_without_path: PathBuf,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            model_with_path: PathBuf::from("models/model_with_xylene.bin"),
            model_without_path: PathBuf::from("models/model.bin"),
            scaler_with_path: PathBuf::from("models/scaler_with_xylene.bin"),
            scaler_without_path: PathBuf::from("models/scaler.bin"),
        }
    }
}
