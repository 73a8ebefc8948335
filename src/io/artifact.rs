//! Artifact deserialization
//!
//! Artifacts are bincode-serialized structs written by the training
//! pipeline. Loading is a startup precondition gate: the first failure
//! aborts the load with an error naming the offending path. There are no
//! retries and no partial degradation.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::config::EngineConfig;
use crate::error::PredictError;
use crate::ml::regressor::Regressor;
use crate::preprocessing::scaler::Scaler;
use crate::schema::ModelMode;

/// Deserialize one artifact from disk
///
/// # Errors
///
/// Returns `ArtifactLoad` on any I/O or decode failure; the message
/// carries the path and the underlying cause.
pub fn load_artifact<T: DeserializeOwned>(path: &Path) -> Result<T, PredictError> {
    log::debug!("Loading artifact: {}", path.display());
    let bytes = fs::read(path)
        .map_err(|e| PredictError::ArtifactLoad(format!("{}: {}", path.display(), e)))?;
    bincode::deserialize(&bytes)
        .map_err(|e| PredictError::ArtifactLoad(format!("{}: {}", path.display(), e)))
}

/// The four pre-fit artifacts, loaded once at startup
///
/// Immutable after load and shared by reference across all predictions.
/// A scaler and model fitted together are only reachable as a pair, so
/// artifacts cannot be cross-applied between modes.
#[derive(Debug, Clone)]
pub struct Artifacts {
    model_with: Regressor,
    model_without: Regressor,
    scaler_with: Scaler,
    scaler_without: Scaler,
}

impl Artifacts {
    /// Assemble a bundle from already-loaded artifacts
    pub fn new(
        model_with: Regressor,
        model_without: Regressor,
        scaler_with: Scaler,
        scaler_without: Scaler,
    ) -> Self {
        Self {
            model_with,
            model_without,
            scaler_with,
            scaler_without,
        }
    }

    /// Load all four artifacts from the configured paths
    ///
    /// # Errors
    ///
    /// Returns the first `ArtifactLoad` failure; no bundle is produced if
    /// any artifact is missing or corrupt.
    pub fn load(config: &EngineConfig) -> Result<Self, PredictError> {
        let artifacts = Self {
            model_with: load_artifact(&config.model_with_path)?,
            model_without: load_artifact(&config.model_without_path)?,
            scaler_with: load_artifact(&config.scaler_with_path)?,
            scaler_without: load_artifact(&config.scaler_without_path)?,
        };
        log::info!(
            "Loaded artifacts: models ({} / {} features), scalers ({} / {})",
            artifacts.model_with.n_features(),
            artifacts.model_without.n_features(),
            artifacts.scaler_with.n_features(),
            artifacts.scaler_without.n_features()
        );
        Ok(artifacts)
    }

    /// Scaler and model fitted together for `mode`
    pub fn pair(&self, mode: ModelMode) -> (&Scaler, &Regressor) {
        match mode {
            ModelMode::WithXylene => (&self.scaler_with, &self.model_with),
            ModelMode::WithoutXylene => (&self.scaler_without, &self.model_without),
        }
    }
}
