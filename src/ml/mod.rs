//! Regression model inference
//!
//! Applies the pre-fit regression model to a standardized feature vector.
//! The model is an opaque artifact; this module only runs its predict step.

pub mod regressor;
