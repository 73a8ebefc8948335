//! Input preprocessing
//!
//! Standardization of raw pollutant readings before they reach the
//! regression model. The scaler is pre-fit; this module only applies it.

pub mod scaler;
