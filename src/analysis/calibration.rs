//! Post-hoc calibration of the raw regression output
//!
//! The regression models were tuned with a fixed affine correction applied
//! after prediction. The coefficients were chosen against validation data
//! when the models were fitted and have no runtime configuration surface;
//! they must match the values the models were tuned with.

/// Multiplicative calibration coefficient
pub const CALIBRATION_GAIN: f64 = 1.05;

/// Additive calibration offset
pub const CALIBRATION_OFFSET: f64 = 10.0;

/// Lower bound of the AQI scale
pub const AQI_MIN: f64 = 0.0;

/// Upper bound of the AQI scale
pub const AQI_MAX: f64 = 500.0;

/// Apply the fixed affine correction and clamp to the AQI scale
///
/// Computes `1.05 * raw + 10`, then clamps to `[0, 500]`. Pure and
/// monotonic non-decreasing in `raw`.
///
/// # Example
///
/// ```
/// use aqi_engine::analysis::calibration::calibrate;
///
/// assert_eq!(calibrate(90.0), 104.5);
/// assert_eq!(calibrate(1000.0), 500.0);
/// assert_eq!(calibrate(-100.0), 0.0);
/// ```
pub fn calibrate(raw: f64) -> f64 {
    (CALIBRATION_GAIN * raw + CALIBRATION_OFFSET).clamp(AQI_MIN, AQI_MAX)
}
