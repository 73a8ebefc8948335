//! Prediction result types

use serde::{Deserialize, Serialize};

use crate::schema::ModelMode;

/// Air quality severity band
///
/// Six fixed bands partition the AQI scale `[0, 500]` with no gaps and no
/// overlaps. Boundaries are upper-inclusive: a calibrated AQI of exactly
/// 50.0 is still [`AqiBucket::Good`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AqiBucket {
    /// AQI in (0, 50]
    Good,
    /// AQI in (50, 100]
    Satisfactory,
    /// AQI in (100, 200]
    Moderate,
    /// AQI in (200, 300]
    Poor,
    /// AQI in (300, 400]
    VeryPoor,
    /// AQI in (400, 500]
    Severe,
}

impl AqiBucket {
    /// All bands, in ascending severity order
    pub const ALL: [AqiBucket; 6] = [
        AqiBucket::Good,
        AqiBucket::Satisfactory,
        AqiBucket::Moderate,
        AqiBucket::Poor,
        AqiBucket::VeryPoor,
        AqiBucket::Severe,
    ];

    /// Classify a calibrated AQI value into its band
    ///
    /// Total over the clamped scale; every value maps to exactly one band.
    ///
    /// # Example
    ///
    /// ```
    /// use aqi_engine::AqiBucket;
    ///
    /// assert_eq!(AqiBucket::from_aqi(50.0), AqiBucket::Good);
    /// assert_eq!(AqiBucket::from_aqi(50.01), AqiBucket::Satisfactory);
    /// assert_eq!(AqiBucket::from_aqi(104.5), AqiBucket::Moderate);
    /// assert_eq!(AqiBucket::from_aqi(500.0), AqiBucket::Severe);
    /// ```
    pub fn from_aqi(aqi: f64) -> Self {
        if aqi <= 50.0 {
            AqiBucket::Good
        } else if aqi <= 100.0 {
            AqiBucket::Satisfactory
        } else if aqi <= 200.0 {
            AqiBucket::Moderate
        } else if aqi <= 300.0 {
            AqiBucket::Poor
        } else if aqi <= 400.0 {
            AqiBucket::VeryPoor
        } else {
            AqiBucket::Severe
        }
    }

    /// Display label for the band
    pub fn label(&self) -> &'static str {
        match self {
            AqiBucket::Good => "Good",
            AqiBucket::Satisfactory => "Satisfactory",
            AqiBucket::Moderate => "Moderate",
            AqiBucket::Poor => "Poor",
            AqiBucket::VeryPoor => "Very Poor",
            AqiBucket::Severe => "Severe",
        }
    }

    /// Marker symbol shown next to the band label
    pub fn marker(&self) -> &'static str {
        match self {
            AqiBucket::Good => "🟢",
            AqiBucket::Satisfactory => "🟡",
            AqiBucket::Moderate => "🟠",
            AqiBucket::Poor => "🔴",
            AqiBucket::VeryPoor => "🟣",
            AqiBucket::Severe => "⚫",
        }
    }

    /// Band bounds as the half-open interval `(lo, hi]`
    pub fn range(&self) -> (f64, f64) {
        match self {
            AqiBucket::Good => (0.0, 50.0),
            AqiBucket::Satisfactory => (50.0, 100.0),
            AqiBucket::Moderate => (100.0, 200.0),
            AqiBucket::Poor => (200.0, 300.0),
            AqiBucket::VeryPoor => (300.0, 400.0),
            AqiBucket::Severe => (400.0, 500.0),
        }
    }
}

/// Outcome of one prediction interaction
///
/// Created per trigger and discarded after display; never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prediction {
    /// Raw model output, before calibration
    pub raw_score: f64,

    /// Calibrated AQI, clamped to `[0, 500]`
    pub aqi: f64,

    /// Severity band of the calibrated AQI
    pub bucket: AqiBucket,

    /// Mode the prediction ran in
    pub mode: ModelMode,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_boundaries_upper_inclusive() {
        assert_eq!(AqiBucket::from_aqi(50.0), AqiBucket::Good);
        assert_eq!(AqiBucket::from_aqi(50.01), AqiBucket::Satisfactory);
        assert_eq!(AqiBucket::from_aqi(100.0), AqiBucket::Satisfactory);
        assert_eq!(AqiBucket::from_aqi(100.01), AqiBucket::Moderate);
        assert_eq!(AqiBucket::from_aqi(200.0), AqiBucket::Moderate);
        assert_eq!(AqiBucket::from_aqi(300.0), AqiBucket::Poor);
        assert_eq!(AqiBucket::from_aqi(400.0), AqiBucket::VeryPoor);
        assert_eq!(AqiBucket::from_aqi(500.0), AqiBucket::Severe);
    }

    #[test]
    fn test_bucket_of_clamped_floor() {
        // Values below the scale clamp to 0 before classification
        assert_eq!(AqiBucket::from_aqi(0.0), AqiBucket::Good);
    }

    #[test]
    fn test_bucket_labels() {
        assert_eq!(AqiBucket::Good.label(), "Good");
        assert_eq!(AqiBucket::Satisfactory.label(), "Satisfactory");
        assert_eq!(AqiBucket::Moderate.label(), "Moderate");
        assert_eq!(AqiBucket::Poor.label(), "Poor");
        assert_eq!(AqiBucket::VeryPoor.label(), "Very Poor");
        assert_eq!(AqiBucket::Severe.label(), "Severe");
    }

    #[test]
    fn test_bucket_markers_distinct() {
        let markers: Vec<&str> = AqiBucket::ALL.iter().map(|b| b.marker()).collect();
        for (i, a) in markers.iter().enumerate() {
            for b in &markers[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_ranges_partition_scale() {
        // Bands tile [0, 500]: each upper bound is the next lower bound
        let mut expected_lo = 0.0;
        for bucket in AqiBucket::ALL {
            let (lo, hi) = bucket.range();
            assert_eq!(lo, expected_lo, "gap or overlap before {:?}", bucket);
            assert!(hi > lo);
            expected_lo = hi;
        }
        assert_eq!(expected_lo, 500.0);
    }

    #[test]
    fn test_every_value_maps_into_its_range() {
        let mut aqi = 0.0;
        while aqi <= 500.0 {
            let bucket = AqiBucket::from_aqi(aqi);
            let (lo, hi) = bucket.range();
            assert!(
                (aqi > lo || aqi == 0.0) && aqi <= hi,
                "{} classified outside its band {:?}",
                aqi,
                bucket
            );
            aqi += 0.25;
        }
    }
}
