//! Pollutant feature schema
//!
//! One fixed ordered pollutant table shared by both model modes. The
//! without-Xylene schema is the 11-entry prefix of the table; the
//! with-Xylene schema is the full 12 entries. The same [`ModelMode`] value
//! that selects the schema also selects the artifact pair, so schema and
//! artifacts can never disagree.

use serde::{Deserialize, Serialize};

/// A pollutant accepted by the input form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pollutant {
    /// Display name, e.g. "PM2.5"
    pub name: &'static str,

    /// Unit of measure, used for display only
    pub unit: &'static str,
}

/// Full ordered pollutant table
///
/// The scaler/model pairs were fitted on feature vectors in exactly this
/// order; positional alignment is the correctness contract, so the order
/// must never change. Xylene is last so the without-Xylene schema is the
/// 11-entry prefix.
pub static POLLUTANTS: [Pollutant; 12] = [
    Pollutant { name: "PM2.5", unit: "µg/m³" },
    Pollutant { name: "PM10", unit: "µg/m³" },
    Pollutant { name: "NO", unit: "µg/m³" },
    Pollutant { name: "NO2", unit: "µg/m³" },
    Pollutant { name: "NOx", unit: "µg/m³" },
    Pollutant { name: "NH3", unit: "µg/m³" },
    Pollutant { name: "CO", unit: "mg/m³" },
    Pollutant { name: "SO2", unit: "µg/m³" },
    Pollutant { name: "O3", unit: "µg/m³" },
    Pollutant { name: "Benzene", unit: "µg/m³" },
    Pollutant { name: "Toluene", unit: "µg/m³" },
    Pollutant { name: "Xylene", unit: "µg/m³" },
];

/// Model mode, selecting the feature schema and the artifact pair together
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModelMode {
    /// 12-feature schema including Xylene
    WithXylene,

    /// 11-feature schema without Xylene
    WithoutXylene,
}

impl ModelMode {
    /// Ordered features of the active schema
    ///
    /// # Example
    ///
    /// ```
    /// use aqi_engine::ModelMode;
    ///
    /// assert_eq!(ModelMode::WithoutXylene.features().len(), 11);
    /// assert_eq!(ModelMode::WithXylene.features().len(), 12);
    /// assert_eq!(ModelMode::WithXylene.features()[11].name, "Xylene");
    /// ```
    pub fn features(self) -> &'static [Pollutant] {
        match self {
            ModelMode::WithXylene => &POLLUTANTS[..],
            ModelMode::WithoutXylene => &POLLUTANTS[..11],
        }
    }

    /// Human-readable mode label
    pub fn label(self) -> &'static str {
        match self {
            ModelMode::WithXylene => "With Xylene",
            ModelMode::WithoutXylene => "Without Xylene",
        }
    }
}
