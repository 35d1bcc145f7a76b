//! Temperature conversion
//!
//! Not factor-based: each directed pair of scales has its own affine formula.

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use unitconv_core::{ConvertError, UnitCategory};

use crate::units::UNITS;

/// Offset between Celsius and Kelvin
const KELVIN_OFFSET: f64 = 273.15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TemperatureScale {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TemperatureScale {
    pub const ALL: [TemperatureScale; 3] = [
        TemperatureScale::Celsius,
        TemperatureScale::Fahrenheit,
        TemperatureScale::Kelvin,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            TemperatureScale::Celsius => "Celsius",
            TemperatureScale::Fahrenheit => "Fahrenheit",
            TemperatureScale::Kelvin => "Kelvin",
        }
    }

    /// Scale names in presentation order
    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|s| s.name()).collect()
    }

    /// Convert a reading on this scale to `target`
    pub fn convert_to(&self, value: f64, target: TemperatureScale) -> f64 {
        use TemperatureScale::*;

        match (*self, target) {
            (Celsius, Celsius) | (Fahrenheit, Fahrenheit) | (Kelvin, Kelvin) => value,
            (Celsius, Fahrenheit) => value * 9.0 / 5.0 + 32.0,
            (Celsius, Kelvin) => value + KELVIN_OFFSET,
            (Fahrenheit, Celsius) => (value - 32.0) * 5.0 / 9.0,
            (Fahrenheit, Kelvin) => (value - 32.0) * 5.0 / 9.0 + KELVIN_OFFSET,
            (Kelvin, Celsius) => value - KELVIN_OFFSET,
            (Kelvin, Fahrenheit) => (value - KELVIN_OFFSET) * 9.0 / 5.0 + 32.0,
        }
    }
}

impl fmt::Display for TemperatureScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for TemperatureScale {
    type Err = ConvertError;

    /// Accepts canonical names and registered aliases ("C", "°F", "kelvin")
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        let canonical = UNITS.alias(UnitCategory::Temperature, label)
            .ok_or_else(|| ConvertError::invalid_unit(label, UnitCategory::Temperature))?;

        TemperatureScale::ALL
            .into_iter()
            .find(|scale| scale.name() == canonical)
            .ok_or_else(|| ConvertError::invalid_unit(label, UnitCategory::Temperature))
    }
}

/// Convert between two temperature labels.
///
/// Unknown labels fail with `InvalidUnit` instead of passing the value through.
pub fn convert(value: f64, from_unit: &str, to_unit: &str) -> Result<f64, ConvertError> {
    let from: TemperatureScale = from_unit.parse()?;
    let to: TemperatureScale = to_unit.parse()?;
    Ok(from.convert_to(value, to))
}
