//! Unit label resolution - map user-facing labels onto canonical unit names

use unitconv_core::{ConvertError, UnitCategory};
use crate::units::UNITS;

/// Resolve a unit label within a category
///
/// Accepted forms:
/// - Canonical: "Meter", "Fluid Ounce", "Kilometer/Hour"
/// - Any case: "meter", "FLUID OUNCE"
/// - Symbols and plurals: "m", "km/h", "lbs", "°C"
///
/// Currency codes are not known here and always fail.
pub fn resolve_unit(category: UnitCategory, label: &str) -> Result<&'static str, ConvertError> {
    let label = label.trim();

    if let Some(names) = UNITS.names(category) {
        if let Some(name) = names.into_iter().find(|n| *n == label) {
            return Ok(name);
        }
    }

    UNITS.alias(category, label)
        .ok_or_else(|| ConvertError::invalid_unit(label, category))
}
