//! Unit representation with conversion factors

use std::fmt;
use serde::Serialize;
use unitconv_core::UnitCategory;

/// A unit of a fixed-factor category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Unit {
    /// Canonical label (e.g., "Meter", "Fluid Ounce")
    pub name: &'static str,
    /// How many of this unit make one reference unit of the category
    pub factor: f64,
    /// Category the unit belongs to
    pub category: UnitCategory,
}

impl Unit {
    pub const fn new(name: &'static str, factor: f64, category: UnitCategory) -> Self {
        Unit { name, factor, category }
    }

    /// The reference unit carries factor 1
    pub fn is_reference(&self) -> bool {
        self.factor == 1.0
    }

    /// Convert a value expressed in this unit into `target`, a unit of
    /// the same table
    pub fn convert_to(&self, value: f64, target: &Unit) -> f64 {
        value * (target.factor / self.factor)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meter() -> Unit {
        Unit::new("Meter", 1.0, UnitCategory::Length)
    }

    fn kilometer() -> Unit {
        Unit::new("Kilometer", 0.001, UnitCategory::Length)
    }

    #[test]
    fn test_reference_unit() {
        assert!(meter().is_reference());
        assert!(!kilometer().is_reference());
    }

    #[test]
    fn test_unit_conversion() {
        assert_eq!(meter().convert_to(5000.0, &kilometer()), 5.0);
        assert_eq!(kilometer().convert_to(2.0, &meter()), 2000.0);
    }
}
