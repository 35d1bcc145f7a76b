//! Conversion factor tables

use unitconv_core::{ConvertError, UnitCategory};
use crate::Unit;

/// Ordered factor table for one fixed-factor category.
///
/// Built once by the registry and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct FactorTable {
    category: UnitCategory,
    units: Vec<Unit>,
}

impl FactorTable {
    pub fn new(category: UnitCategory) -> Self {
        FactorTable { category, units: Vec::new() }
    }

    pub fn with_unit(mut self, name: &'static str, factor: f64) -> Self {
        self.units.push(Unit::new(name, factor, self.category));
        self
    }

    pub fn category(&self) -> UnitCategory {
        self.category
    }

    /// Look up a unit by its canonical label
    pub fn get(&self, name: &str) -> Option<&Unit> {
        self.units.iter().find(|u| u.name == name)
    }

    /// Canonical labels in table order
    pub fn names(&self) -> Vec<&'static str> {
        self.units.iter().map(|u| u.name).collect()
    }

    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    /// The unit with factor 1
    pub fn reference(&self) -> Option<&Unit> {
        self.units.iter().find(|u| u.is_reference())
    }

    pub fn unit(&self, name: &str) -> Result<&Unit, ConvertError> {
        self.get(name)
            .ok_or_else(|| ConvertError::invalid_unit(name, self.category))
    }

    /// `value * (table[to] / table[from])`
    pub fn convert(&self, value: f64, from_unit: &str, to_unit: &str) -> Result<f64, ConvertError> {
        let from = self.unit(from_unit)?;
        let to = self.unit(to_unit)?;
        Ok(from.convert_to(value, to))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> FactorTable {
        FactorTable::new(UnitCategory::Weight)
            .with_unit("Kilogram", 1.0)
            .with_unit("Gram", 1000.0)
    }

    #[test]
    fn test_lookup_and_order() {
        let t = table();
        assert_eq!(t.names(), vec!["Kilogram", "Gram"]);
        assert_eq!(t.get("Gram").map(|u| u.factor), Some(1000.0));
        assert!(t.get("gram").is_none());
        assert_eq!(t.reference().map(|u| u.name), Some("Kilogram"));
    }

    #[test]
    fn test_missing_unit_is_invalid() {
        let err = table().convert(1.0, "Kilogram", "Stone").unwrap_err();
        assert_eq!(err, ConvertError::invalid_unit("Stone", UnitCategory::Weight));
    }

    #[test]
    fn test_convert() {
        assert_eq!(table().convert(2.5, "Kilogram", "Gram").unwrap(), 2500.0);
    }
}
