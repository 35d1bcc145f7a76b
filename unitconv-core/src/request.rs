//! Conversion requests and their outcomes

use crate::{ConvertError, UnitCategory};
use serde::{Deserialize, Serialize};

/// One conversion call. Has no identity beyond its fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionRequest {
    pub value: f64,
    pub from_unit: String,
    pub to_unit: String,
    pub category: UnitCategory,
}

impl ConversionRequest {
    pub fn new(
        category: UnitCategory,
        value: f64,
        from_unit: impl Into<String>,
        to_unit: impl Into<String>,
    ) -> Self {
        ConversionRequest {
            value,
            from_unit: from_unit.into(),
            to_unit: to_unit.into(),
            category,
        }
    }

    /// Attach a computed value to this request
    pub fn into_conversion(self, converted: f64) -> Conversion {
        Conversion {
            category: self.category,
            value: self.value,
            from_unit: self.from_unit,
            to_unit: self.to_unit,
            converted,
        }
    }
}

/// A successful conversion: the request plus its converted value.
///
/// Unit labels are canonical (aliases already resolved by the engine).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversion {
    pub category: UnitCategory,
    pub value: f64,
    pub from_unit: String,
    pub to_unit: String,
    pub converted: f64,
}

pub type ConversionResult = Result<Conversion, ConvertError>;
