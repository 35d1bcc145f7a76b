//! Unit categories

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A unit category. Selects both the valid unit set and the conversion rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitCategory {
    Length,
    Weight,
    Temperature,
    Volume,
    Time,
    Speed,
    Currency,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown unit category: {0}")]
pub struct ParseCategoryError(pub String);

impl UnitCategory {
    /// All categories, in presentation order
    pub const ALL: [UnitCategory; 7] = [
        UnitCategory::Length,
        UnitCategory::Weight,
        UnitCategory::Temperature,
        UnitCategory::Volume,
        UnitCategory::Time,
        UnitCategory::Speed,
        UnitCategory::Currency,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            UnitCategory::Length => "Length",
            UnitCategory::Weight => "Weight",
            UnitCategory::Temperature => "Temperature",
            UnitCategory::Volume => "Volume",
            UnitCategory::Time => "Time",
            UnitCategory::Speed => "Speed",
            UnitCategory::Currency => "Currency",
        }
    }

    /// True for categories whose conversions are a ratio of table factors
    pub fn is_fixed_factor(&self) -> bool {
        !matches!(self, UnitCategory::Temperature | UnitCategory::Currency)
    }
}

impl fmt::Display for UnitCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for UnitCategory {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        UnitCategory::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseCategoryError(wanted.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("length".parse::<UnitCategory>().unwrap(), UnitCategory::Length);
        assert_eq!(" SPEED ".parse::<UnitCategory>().unwrap(), UnitCategory::Speed);
        assert_eq!("Currency".parse::<UnitCategory>().unwrap(), UnitCategory::Currency);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "Area".parse::<UnitCategory>().unwrap_err();
        assert_eq!(err, ParseCategoryError("Area".to_string()));
    }

    #[test]
    fn test_display_roundtrips_through_name() {
        for category in UnitCategory::ALL {
            assert_eq!(category.to_string().parse::<UnitCategory>().unwrap(), category);
        }
    }

    #[test]
    fn test_fixed_factor_categories() {
        let fixed: Vec<_> = UnitCategory::ALL.into_iter().filter(|c| c.is_fixed_factor()).collect();
        assert_eq!(fixed, vec![
            UnitCategory::Length,
            UnitCategory::Weight,
            UnitCategory::Volume,
            UnitCategory::Time,
            UnitCategory::Speed,
        ]);
    }
}
