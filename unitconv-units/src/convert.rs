//! Fixed-factor conversion (Length, Weight, Volume, Time, Speed)

use unitconv_core::ConvertError;
use crate::FactorTable;

/// Convert `value` between two canonical labels of `table`.
///
/// Computes `value * (table[to_unit] / table[from_unit])`. A label missing
/// from the table fails with `InvalidUnit`.
pub fn convert_fixed(
    value: f64,
    from_unit: &str,
    to_unit: &str,
    table: &FactorTable,
) -> Result<f64, ConvertError> {
    table.convert(value, from_unit, to_unit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::UNITS;
    use quickcheck::TestResult;
    use quickcheck_macros::quickcheck;
    use unitconv_core::UnitCategory;

    const FIXED: [UnitCategory; 5] = [
        UnitCategory::Length,
        UnitCategory::Weight,
        UnitCategory::Volume,
        UnitCategory::Time,
        UnitCategory::Speed,
    ];

    fn table(category: UnitCategory) -> &'static FactorTable {
        UNITS.table(category).unwrap()
    }

    fn approx(actual: f64, expected: f64, tol: f64) -> bool {
        (actual - expected).abs() <= tol
    }

    #[test]
    fn test_length() {
        let length = table(UnitCategory::Length);
        assert_eq!(convert_fixed(1.0, "Kilometer", "Meter", length).unwrap(), 1000.0);
        assert!(approx(convert_fixed(1.0, "Mile", "Kilometer", length).unwrap(), 1.60934, 1e-3));
        assert!(approx(convert_fixed(12.0, "Inch", "Foot", length).unwrap(), 1.0, 1e-4));
    }

    #[test]
    fn test_weight() {
        let weight = table(UnitCategory::Weight);
        assert!(approx(convert_fixed(1.0, "Kilogram", "Pound", weight).unwrap(), 2.20462, 1e-9));
        assert_eq!(convert_fixed(1.0, "Gram", "Milligram", weight).unwrap(), 1000.0);
    }

    #[test]
    fn test_volume_time_speed() {
        assert!(approx(
            convert_fixed(1.0, "Gallon", "Liter", table(UnitCategory::Volume)).unwrap(),
            3.78541,
            1e-4
        ));
        assert!(approx(convert_fixed(2.0, "Hour", "Minute", table(UnitCategory::Time)).unwrap(), 120.0, 1e-9));
        assert!(approx(
            convert_fixed(36.0, "Kilometer/Hour", "Meter/Second", table(UnitCategory::Speed)).unwrap(),
            10.0,
            1e-9
        ));
    }

    #[test]
    fn test_unknown_label() {
        let err = convert_fixed(1.0, "Meter", "Parsec", table(UnitCategory::Length)).unwrap_err();
        assert_eq!(err, ConvertError::invalid_unit("Parsec", UnitCategory::Length));
    }

    #[test]
    fn test_reflexive_for_every_unit() {
        for category in FIXED {
            let t = table(category);
            for name in t.names() {
                for v in [0.0, 1.0, -3.5, 1e-12, 123456.789] {
                    assert_eq!(convert_fixed(v, name, name, t).unwrap(), v, "{} {}", category, name);
                }
            }
        }
    }

    fn pick(category: u8, a: usize) -> (&'static FactorTable, &'static str) {
        let t = table(FIXED[category as usize % FIXED.len()]);
        let names = t.names();
        (t, names[a % names.len()])
    }

    fn usable(v: f64) -> bool {
        v.is_finite() && (v == 0.0 || (v.abs() > 1e-100 && v.abs() < 1e100))
    }

    #[quickcheck]
    fn prop_reflexive(v: f64, category: u8, a: usize) -> TestResult {
        if !v.is_finite() {
            return TestResult::discard();
        }
        let (t, unit) = pick(category, a);
        TestResult::from_bool(convert_fixed(v, unit, unit, t).unwrap() == v)
    }

    #[quickcheck]
    fn prop_composable(v: f64, category: u8, a: usize, b: usize, c: usize) -> TestResult {
        if !usable(v) {
            return TestResult::discard();
        }
        let (t, from) = pick(category, a);
        let names = t.names();
        let via = names[b % names.len()];
        let to = names[c % names.len()];

        let two_step = convert_fixed(convert_fixed(v, from, via, t).unwrap(), via, to, t).unwrap();
        let direct = convert_fixed(v, from, to, t).unwrap();

        TestResult::from_bool((two_step - direct).abs() <= 1e-6 * direct.abs())
    }
}
