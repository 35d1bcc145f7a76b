//! Fixed-precision rendering of conversion results

use unitconv_core::Conversion;

/// Decimal places shown for converted values
pub const DISPLAY_PRECISION: usize = 2;

pub fn format_value(value: f64) -> String {
    format!("{:.*}", DISPLAY_PRECISION, value)
}

/// "1.0 Kilometer = 1000.00 Meter". The input keeps its decimal point.
pub fn format_conversion(conversion: &Conversion) -> String {
    format!(
        "{:?} {} = {} {}",
        conversion.value,
        conversion.from_unit,
        format_value(conversion.converted),
        conversion.to_unit
    )
}

/// "Converted Value: 1000.00 Meter"
pub fn format_result(conversion: &Conversion) -> String {
    format!("Converted Value: {} {}", format_value(conversion.converted), conversion.to_unit)
}
