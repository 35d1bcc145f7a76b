//! Currencies offered for selection

use unitconv_core::{ConvertError, UnitCategory};

/// Currency codes offered in the unit list, in presentation order
pub const SUPPORTED_CURRENCIES: [&str; 8] = ["USD", "EUR", "GBP", "INR", "JPY", "AUD", "CAD", "PKR"];

/// Upper-case a currency code and check it is one of the offered currencies
pub fn normalize_code(code: &str) -> Result<&'static str, ConvertError> {
    let wanted = code.trim();
    SUPPORTED_CURRENCIES
        .into_iter()
        .find(|c| c.eq_ignore_ascii_case(wanted))
        .ok_or_else(|| ConvertError::invalid_unit(wanted, UnitCategory::Currency))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize_code("usd").unwrap(), "USD");
        assert_eq!(normalize_code(" Pkr ").unwrap(), "PKR");
    }

    #[test]
    fn test_unsupported_code() {
        let err = normalize_code("BTC").unwrap_err();
        assert_eq!(err, ConvertError::invalid_unit("BTC", UnitCategory::Currency));
    }
}
