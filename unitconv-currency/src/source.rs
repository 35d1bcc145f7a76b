//! Rate source seam

use std::collections::HashMap;
use std::sync::Arc;
use async_trait::async_trait;
use unitconv_core::ConvertError;

/// Rates relative to one base currency
#[derive(Debug, Clone, PartialEq)]
pub struct RateTable {
    base: String,
    rates: HashMap<String, f64>,
}

impl RateTable {
    pub fn new(base: impl Into<String>, rates: HashMap<String, f64>) -> Self {
        RateTable { base: base.into(), rates }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// Rate for `code`; absence is `RateNotFound`, never zero
    pub fn rate(&self, code: &str) -> Result<f64, ConvertError> {
        self.rates.get(code)
            .copied()
            .ok_or_else(|| ConvertError::rate_not_found(code))
    }
}

/// Anything that can produce the latest rate table for a base currency.
#[async_trait]
pub trait RateSource: Send + Sync {
    async fn latest(&self, base: &str) -> Result<RateTable, ConvertError>;
}

/// Shared handle so the engine and tests can swap implementations
pub type SharedRateSource = Arc<dyn RateSource>;

/// Stand-in used when no API credential was configured.
///
/// Every lookup fails with a `TransportError` naming the missing setting.
#[derive(Debug, Clone)]
pub struct MissingCredentials {
    reason: String,
}

impl MissingCredentials {
    pub fn new(reason: impl Into<String>) -> Self {
        MissingCredentials { reason: reason.into() }
    }
}

#[async_trait]
impl RateSource for MissingCredentials {
    async fn latest(&self, _base: &str) -> Result<RateTable, ConvertError> {
        Err(ConvertError::transport(format!("rate service not configured: {}", self.reason)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_rate_is_an_error() {
        let table = RateTable::new("USD", HashMap::from([("EUR".to_string(), 0.9)]));
        assert_eq!(table.rate("EUR").unwrap(), 0.9);
        assert_eq!(table.rate("GBP").unwrap_err(), ConvertError::rate_not_found("GBP"));
    }

    #[test]
    fn test_zero_rate_is_a_value() {
        let table = RateTable::new("USD", HashMap::from([("XXX".to_string(), 0.0)]));
        assert_eq!(table.rate("XXX").unwrap(), 0.0);
    }

    #[tokio::test]
    async fn test_missing_credentials() {
        let source = MissingCredentials::new("EXCHANGE_RATE_API_KEY is not set");
        let err = source.latest("USD").await.unwrap_err();
        assert_eq!(
            err,
            ConvertError::transport("rate service not configured: EXCHANGE_RATE_API_KEY is not set")
        );
    }
}
