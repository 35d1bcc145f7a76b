//! Wire format of the exchange-rate service

use std::collections::HashMap;
use serde::Deserialize;
use unitconv_core::ConvertError;

use crate::RateTable;

/// Body of `GET /{key}/latest/{base}`
#[derive(Debug, Clone, Deserialize)]
pub struct LatestRatesResponse {
    /// "success" or "error"
    pub result: String,
    #[serde(rename = "error-type")]
    pub error_type: Option<String>,
    pub base_code: Option<String>,
    /// A `null` rate reads as an absent code
    #[serde(default)]
    pub conversion_rates: HashMap<String, Option<f64>>,
}

impl LatestRatesResponse {
    /// Interpret the body for a request made with `base`
    pub fn into_table(self, base: &str) -> Result<RateTable, ConvertError> {
        match self.result.as_str() {
            "success" => Ok(RateTable::new(
                self.base_code.unwrap_or_else(|| base.to_string()),
                self.conversion_rates
                    .into_iter()
                    .filter_map(|(code, rate)| rate.map(|r| (code, r)))
                    .collect(),
            )),
            "error" => Err(ConvertError::api(
                self.error_type.unwrap_or_else(|| "unknown-error".to_string()),
            )),
            other => Err(ConvertError::transport(format!(
                "unexpected result '{}' in rate response",
                other
            ))),
        }
    }
}
