//! Currency conversion over a rate source

use unitconv_core::ConvertError;

use crate::{normalize_code, RateSource};

/// Convert `value` from one currency to another at the live rate.
///
/// Returns `value * rate[to]` from the table for base `from`. Identical
/// codes short-circuit without a lookup.
pub async fn convert_currency(
    source: &dyn RateSource,
    value: f64,
    from: &str,
    to: &str,
) -> Result<f64, ConvertError> {
    let from = normalize_code(from)?;
    let to = normalize_code(to)?;

    if from == to {
        return Ok(value);
    }

    let table = source.latest(from).await?;
    let rate = table.rate(to)?;
    Ok(value * rate)
}
