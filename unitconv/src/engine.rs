//! Conversion engine

use std::sync::Arc;
use tracing::debug;
use unitconv_core::{ConversionRequest, ConversionResult, ConvertError, UnitCategory};
use unitconv_currency::{convert_currency, normalize_code, RateSource, SharedRateSource, SUPPORTED_CURRENCIES};
use unitconv_units::{convert_fixed, FactorTable, TemperatureScale, UNITS};

/// Conversion rule of a category. Each variant carries what it needs to
/// enumerate its units and convert between them.
#[derive(Debug, Clone, Copy)]
pub enum Rule {
    /// Ratio of table factors
    FixedFactor(&'static FactorTable),
    /// Affine formula per directed pair
    Temperature,
    /// Live rate lookup
    Currency,
}

impl Rule {
    pub fn for_category(category: UnitCategory) -> Rule {
        match category {
            UnitCategory::Length => Rule::FixedFactor(UNITS.length()),
            UnitCategory::Weight => Rule::FixedFactor(UNITS.weight()),
            UnitCategory::Volume => Rule::FixedFactor(UNITS.volume()),
            UnitCategory::Time => Rule::FixedFactor(UNITS.time()),
            UnitCategory::Speed => Rule::FixedFactor(UNITS.speed()),
            UnitCategory::Temperature => Rule::Temperature,
            UnitCategory::Currency => Rule::Currency,
        }
    }

    /// Canonical unit labels, in presentation order
    pub fn units(&self) -> Vec<&'static str> {
        match self {
            Rule::FixedFactor(table) => table.names(),
            Rule::Temperature => TemperatureScale::names(),
            Rule::Currency => SUPPORTED_CURRENCIES.to_vec(),
        }
    }
}

/// Converts values within a category. Holds no mutable state, so one
/// engine can serve any number of sessions.
#[derive(Clone)]
pub struct Engine {
    rates: SharedRateSource,
}

impl Engine {
    pub fn new(rates: SharedRateSource) -> Self {
        Engine { rates }
    }

    pub fn with_rate_source<S: RateSource + 'static>(rates: S) -> Self {
        Self::new(Arc::new(rates))
    }

    pub fn list_categories(&self) -> &'static [UnitCategory] {
        &UnitCategory::ALL
    }

    pub fn units_for(&self, category: UnitCategory) -> Vec<&'static str> {
        Rule::for_category(category).units()
    }

    /// Map a unit label (canonical name, symbol, or alias) onto its canonical name
    pub fn resolve_unit(&self, category: UnitCategory, label: &str) -> Result<&'static str, ConvertError> {
        match category {
            UnitCategory::Currency => normalize_code(label),
            _ => unitconv_units::resolve_unit(category, label),
        }
    }

    /// Convert one request. Never panics; every failure comes back as a `ConvertError`.
    pub async fn convert(&self, request: &ConversionRequest) -> ConversionResult {
        let category = request.category;
        let from = self.resolve_unit(category, &request.from_unit)?;
        let to = self.resolve_unit(category, &request.to_unit)?;

        let converted = match Rule::for_category(category) {
            Rule::FixedFactor(table) => convert_fixed(request.value, from, to, table)?,
            Rule::Temperature => unitconv_units::temperature::convert(request.value, from, to)?,
            Rule::Currency => convert_currency(self.rates.as_ref(), request.value, from, to).await?,
        };

        debug!(%category, from, to, value = request.value, converted, "converted");

        Ok(ConversionRequest::new(category, request.value, from, to).into_conversion(converted))
    }
}
