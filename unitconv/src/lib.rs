//! unitconv - unit conversion with live currency rates
//!
//! `Engine` is the entry point: it lists categories and their units and
//! converts requests, dispatching on the category. `Session` pairs an
//! engine with one explicit `History` log.

mod engine;
mod history;
mod session;
pub mod display;

pub use engine::{Engine, Rule};
pub use history::{History, HistoryEntry};
pub use session::Session;

pub use unitconv_core::{
    Conversion, ConversionRequest, ConversionResult, ConvertError, ErrorReport, ParseCategoryError,
    UnitCategory,
};
pub use unitconv_currency::{
    CurrencyConfig, ConfigError, ExchangeRateClient, MissingCredentials, RateSource, RateTable,
    SharedRateSource,
};
