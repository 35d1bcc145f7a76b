//! unitconv Currency - live exchange rates
//!
//! The only part of unitconv that performs I/O. A `RateSource` returns the
//! rate table for a base currency; `ExchangeRateClient` is the HTTP
//! implementation against exchangerate-api.com.
//!
//! Outcomes of a lookup are always data: a rate table, or one of
//! `ApiError`, `TransportError`, `RateNotFound`.

mod config;
mod currencies;
mod dto;
mod source;
mod client;
mod convert;

pub use config::{CurrencyConfig, ConfigError};
pub use currencies::{SUPPORTED_CURRENCIES, normalize_code};
pub use dto::LatestRatesResponse;
pub use source::{RateSource, RateTable, SharedRateSource, MissingCredentials};
pub use client::ExchangeRateClient;
pub use convert::convert_currency;
