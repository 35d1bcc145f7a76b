//! Rate service configuration
//!
//! The API credential is always supplied from outside (environment or the
//! caller); nothing here has a baked-in key.

use std::fmt;
use std::time::Duration;
use thiserror::Error;

pub const API_KEY_VAR: &str = "EXCHANGE_RATE_API_KEY";
pub const API_URL_VAR: &str = "EXCHANGE_RATE_API_URL";
pub const TIMEOUT_VAR: &str = "EXCHANGE_RATE_TIMEOUT_SECS";

const DEFAULT_BASE_URL: &str = "https://v6.exchangerate-api.com/v6";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("EXCHANGE_RATE_API_KEY is not set")]
    MissingApiKey,

    #[error("invalid EXCHANGE_RATE_TIMEOUT_SECS value '{0}': expected a positive number of seconds")]
    InvalidTimeout(String),

    #[error("failed to build HTTP client: {0}")]
    HttpClient(String),
}

#[derive(Clone)]
pub struct CurrencyConfig {
    pub api_key: String,
    /// Service root, without trailing slash
    pub base_url: String,
    /// Upper bound for one rate lookup
    pub timeout: Duration,
}

impl CurrencyConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        CurrencyConfig {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Load from `EXCHANGE_RATE_API_KEY`, `EXCHANGE_RATE_API_URL` and
    /// `EXCHANGE_RATE_TIMEOUT_SECS`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_key = lookup(API_KEY_VAR)
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let mut config = CurrencyConfig::new(api_key);

        if let Some(url) = lookup(API_URL_VAR).filter(|u| !u.trim().is_empty()) {
            config = config.with_base_url(url.trim());
        }

        if let Some(raw) = lookup(TIMEOUT_VAR) {
            let secs: f64 = raw.trim().parse()
                .map_err(|_| ConfigError::InvalidTimeout(raw.clone()))?;
            if !secs.is_finite() || secs <= 0.0 {
                return Err(ConfigError::InvalidTimeout(raw));
            }
            config = config.with_timeout(Duration::from_secs_f64(secs));
        }

        Ok(config)
    }
}

impl fmt::Debug for CurrencyConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CurrencyConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}
