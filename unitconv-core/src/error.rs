//! Structured conversion errors
//!
//! Conversions never panic past the engine boundary. Every failure is a
//! `ConvertError` value, and `ErrorReport` is its serializable form for
//! whatever renders results to the user.

use crate::UnitCategory;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard error codes (machine-readable)
pub mod codes {
    pub const INVALID_UNIT: &str = "INVALID_UNIT";
    pub const API_ERROR: &str = "API_ERROR";
    pub const TRANSPORT_ERROR: &str = "TRANSPORT_ERROR";
    pub const RATE_NOT_FOUND: &str = "RATE_NOT_FOUND";
}

/// Failure of a single conversion
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConvertError {
    /// Unit is not a member of the active category's unit set
    #[error("unit '{unit}' is not a {category} unit")]
    InvalidUnit { unit: String, category: UnitCategory },

    /// Currency service answered with `result: "error"`
    #[error("API error: {error_type}")]
    ApiError { error_type: String },

    /// Currency service could not be reached or answered garbage
    #[error("API request failed: {reason}")]
    TransportError { reason: String },

    /// Target currency missing from the returned rate table
    #[error("currency '{code}' not found in the API response")]
    RateNotFound { code: String },
}

impl ConvertError {
    pub fn invalid_unit(unit: impl Into<String>, category: UnitCategory) -> Self {
        ConvertError::InvalidUnit { unit: unit.into(), category }
    }

    pub fn api(error_type: impl Into<String>) -> Self {
        ConvertError::ApiError { error_type: error_type.into() }
    }

    pub fn transport(reason: impl Into<String>) -> Self {
        ConvertError::TransportError { reason: reason.into() }
    }

    pub fn rate_not_found(code: impl Into<String>) -> Self {
        ConvertError::RateNotFound { code: code.into() }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ConvertError::InvalidUnit { .. } => codes::INVALID_UNIT,
            ConvertError::ApiError { .. } => codes::API_ERROR,
            ConvertError::TransportError { .. } => codes::TRANSPORT_ERROR,
            ConvertError::RateNotFound { .. } => codes::RATE_NOT_FOUND,
        }
    }

    /// Failures caused by the currency service rather than by the caller
    pub fn is_external(&self) -> bool {
        !matches!(self, ConvertError::InvalidUnit { .. })
    }

    pub fn suggestion(&self) -> Option<String> {
        match self {
            ConvertError::InvalidUnit { category, .. } => {
                Some(format!("Pick a unit from the {} unit list", category))
            }
            ConvertError::ApiError { error_type } if error_type == "invalid-key" => {
                Some("Check EXCHANGE_RATE_API_KEY".to_string())
            }
            ConvertError::ApiError { .. } => None,
            ConvertError::TransportError { .. } => {
                Some("Check network connectivity and try again".to_string())
            }
            ConvertError::RateNotFound { .. } => None,
        }
    }
}

/// Serializable view of a `ConvertError`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorReport {
    /// Machine-readable error code
    pub code: String,

    /// Human-readable error message
    pub message: String,

    /// Suggestion for fixing the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl From<&ConvertError> for ErrorReport {
    fn from(err: &ConvertError) -> Self {
        ErrorReport {
            code: err.code().to_string(),
            message: err.to_string(),
            suggestion: err.suggestion(),
        }
    }
}

impl std::fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, " (suggestion: {})", suggestion)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_distinct() {
        let errors = [
            ConvertError::invalid_unit("Parsec", UnitCategory::Length),
            ConvertError::api("invalid-key"),
            ConvertError::transport("connection refused"),
            ConvertError::rate_not_found("XYZ"),
        ];
        let codes: std::collections::HashSet<_> = errors.iter().map(|e| e.code()).collect();
        assert_eq!(codes.len(), 4);
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            ConvertError::invalid_unit("Parsec", UnitCategory::Length).to_string(),
            "unit 'Parsec' is not a Length unit"
        );
        assert_eq!(ConvertError::api("invalid-key").to_string(), "API error: invalid-key");
        assert_eq!(
            ConvertError::rate_not_found("XYZ").to_string(),
            "currency 'XYZ' not found in the API response"
        );
    }

    #[test]
    fn test_external() {
        assert!(!ConvertError::invalid_unit("x", UnitCategory::Time).is_external());
        assert!(ConvertError::transport("timeout").is_external());
    }

    #[test]
    fn test_report_serialization() {
        let report = ErrorReport::from(&ConvertError::api("invalid-key"));
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["code"], "API_ERROR");
        assert_eq!(json["message"], "API error: invalid-key");
        assert_eq!(json["suggestion"], "Check EXCHANGE_RATE_API_KEY");

        let report = ErrorReport::from(&ConvertError::rate_not_found("XYZ"));
        let json = serde_json::to_value(&report).unwrap();
        assert!(json.get("suggestion").is_none());
    }

    #[test]
    fn test_report_display() {
        let report = ErrorReport::from(&ConvertError::transport("timed out"));
        assert_eq!(
            report.to_string(),
            "[TRANSPORT_ERROR] API request failed: timed out (suggestion: Check network connectivity and try again)"
        );
    }
}
