//! Error types for API calls.
//!
//! Every failed call returns an [`ApiError`]: a pair of an optional numeric
//! code and a message. Transport failures, unexpected HTTP statuses,
//! malformed bodies, API-reported failures and caller-input errors all use
//! this one type, and are told apart only by their code and message.
//!
//! # Example
//!
//! ```rust,ignore
//! use bitly_api::clients::ApiError;
//!
//! match client.expand(&query).await {
//!     Ok(links) => println!("{links}"),
//!     Err(ApiError { code: Some(403), message }) => println!("rate limited: {message}"),
//!     Err(e) => println!("error {:?}: {}", e.code, e.message),
//! }
//! ```

use thiserror::Error;

/// Message used when the API omits `status_txt` on a failure.
pub const UNKNOWN_ERROR: &str = "UNKNOWN_ERROR";

/// Neither a hash nor a short URL was supplied.
pub const MISSING_ARG_SHORTURL: &str = "MISSING_ARG_SHORTURL";

/// A required link argument was empty.
pub const MISSING_ARG_LINK: &str = "MISSING_ARG_LINK";

/// A domain argument was empty.
pub const MISSING_ARG_DOMAIN: &str = "MISSING_ARG_DOMAIN";

/// A search query was empty.
pub const MISSING_ARG_QUERY: &str = "MISSING_ARG_QUERY";

/// A link edit named no fields to change.
pub const MISSING_ARG_EDIT: &str = "MISSING_ARG_EDIT";

/// A domain was given with a scheme instead of as a bare host.
pub const INVALID_BARE_DOMAIN: &str = "INVALID_BARE_DOMAIN";

/// A metrics `units` value was below -1.
pub const INVALID_UNITS: &str = "INVALID_UNITS";

/// A metrics timezone offset was outside -12..=12.
pub const INVALID_TZ_OFFSET: &str = "INVALID_TZ_OFFSET";

/// A result limit was outside 1..=1000.
pub const INVALID_LIMIT: &str = "INVALID_LIMIT";

/// A successful response lacked the expected `data` field.
pub const UNEXPECTED_RESPONSE: &str = "UNEXPECTED_RESPONSE";

/// Code used for every failure that does not carry its own status.
pub const INTERNAL_ERROR_CODE: i64 = 500;

/// The error returned by every API call.
///
/// `code` is the status reported by the API when there is one, `500` for
/// transport, HTTP-level and caller-input failures, and `None` when a body
/// that looked like JSON could not be parsed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ApiError {
    /// The numeric error code, if known.
    pub code: Option<i64>,
    /// The error message. For API failures this is the `status_txt` value.
    pub message: String,
}

impl ApiError {
    /// Creates an error with the given code and message.
    #[must_use]
    pub fn new(code: Option<i64>, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Creates an error with code 500.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(Some(INTERNAL_ERROR_CODE), message)
    }

    /// Creates a caller-input error with code 500 and a symbolic message.
    #[must_use]
    pub fn invalid_argument(symbol: &'static str) -> Self {
        Self::internal(symbol)
    }
}

/// Failure reported by a [`Transport`](crate::clients::Transport) before any
/// response was received.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The request did not complete within the timeout.
    #[error("request timed out: {0}")]
    Timeout(String),

    /// The connection could not be established.
    #[error("connection failed: {0}")]
    Connect(String),

    /// Any other failure while sending the request or reading the body.
    #[error("{0}")]
    Request(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::Timeout(error.to_string())
        } else if error.is_connect() {
            Self::Connect(error.to_string())
        } else {
            Self::Request(error.to_string())
        }
    }
}

impl From<TransportError> for ApiError {
    fn from(error: TransportError) -> Self {
        Self::internal(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_displays_message() {
        let error = ApiError::new(Some(403), "RATE_LIMIT_EXCEEDED");
        assert_eq!(error.to_string(), "RATE_LIMIT_EXCEEDED");
        assert_eq!(error.code, Some(403));
    }

    #[test]
    fn test_invalid_argument_uses_internal_code() {
        let error = ApiError::invalid_argument(MISSING_ARG_SHORTURL);
        assert_eq!(error.code, Some(500));
        assert_eq!(error.message, "MISSING_ARG_SHORTURL");
    }

    #[test]
    fn test_transport_error_converts_to_internal_error() {
        let error: ApiError = TransportError::Connect("connection refused".to_string()).into();
        assert_eq!(error.code, Some(500));
        assert!(error.message.contains("connection refused"));
    }

    #[test]
    fn test_timeout_message() {
        let error = TransportError::Timeout("operation timed out".to_string());
        assert_eq!(error.to_string(), "request timed out: operation timed out");
    }

    #[test]
    fn test_error_types_implement_std_error() {
        let api_error: &dyn std::error::Error = &ApiError::internal("test");
        let _ = api_error;

        let transport_error: &dyn std::error::Error = &TransportError::Request("x".to_string());
        let _ = transport_error;
    }
}
