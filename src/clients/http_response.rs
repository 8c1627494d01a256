//! Response types and classification.
//!
//! A transport produces a [`RawResponse`]: the HTTP status and the body text.
//! [`classify`] turns it into either an [`ApiResponse`] or an [`ApiError`].
//!
//! # Classification Order
//!
//! The first matching rule wins:
//!
//! 1. Transport failure: code 500, the transport's message
//! 2. HTTP status other than 200: code 500, the raw body
//! 3. Body not starting with `{`: code 500, the raw body
//! 4. `status_code` (default 500) other than 200: that code, `status_txt`
//!    (default `UNKNOWN_ERROR`)
//! 5. Otherwise success
//!
//! Redirects are never followed, so a 301/302/303/307 falls under rule 2.

use serde_json::Value;

use crate::clients::errors::{
    ApiError, TransportError, INTERNAL_ERROR_CODE, UNEXPECTED_RESPONSE, UNKNOWN_ERROR,
};

/// The HTTP status the API uses for success, both on the wire and in `status_code`.
pub const STATUS_OK: u16 = 200;

/// An HTTP response as received from the transport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    /// The HTTP status code.
    pub status: u16,
    /// The response body as text.
    pub body: String,
}

impl RawResponse {
    /// Creates a new raw response.
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Returns `true` for 301, 302, 303, 307 and 308.
    #[must_use]
    pub const fn is_redirect(&self) -> bool {
        matches!(self.status, 301 | 302 | 303 | 307 | 308)
    }
}

/// A successful API response.
///
/// Wraps the decoded JSON object. The payload lives under `data`.
///
/// # Example
///
/// ```rust
/// use bitly_api::clients::{classify, RawResponse};
///
/// let raw = RawResponse::new(200, r#"{"status_code":200,"status_txt":"OK","data":{"x":1}}"#);
/// let response = classify(Ok(raw)).unwrap();
///
/// assert_eq!(response.status_code(), 200);
/// assert_eq!(response.status_txt(), Some("OK"));
/// assert_eq!(response.data(), Some(&serde_json::json!({"x": 1})));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ApiResponse {
    body: Value,
}

impl ApiResponse {
    /// Returns the `status_code` field, defaulting to 500 when absent.
    #[must_use]
    pub fn status_code(&self) -> i64 {
        status_code_of(&self.body)
    }

    /// Returns the `status_txt` field, if present.
    #[must_use]
    pub fn status_txt(&self) -> Option<&str> {
        self.body.get("status_txt").and_then(Value::as_str)
    }

    /// Returns the `data` payload, if present.
    #[must_use]
    pub fn data(&self) -> Option<&Value> {
        self.body.get("data")
    }

    /// Returns the whole decoded body.
    #[must_use]
    pub const fn body(&self) -> &Value {
        &self.body
    }

    /// Consumes the response and returns the whole decoded body.
    #[must_use]
    pub fn into_body(self) -> Value {
        self.body
    }

    /// Consumes the response and returns the `data` payload.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] with `UNEXPECTED_RESPONSE` if `data` is missing.
    pub fn into_data(self) -> Result<Value, ApiError> {
        match self.body {
            Value::Object(mut map) => map
                .remove("data")
                .ok_or_else(|| ApiError::internal(UNEXPECTED_RESPONSE)),
            _ => Err(ApiError::internal(UNEXPECTED_RESPONSE)),
        }
    }

    /// Consumes the response and returns `data[field]`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] with `UNEXPECTED_RESPONSE` if `data` or the
    /// field is missing.
    pub fn into_data_field(self, field: &str) -> Result<Value, ApiError> {
        match self.into_data()? {
            Value::Object(mut map) => map
                .remove(field)
                .ok_or_else(|| ApiError::internal(UNEXPECTED_RESPONSE)),
            _ => Err(ApiError::internal(UNEXPECTED_RESPONSE)),
        }
    }
}

fn status_code_of(body: &Value) -> i64 {
    body.get("status_code")
        .and_then(Value::as_i64)
        .unwrap_or(INTERNAL_ERROR_CODE)
}

/// Classifies the outcome of a transport call.
///
/// # Errors
///
/// Returns an [`ApiError`] for every failure case listed in the module docs.
pub fn classify(outcome: Result<RawResponse, TransportError>) -> Result<ApiResponse, ApiError> {
    let raw = outcome?;

    if raw.status != STATUS_OK || !raw.body.starts_with('{') {
        return Err(ApiError::internal(raw.body));
    }

    let body: Value =
        serde_json::from_str(&raw.body).map_err(|e| ApiError::new(None, e.to_string()))?;

    let status_code = status_code_of(&body);
    if status_code != i64::from(STATUS_OK) {
        let message = body
            .get("status_txt")
            .and_then(Value::as_str)
            .unwrap_or(UNKNOWN_ERROR);
        return Err(ApiError::new(Some(status_code), message));
    }

    Ok(ApiResponse { body })
}
