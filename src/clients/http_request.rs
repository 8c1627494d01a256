//! The outbound request handed to a transport.
//!
//! Every API call is a single GET. By the time an [`HttpRequest`] exists the
//! parameters have been authenticated, signed and encoded into `url`, so a
//! transport only has to send it.

use std::time::Duration;

/// A fully prepared GET request.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use bitly_api::clients::HttpRequest;
///
/// let request = HttpRequest::new(
///     "http://api.bit.ly/v3/expand?format=json&hash=abc",
///     "Bitly API Library v0.2.0",
///     Duration::from_secs(5),
/// );
///
/// assert_eq!(request.endpoint(), Some("v3/expand"));
/// assert_eq!(request.query(), Some("format=json&hash=abc"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    /// Absolute URL including the encoded query string.
    pub url: String,
    /// Value of the `User-Agent` header.
    pub user_agent: String,
    /// Maximum time to wait for the full response.
    pub timeout: Duration,
}

impl HttpRequest {
    /// Creates a new request.
    #[must_use]
    pub fn new(url: impl Into<String>, user_agent: impl Into<String>, timeout: Duration) -> Self {
        Self {
            url: url.into(),
            user_agent: user_agent.into(),
            timeout,
        }
    }

    /// Returns the path after the host without the leading slash, e.g. `v3/shorten`.
    #[must_use]
    pub fn endpoint(&self) -> Option<&str> {
        let rest = &self.url[self.url.find("://")? + 3..];
        let path = &rest[rest.find('/')? + 1..];
        Some(path.split('?').next().unwrap_or(path))
    }

    /// Returns the encoded query string, if any.
    #[must_use]
    pub fn query(&self) -> Option<&str> {
        self.url.split_once('?').map(|(_, query)| query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_and_query_split() {
        let request = HttpRequest::new(
            "https://api-ssl.bit.ly/v3/user/info?access_token=x&format=json",
            "ua",
            Duration::from_millis(100),
        );
        assert_eq!(request.endpoint(), Some("v3/user/info"));
        assert_eq!(request.query(), Some("access_token=x&format=json"));
    }

    #[test]
    fn test_request_without_query() {
        let request = HttpRequest::new("http://api.bit.ly/v3/expand", "ua", Duration::ZERO);
        assert_eq!(request.endpoint(), Some("v3/expand"));
        assert_eq!(request.query(), None);
    }

    #[test]
    fn test_request_without_path() {
        let request = HttpRequest::new("http://api.bit.ly", "ua", Duration::ZERO);
        assert_eq!(request.endpoint(), None);
    }
}
