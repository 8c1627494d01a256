//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use std::fmt;
use std::net::IpAddr;

/// A validated bitly account login, used for legacy API key authentication.
///
/// # Example
///
/// ```rust
/// use bitly_api::Login;
///
/// let login = Login::new("bitlyapidemo").unwrap();
/// assert_eq!(login.as_ref(), "bitlyapidemo");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Login(String);

impl Login {
    /// Creates a new validated login.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyLogin`] if the login is empty.
    pub fn new(login: impl Into<String>) -> Result<Self, ConfigError> {
        let login = login.into();
        if login.trim().is_empty() {
            return Err(ConfigError::EmptyLogin);
        }
        Ok(Self(login))
    }
}

impl AsRef<str> for Login {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated legacy bitly API key.
///
/// The key is sent on the query string in plain transport mode, so its
/// `Debug` output is masked.
///
/// # Example
///
/// ```rust
/// use bitly_api::ApiKey;
///
/// let key = ApiKey::new("R_0123456789").unwrap();
/// assert_eq!(key.as_ref(), "R_0123456789");
/// assert_eq!(format!("{:?}", key), "ApiKey(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Creates a new validated API key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiKey`] if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(*****)")
    }
}

/// A validated OAuth bearer access token.
///
/// # Security
///
/// The `Debug` implementation masks the token, displaying only
/// `AccessToken(*****)`.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Creates a new validated access token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAccessToken`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(ConfigError::EmptyAccessToken);
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for AccessToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(*****)")
    }
}

/// A shared secret used for legacy request signing.
///
/// # Security
///
/// The `Debug` implementation masks the secret value, displaying only
/// `SharedSecret(*****)` instead of the actual secret.
///
/// # Example
///
/// ```rust
/// use bitly_api::SharedSecret;
///
/// let secret = SharedSecret::new("my-secret").unwrap();
/// assert_eq!(format!("{:?}", secret), "SharedSecret(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct SharedSecret(String);

impl SharedSecret {
    /// Creates a new validated shared secret.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptySecret`] if the secret is empty.
    pub fn new(secret: impl Into<String>) -> Result<Self, ConfigError> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(ConfigError::EmptySecret);
        }
        Ok(Self(secret))
    }
}

impl AsRef<str> for SharedSecret {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SharedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SharedSecret(*****)")
    }
}

/// A validated base URL for the API, including scheme and host.
///
/// Only `http` and `https` schemes are accepted. A trailing slash is removed
/// so endpoint paths can be appended directly.
///
/// # Example
///
/// ```rust
/// use bitly_api::ApiBaseUrl;
///
/// let url = ApiBaseUrl::new("https://api-ssl.bit.ly/").unwrap();
/// assert_eq!(url.as_ref(), "https://api-ssl.bit.ly");
/// assert_eq!(url.scheme(), "https");
/// assert_eq!(url.host(), "api-ssl.bit.ly");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiBaseUrl {
    url: String,
    scheme_end: usize,
}

impl ApiBaseUrl {
    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL has no `http`/`https`
    /// scheme or no host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();

        let scheme_end = url
            .find("://")
            .ok_or_else(|| ConfigError::InvalidBaseUrl { url: url.clone() })?;

        let scheme = &url[..scheme_end];
        if scheme != "http" && scheme != "https" {
            return Err(ConfigError::InvalidBaseUrl { url: url.clone() });
        }

        let host = &url[scheme_end + 3..];
        if host.is_empty() || host.contains(['?', '#']) {
            return Err(ConfigError::InvalidBaseUrl { url: url.clone() });
        }

        Ok(Self { url, scheme_end })
    }

    /// Builds a base URL from a scheme and a host (which may include a port).
    pub(crate) fn from_parts(scheme: &str, host: &str) -> Self {
        Self {
            url: format!("{scheme}://{host}"),
            scheme_end: scheme.len(),
        }
    }

    /// Returns the URL scheme (`http` or `https`).
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns everything after `://`: the host, optional port and path prefix.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.url[self.scheme_end + 3..]
    }

    /// Returns `true` if the host is `localhost` or a loopback IP address.
    #[must_use]
    pub fn is_loopback(&self) -> bool {
        let authority = self.host().split('/').next().unwrap_or_default();
        let hostname = match authority.strip_prefix('[') {
            Some(rest) => rest.split(']').next().unwrap_or_default(),
            None => authority.split(':').next().unwrap_or_default(),
        };

        hostname.eq_ignore_ascii_case("localhost")
            || hostname.parse::<IpAddr>().is_ok_and(|ip| ip.is_loopback())
    }
}

impl AsRef<str> for ApiBaseUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for ApiBaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_rejects_empty_string() {
        assert!(matches!(Login::new(""), Err(ConfigError::EmptyLogin)));
        assert!(matches!(Login::new("   "), Err(ConfigError::EmptyLogin)));
    }

    #[test]
    fn test_api_key_rejects_empty_string() {
        let result = ApiKey::new("");
        assert!(matches!(result, Err(ConfigError::EmptyApiKey)));
    }

    #[test]
    fn test_access_token_masks_value_in_debug() {
        let token = AccessToken::new("abc123token").unwrap();
        let debug_output = format!("{:?}", token);
        assert_eq!(debug_output, "AccessToken(*****)");
        assert!(!debug_output.contains("abc123token"));
    }

    #[test]
    fn test_shared_secret_masks_value_in_debug() {
        let secret = SharedSecret::new("super-secret").unwrap();
        let debug_output = format!("{:?}", secret);
        assert_eq!(debug_output, "SharedSecret(*****)");
        assert!(!debug_output.contains("super-secret"));
    }

    #[test]
    fn test_shared_secret_rejects_empty() {
        assert!(matches!(SharedSecret::new(""), Err(ConfigError::EmptySecret)));
    }

    #[test]
    fn test_base_url_validates_format() {
        let url = ApiBaseUrl::new("http://127.0.0.1:8080").unwrap();
        assert_eq!(url.scheme(), "http");
        assert_eq!(url.host(), "127.0.0.1:8080");

        let url = ApiBaseUrl::new("https://proxy.example.com/bitly/").unwrap();
        assert_eq!(url.as_ref(), "https://proxy.example.com/bitly");
        assert_eq!(url.host(), "proxy.example.com/bitly");
    }

    #[test]
    fn test_base_url_rejects_invalid() {
        assert!(ApiBaseUrl::new("api.bit.ly").is_err());
        assert!(ApiBaseUrl::new("https://").is_err());
        assert!(ApiBaseUrl::new("ftp://api.bit.ly").is_err());
        assert!(ApiBaseUrl::new("https://api.bit.ly?x=1").is_err());
    }

    #[test]
    fn test_base_url_loopback_detection() {
        for url in [
            "http://127.0.0.1:8080",
            "http://localhost",
            "http://LOCALHOST:3000/bitly",
            "http://[::1]:8080",
        ] {
            assert!(ApiBaseUrl::new(url).unwrap().is_loopback(), "{url}");
        }
        assert!(!ApiBaseUrl::new("http://proxy.example.com").unwrap().is_loopback());
        assert!(!ApiBaseUrl::new("http://10.0.0.1:80").unwrap().is_loopback());
    }

    #[test]
    fn test_base_url_from_parts() {
        let url = ApiBaseUrl::from_parts("https", "api-ssl.bit.ly");
        assert_eq!(url.as_ref(), "https://api-ssl.bit.ly");
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host(), "api-ssl.bit.ly");
    }
}
