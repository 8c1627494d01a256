//! Typed endpoint methods for the bitly v3 API.
//!
//! [`BitlyClient`] wraps an [`HttpClient`] and exposes one async method per
//! endpoint. Each method validates its arguments, builds a [`Params`] map,
//! dispatches it, and returns the relevant slice of the response `data`.
//!
//! Argument errors are reported as [`ApiError`] with code 500 before any
//! request is sent.
//!
//! # Example
//!
//! ```rust,ignore
//! use bitly_api::{AccessToken, BitlyClient, BitlyConfig, LinkQuery};
//!
//! let config = BitlyConfig::builder()
//!     .access_token(AccessToken::new("token")?)
//!     .build()?;
//! let client = BitlyClient::new(config)?;
//!
//! let link = client.shorten("http://google.com/", Default::default()).await?;
//! let expanded = client.expand(&LinkQuery::new().hash(&link.hash)).await?;
//! ```

mod bundles;
mod discovery;
mod link_metrics;
mod links;
mod metrics;
mod user;

pub use bundles::BundleOptions;
pub use discovery::SearchOptions;
pub use links::{ShortenOptions, ShortenedLink};
pub use metrics::{MetricsOptions, TimeUnit};
pub use user::{FilterMode, LinkEdit, LinkHistoryOptions, LinkSaveOptions};

use std::sync::Arc;

use serde_json::Value;

use crate::clients::{
    ApiError, HttpClient, Params, Transport, INVALID_LIMIT, MISSING_ARG_SHORTURL,
};
use crate::config::BitlyConfig;
use crate::error::ConfigError;

/// Largest `limit` any endpoint accepts.
pub const MAX_LIMIT: u32 = 1000;

/// Client for the bitly API.
///
/// # Thread Safety
///
/// `BitlyClient` is `Send + Sync` and cheap to clone.
#[derive(Debug, Clone)]
pub struct BitlyClient {
    http_client: HttpClient,
}

// Verify BitlyClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<BitlyClient>();
};

impl BitlyClient {
    /// Creates a client using the default transport.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Transport`] if the HTTP client cannot be built.
    pub fn new(config: BitlyConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            http_client: HttpClient::new(config)?,
        })
    }

    /// Creates a client that sends requests through `transport`.
    #[must_use]
    pub fn with_transport(config: BitlyConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            http_client: HttpClient::with_transport(config, transport),
        }
    }

    /// Returns the underlying dispatcher, for endpoints without a typed method.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &BitlyConfig {
        self.http_client.config()
    }

    async fn call_data(&self, endpoint: &str, params: Params) -> Result<Value, ApiError> {
        self.http_client.call(endpoint, params).await?.into_data()
    }

    async fn call_field(
        &self,
        endpoint: &str,
        params: Params,
        field: &str,
    ) -> Result<Value, ApiError> {
        self.http_client
            .call(endpoint, params)
            .await?
            .into_data_field(field)
    }
}

/// Identifies one or more links by hash and/or short URL.
///
/// At least one hash or short URL is required by every endpoint that takes
/// a `LinkQuery`.
///
/// # Example
///
/// ```rust
/// use bitly_api::LinkQuery;
///
/// let query = LinkQuery::new()
///     .hash("j3")
///     .short_url("http://bit.ly/a35.")
///     .hash("9pTHqt");
///
/// assert_eq!(query.hashes(), ["j3", "9pTHqt"]);
/// assert!(!query.is_empty());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LinkQuery {
    hashes: Vec<String>,
    short_urls: Vec<String>,
}

impl LinkQuery {
    /// Creates an empty query.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a link hash.
    #[must_use]
    pub fn hash(mut self, hash: impl Into<String>) -> Self {
        self.hashes.push(hash.into());
        self
    }

    /// Adds a short URL.
    #[must_use]
    pub fn short_url(mut self, url: impl Into<String>) -> Self {
        self.short_urls.push(url.into());
        self
    }

    /// Returns the hashes in insertion order.
    #[must_use]
    pub fn hashes(&self) -> &[String] {
        &self.hashes
    }

    /// Returns the short URLs in insertion order.
    #[must_use]
    pub fn short_urls(&self) -> &[String] {
        &self.short_urls
    }

    /// Returns `true` when no non-empty hash or short URL was added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hashes
            .iter()
            .chain(&self.short_urls)
            .all(String::is_empty)
    }

    fn to_params(&self) -> Result<Params, ApiError> {
        if self.is_empty() {
            return Err(ApiError::invalid_argument(MISSING_ARG_SHORTURL));
        }

        let non_empty = |items: &[String]| -> Option<Vec<String>> {
            let items: Vec<String> = items.iter().filter(|s| !s.is_empty()).cloned().collect();
            (!items.is_empty()).then_some(items)
        };

        Ok(Params::new()
            .with_opt("hash", non_empty(&self.hashes))
            .with_opt("shortUrl", non_empty(&self.short_urls)))
    }
}

impl<S: Into<String>> FromIterator<S> for LinkQuery {
    /// Collects hashes and short URLs, treating anything containing `://`
    /// as a short URL.
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        iter.into_iter().fold(Self::new(), |query, item| {
            let item = item.into();
            if item.contains("://") {
                query.short_url(item)
            } else {
                query.hash(item)
            }
        })
    }
}

/// Returns `value` if non-empty, or an error carrying `symbol`.
fn require<'a>(value: &'a str, symbol: &'static str) -> Result<&'a str, ApiError> {
    if value.trim().is_empty() {
        Err(ApiError::invalid_argument(symbol))
    } else {
        Ok(value)
    }
}

/// Checks an optional result limit against 1..=[`MAX_LIMIT`].
fn check_limit(limit: Option<u32>) -> Result<(), ApiError> {
    match limit {
        Some(limit) if limit == 0 || limit > MAX_LIMIT => {
            Err(ApiError::invalid_argument(INVALID_LIMIT))
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::ParamValue;

    #[test]
    fn test_empty_query_is_rejected() {
        let error = LinkQuery::new().to_params().unwrap_err();
        assert_eq!(error, ApiError::invalid_argument(MISSING_ARG_SHORTURL));

        let error = LinkQuery::new().hash("").short_url("").to_params().unwrap_err();
        assert_eq!(error.message, "MISSING_ARG_SHORTURL");
    }

    #[test]
    fn test_query_params_are_lists() {
        let params = LinkQuery::new()
            .hash("a")
            .hash("b")
            .short_url("http://bit.ly/c")
            .to_params()
            .unwrap();

        assert_eq!(params.get("hash"), Some(&ParamValue::from(vec!["a", "b"])));
        assert_eq!(
            params.get("shortUrl"),
            Some(&ParamValue::from(vec!["http://bit.ly/c"]))
        );
    }

    #[test]
    fn test_query_skips_absent_kind() {
        let params = LinkQuery::new().hash("a").to_params().unwrap();
        assert!(params.contains_key("hash"));
        assert!(!params.contains_key("shortUrl"));
    }

    #[test]
    fn test_query_from_iterator_splits_urls_and_hashes() {
        let query: LinkQuery = ["abc", "http://bit.ly/xyz"].into_iter().collect();
        assert_eq!(query.hashes(), ["abc"]);
        assert_eq!(query.short_urls(), ["http://bit.ly/xyz"]);
    }

    #[test]
    fn test_require_rejects_blank() {
        assert_eq!(require("x", "MISSING").unwrap(), "x");
        assert_eq!(require("  ", "MISSING").unwrap_err().message, "MISSING");
    }

    #[test]
    fn test_check_limit_bounds() {
        assert!(check_limit(None).is_ok());
        assert!(check_limit(Some(1)).is_ok());
        assert!(check_limit(Some(1000)).is_ok());
        assert_eq!(check_limit(Some(0)).unwrap_err().message, "INVALID_LIMIT");
        assert_eq!(check_limit(Some(1001)).unwrap_err().message, "INVALID_LIMIT");
    }
}
