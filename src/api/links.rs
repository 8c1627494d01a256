//! Shortening, expansion and per-link statistics endpoints.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::api::{require, BitlyClient, LinkQuery};
use crate::clients::{
    ApiError, Params, INVALID_BARE_DOMAIN, MISSING_ARG_DOMAIN, MISSING_ARG_LINK,
    UNEXPECTED_RESPONSE,
};

/// Optional arguments for [`BitlyClient::shorten`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ShortenOptions {
    /// Login of a user to shorten on behalf of.
    pub x_login: Option<String>,
    /// API key of the user named by `x_login`.
    pub x_api_key: Option<String>,
    /// Short domain to use instead of the configured preferred domain.
    pub preferred_domain: Option<String>,
}

/// A newly created or existing short link.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortenedLink {
    /// The short URL, e.g. `http://bit.ly/ze6poY`.
    pub url: String,
    /// The user-specific hash.
    pub hash: String,
    /// The hash shared by everyone who shortened the same long URL.
    pub global_hash: String,
    /// The long URL as the API normalized it.
    pub long_url: String,
    /// `1` the first time this user shortened the long URL, `0` afterwards.
    #[serde(default)]
    pub new_hash: i64,
}

impl ShortenedLink {
    /// Returns `true` if the call created a new hash for this user.
    #[must_use]
    pub const fn is_new(&self) -> bool {
        self.new_hash == 1
    }
}

impl BitlyClient {
    /// Shortens `uri`.
    ///
    /// The `domain` parameter defaults to the configured preferred domain.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] with `MISSING_ARG_LINK` if `uri` is blank, or if
    /// the call fails or the response lacks the link fields.
    pub async fn shorten(
        &self,
        uri: &str,
        options: ShortenOptions,
    ) -> Result<ShortenedLink, ApiError> {
        let uri = require(uri, MISSING_ARG_LINK)?;
        let domain = options
            .preferred_domain
            .unwrap_or_else(|| self.config().preferred_domain().to_string());

        let mut params = Params::new().with("uri", uri).with("domain", domain);
        if let Some(x_login) = options.x_login {
            params = params
                .with("x_login", x_login)
                .with_opt("x_apiKey", options.x_api_key);
        }

        let data = self.call_data("v3/shorten", params).await?;
        serde_json::from_value(data).map_err(|e| {
            tracing::warn!(error = %e, "Unexpected v3/shorten payload");
            ApiError::internal(UNEXPECTED_RESPONSE)
        })
    }

    /// Expands hashes and short URLs to their long URLs.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] with `MISSING_ARG_SHORTURL` if `query` is empty,
    /// before any request is made.
    pub async fn expand(&self, query: &LinkQuery) -> Result<Value, ApiError> {
        self.call_field("v3/expand", query.to_params()?, "expand").await
    }

    /// Returns click totals for the given links.
    ///
    /// # Errors
    ///
    /// See [`expand`](Self::expand).
    pub async fn clicks(&self, query: &LinkQuery) -> Result<Value, ApiError> {
        self.call_field("v3/clicks", query.to_params()?, "clicks").await
    }

    /// Returns referrer statistics for the given links.
    ///
    /// # Errors
    ///
    /// See [`expand`](Self::expand).
    pub async fn referrers(&self, query: &LinkQuery) -> Result<Value, ApiError> {
        self.call_field("v3/referrers", query.to_params()?, "referrers").await
    }

    /// Returns clicks per day for the last 30 days, most recent first.
    ///
    /// # Errors
    ///
    /// See [`expand`](Self::expand).
    pub async fn clicks_by_day(&self, query: &LinkQuery) -> Result<Value, ApiError> {
        self.call_field("v3/clicks_by_day", query.to_params()?, "clicks_by_day").await
    }

    /// Returns clicks per minute for the last 30 minutes, most recent first.
    ///
    /// # Errors
    ///
    /// See [`expand`](Self::expand).
    pub async fn clicks_by_minute(&self, query: &LinkQuery) -> Result<Value, ApiError> {
        self.call_field("v3/clicks_by_minute", query.to_params()?, "clicks_by_minute").await
    }

    /// Returns page titles and creators for the given links.
    ///
    /// # Errors
    ///
    /// See [`expand`](Self::expand).
    pub async fn info(&self, query: &LinkQuery) -> Result<Value, ApiError> {
        self.call_field("v3/info", query.to_params()?, "info").await
    }

    /// Looks up existing short links for a long URL.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] with `MISSING_ARG_LINK` if `url` is blank.
    pub async fn lookup(&self, url: &str) -> Result<Value, ApiError> {
        let url = require(url, MISSING_ARG_LINK)?;
        self.call_field("v3/lookup", Params::new().with("url", url), "lookup").await
    }

    /// Assigns a custom keyword to a hash.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] with `MISSING_ARG_LINK` if `hash` is blank.
    pub async fn keyword(&self, hash: &str, keyword: &str) -> Result<Value, ApiError> {
        let hash = require(hash, MISSING_ARG_LINK)?;
        let params = Params::new().with("hash", hash).with("keyword", keyword);
        self.call_data("v3/keyword", params).await
    }

    /// Returns whether `domain` is a bitly pro (custom short) domain.
    ///
    /// `domain` must be a bare host such as `nyti.ms`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] with `MISSING_ARG_DOMAIN` for a blank domain, or
    /// `INVALID_BARE_DOMAIN` if `domain` starts with `http://` or `https://`,
    /// before any request is made.
    pub async fn pro_domain(&self, domain: &str) -> Result<bool, ApiError> {
        let domain = require(domain, MISSING_ARG_DOMAIN)?;
        if has_http_scheme(domain) {
            return Err(ApiError::invalid_argument(INVALID_BARE_DOMAIN));
        }

        let params = Params::new().with("domain", domain);
        self.call_field("v3/bitly_pro_domain", params, "bitly_pro_domain")
            .await?
            .as_bool()
            .ok_or_else(|| ApiError::internal(UNEXPECTED_RESPONSE))
    }
}

fn has_http_scheme(domain: &str) -> bool {
    let domain = domain.trim_start().to_ascii_lowercase();
    domain.starts_with("http://") || domain.starts_with("https://")
}
