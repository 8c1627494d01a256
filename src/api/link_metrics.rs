//! Per-link metrics under `v3/link/*`.
//!
//! These endpoints take a full short link (`http://bit.ly/abc`) rather than
//! a hash, plus optional [`MetricsOptions`].

use serde_json::Value;

use crate::api::{require, BitlyClient, MetricsOptions};
use crate::clients::{ApiError, Params, MISSING_ARG_LINK};

/// Default `content_type` for [`BitlyClient::link_content`].
pub const DEFAULT_CONTENT_TYPE: &str = "html";

impl BitlyClient {
    async fn link_metric(
        &self,
        endpoint: &str,
        field: &str,
        link: &str,
        options: &MetricsOptions,
    ) -> Result<Value, ApiError> {
        let link = require(link, MISSING_ARG_LINK)?;
        let params = options.apply(Params::new().with("link", link))?;
        self.call_field(endpoint, params, field).await
    }

    /// Returns the click series for `link`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for a blank link or invalid options before any
    /// request, or if the call fails.
    pub async fn link_clicks(
        &self,
        link: &str,
        options: &MetricsOptions,
    ) -> Result<Value, ApiError> {
        self.link_metric("v3/link/clicks", "link_clicks", link, options).await
    }

    /// Returns referrers for `link`.
    ///
    /// # Errors
    ///
    /// See [`link_clicks`](Self::link_clicks).
    pub async fn link_referrers(
        &self,
        link: &str,
        options: &MetricsOptions,
    ) -> Result<Value, ApiError> {
        self.link_metric("v3/link/referrers", "referrers", link, options).await
    }

    /// Returns referring domains for `link`.
    ///
    /// # Errors
    ///
    /// See [`link_clicks`](Self::link_clicks).
    pub async fn link_referring_domains(
        &self,
        link: &str,
        options: &MetricsOptions,
    ) -> Result<Value, ApiError> {
        self.link_metric(
            "v3/link/referring_domains",
            "referring_domains",
            link,
            options,
        )
        .await
    }

    /// Returns click counts by country for `link`.
    ///
    /// # Errors
    ///
    /// See [`link_clicks`](Self::link_clicks).
    pub async fn link_countries(
        &self,
        link: &str,
        options: &MetricsOptions,
    ) -> Result<Value, ApiError> {
        self.link_metric("v3/link/countries", "countries", link, options).await
    }

    /// Returns social share counts for `link`.
    ///
    /// # Errors
    ///
    /// See [`link_clicks`](Self::link_clicks).
    pub async fn link_shares(
        &self,
        link: &str,
        options: &MetricsOptions,
    ) -> Result<Value, ApiError> {
        self.link_metric("v3/link/shares", "shares", link, options).await
    }

    /// Returns how many users have shortened the long URL behind `link`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for a blank link or if the call fails.
    pub async fn link_encoders_count(&self, link: &str) -> Result<Value, ApiError> {
        let link = require(link, MISSING_ARG_LINK)?;
        self.call_data("v3/link/encoders_count", Params::new().with("link", link)).await
    }

    /// Returns page metadata for `link`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for a blank link or if the call fails.
    pub async fn link_info(&self, link: &str) -> Result<Value, ApiError> {
        let link = require(link, MISSING_ARG_LINK)?;
        self.call_data("v3/link/info", Params::new().with("link", link)).await
    }

    /// Returns the cached page content for `link`.
    ///
    /// `content_type` defaults to `html`; the API also accepts `text`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for a blank link or if the call fails.
    pub async fn link_content(
        &self,
        link: &str,
        content_type: Option<&str>,
    ) -> Result<Value, ApiError> {
        let link = require(link, MISSING_ARG_LINK)?;
        let params = Params::new()
            .with("link", link)
            .with("content_type", content_type.unwrap_or(DEFAULT_CONTENT_TYPE));
        self.call_field("v3/link/content", params, "content").await
    }
}
