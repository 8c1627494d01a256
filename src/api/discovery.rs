//! Search and realtime trend endpoints.

use serde_json::Value;

use crate::api::{check_limit, require, BitlyClient};
use crate::clients::{ApiError, Params, MISSING_ARG_QUERY};

/// Optional arguments for [`BitlyClient::search`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchOptions {
    /// Maximum number of results, in 1..=1000.
    pub limit: Option<u32>,
    /// Number of results to skip.
    pub offset: Option<u32>,
    /// Restrict to results in this language (e.g. `en`).
    pub lang: Option<String>,
    /// Restrict to results clicked from these cities (e.g. `us-ca-san francisco`).
    pub cities: Vec<String>,
    /// Restrict to results from this domain.
    pub domain: Option<String>,
    /// Result fields to return; all fields when empty.
    pub fields: Vec<String>,
}

impl BitlyClient {
    /// Searches links shortened by all users.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] with `MISSING_ARG_QUERY` for a blank query or
    /// `INVALID_LIMIT` for an out-of-range limit, before any request.
    pub async fn search(&self, query: &str, options: &SearchOptions) -> Result<Value, ApiError> {
        let query = require(query, MISSING_ARG_QUERY)?;
        check_limit(options.limit)?;

        let params = Params::new()
            .with("query", query)
            .with_opt("limit", options.limit)
            .with_opt("offset", options.offset)
            .with_opt("lang", options.lang.as_deref())
            .with_opt("domain", options.domain.as_deref())
            .with_opt(
                "cities",
                (!options.cities.is_empty()).then(|| options.cities.join(",")),
            )
            .with_opt(
                "fields",
                (!options.fields.is_empty()).then(|| options.fields.join(",")),
            );

        self.call_field("v3/search", params, "results").await
    }

    /// Returns phrases currently receiving an unusual burst of clicks.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn realtime_bursting_phrases(&self) -> Result<Value, ApiError> {
        self.call_field("v3/realtime/bursting_phrases", Params::new(), "phrases").await
    }

    /// Returns phrases currently receiving the most clicks.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn realtime_hot_phrases(&self) -> Result<Value, ApiError> {
        self.call_field("v3/realtime/hot_phrases", Params::new(), "phrases").await
    }

    /// Returns the click rate for `phrase`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] with `MISSING_ARG_QUERY` for a blank phrase.
    pub async fn realtime_clickrate(&self, phrase: &str) -> Result<Value, ApiError> {
        let phrase = require(phrase, MISSING_ARG_QUERY)?;
        let params = Params::new().with("phrase", phrase);
        self.call_field("v3/realtime/clickrate", params, "rate").await
    }

    /// Returns recently popular, high-value links.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] with `INVALID_LIMIT` for an out-of-range limit.
    pub async fn highvalue(&self, limit: u32, lang: Option<&str>) -> Result<Value, ApiError> {
        check_limit(Some(limit))?;
        let params = Params::new().with("limit", limit).with_opt("lang", lang);
        self.call_field("v3/highvalue", params, "values").await
    }
}
