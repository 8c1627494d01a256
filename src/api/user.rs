//! Endpoints for the authenticated user under `v3/user/*`.

use serde_json::Value;

use crate::api::{check_limit, require, BitlyClient, MetricsOptions};
use crate::clients::{ApiError, Params, MISSING_ARG_EDIT, MISSING_ARG_LINK};

/// Three-way filter used by link history queries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterMode {
    /// Only matching links.
    On,
    /// Only non-matching links.
    Off,
    /// All links.
    Both,
}

impl FilterMode {
    /// Returns the wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::On => "on",
            Self::Off => "off",
            Self::Both => "both",
        }
    }
}

/// Filters for [`BitlyClient::user_link_history`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LinkHistoryOptions {
    /// Restrict to a single short link.
    pub link: Option<String>,
    /// Maximum number of links, in 1..=1000.
    pub limit: Option<u32>,
    /// Number of links to skip.
    pub offset: Option<u32>,
    /// Only links created before this epoch timestamp.
    pub created_before: Option<i64>,
    /// Only links created after this epoch timestamp.
    pub created_after: Option<i64>,
    /// Only links modified after this epoch timestamp.
    pub modified_after: Option<i64>,
    /// Archived link filter.
    pub archived: Option<FilterMode>,
    /// Private link filter.
    pub private: Option<FilterMode>,
    /// Sub-account login to read history for.
    pub user: Option<String>,
}

/// Optional arguments for [`BitlyClient::user_link_save`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LinkSaveOptions {
    /// Link title.
    pub title: Option<String>,
    /// Free-form note.
    pub note: Option<String>,
    /// Hide the link from the public profile.
    pub private: Option<bool>,
    /// Creation timestamp to record.
    pub user_ts: Option<i64>,
}

/// Fields to change with [`BitlyClient::user_link_edit`].
///
/// Only fields that are `Some` are edited.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LinkEdit {
    /// New title.
    pub title: Option<String>,
    /// New note.
    pub note: Option<String>,
    /// New private flag.
    pub private: Option<bool>,
    /// New creation timestamp.
    pub user_ts: Option<i64>,
    /// New archived flag.
    pub archived: Option<bool>,
}

impl LinkEdit {
    /// Returns the names of the fields being edited, in wire order.
    #[must_use]
    pub fn edited_fields(&self) -> Vec<&'static str> {
        [
            ("title", self.title.is_some()),
            ("note", self.note.is_some()),
            ("private", self.private.is_some()),
            ("user_ts", self.user_ts.is_some()),
            ("archived", self.archived.is_some()),
        ]
        .into_iter()
        .filter_map(|(name, set)| set.then_some(name))
        .collect()
    }

    fn to_params(&self, link: &str) -> Result<Params, ApiError> {
        let fields = self.edited_fields();
        if fields.is_empty() {
            return Err(ApiError::invalid_argument(MISSING_ARG_EDIT));
        }

        Ok(Params::new()
            .with("link", link)
            .with("edit", fields.join(","))
            .with_opt("title", self.title.as_deref())
            .with_opt("note", self.note.as_deref())
            .with_opt("private", self.private)
            .with_opt("user_ts", self.user_ts)
            .with_opt("archived", self.archived))
    }
}

impl BitlyClient {
    /// Returns profile information for `login`, or for the authenticated
    /// user when `login` is `None`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn user_info(&self, login: Option<&str>) -> Result<Value, ApiError> {
        let params = Params::new().with_opt("login", login);
        self.call_data("v3/user/info", params).await
    }

    /// Returns the user's link history, most recent first.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] with `INVALID_LIMIT` for an out-of-range limit,
    /// or if the call fails.
    pub async fn user_link_history(
        &self,
        options: &LinkHistoryOptions,
    ) -> Result<Value, ApiError> {
        check_limit(options.limit)?;

        let params = Params::new()
            .with_opt("link", options.link.as_deref())
            .with_opt("limit", options.limit)
            .with_opt("offset", options.offset)
            .with_opt("created_before", options.created_before)
            .with_opt("created_after", options.created_after)
            .with_opt("modified_after", options.modified_after)
            .with_opt("archived", options.archived.map(FilterMode::as_str))
            .with_opt("private", options.private.map(FilterMode::as_str))
            .with_opt("user", options.user.as_deref());

        self.call_field("v3/user/link_history", params, "link_history").await
    }

    /// Looks up the user's own short links for a long URL.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] with `MISSING_ARG_LINK` if `url` is blank.
    pub async fn user_link_lookup(&self, url: &str) -> Result<Value, ApiError> {
        let url = require(url, MISSING_ARG_LINK)?;
        self.call_field(
            "v3/user/link_lookup",
            Params::new().with("url", url),
            "link_lookup",
        )
        .await
    }

    /// Saves a long URL to the user's history without returning a new hash
    /// for existing links.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] with `MISSING_ARG_LINK` if `long_url` is blank.
    pub async fn user_link_save(
        &self,
        long_url: &str,
        options: &LinkSaveOptions,
    ) -> Result<Value, ApiError> {
        let long_url = require(long_url, MISSING_ARG_LINK)?;
        let params = Params::new()
            .with("longUrl", long_url)
            .with_opt("title", options.title.as_deref())
            .with_opt("note", options.note.as_deref())
            .with_opt("private", options.private)
            .with_opt("user_ts", options.user_ts);

        self.call_field("v3/user/link_save", params, "link_save").await
    }

    /// Edits metadata of one of the user's links.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] with `MISSING_ARG_LINK` for a blank link or
    /// `MISSING_ARG_EDIT` when `edit` changes nothing, before any request.
    pub async fn user_link_edit(&self, link: &str, edit: &LinkEdit) -> Result<Value, ApiError> {
        let link = require(link, MISSING_ARG_LINK)?;
        self.call_field("v3/user/link_edit", edit.to_params(link)?, "link_edit").await
    }

    /// Returns the user's aggregate click series.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for invalid options before any request, or if
    /// the call fails.
    pub async fn user_clicks(&self, options: &MetricsOptions) -> Result<Value, ApiError> {
        self.user_metric("v3/user/clicks", "clicks", options).await
    }

    /// Returns the user's clicks by country.
    ///
    /// # Errors
    ///
    /// See [`user_clicks`](Self::user_clicks).
    pub async fn user_countries(&self, options: &MetricsOptions) -> Result<Value, ApiError> {
        self.user_metric("v3/user/countries", "user_countries", options).await
    }

    /// Returns the user's referrers.
    ///
    /// # Errors
    ///
    /// See [`user_clicks`](Self::user_clicks).
    pub async fn user_referrers(&self, options: &MetricsOptions) -> Result<Value, ApiError> {
        self.user_metric("v3/user/referrers", "user_referrers", options).await
    }

    /// Returns the user's most clicked links.
    ///
    /// # Errors
    ///
    /// See [`user_clicks`](Self::user_clicks).
    pub async fn user_popular_links(&self, options: &MetricsOptions) -> Result<Value, ApiError> {
        self.user_metric("v3/user/popular_links", "popular_links", options).await
    }

    /// Returns the user's share counts.
    ///
    /// # Errors
    ///
    /// See [`user_clicks`](Self::user_clicks).
    pub async fn user_share_counts(&self, options: &MetricsOptions) -> Result<Value, ApiError> {
        self.user_metric("v3/user/share_counts", "share_counts", options).await
    }

    async fn user_metric(
        &self,
        endpoint: &str,
        field: &str,
        options: &MetricsOptions,
    ) -> Result<Value, ApiError> {
        let params = options.apply(Params::new())?;
        self.call_field(endpoint, params, field).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::ParamValue;

    #[test]
    fn test_link_edit_lists_edited_fields() {
        let edit = LinkEdit {
            title: Some("New title".to_string()),
            archived: Some(true),
            ..Default::default()
        };
        assert_eq!(edit.edited_fields(), vec!["title", "archived"]);

        let params = edit.to_params("http://bit.ly/abc").unwrap();
        assert_eq!(params.get("edit"), Some(&ParamValue::from("title,archived")));
        assert_eq!(params.get("archived"), Some(&ParamValue::Bool(true)));
        assert!(!params.contains_key("note"));
    }

    #[test]
    fn test_empty_link_edit_is_rejected() {
        let error = LinkEdit::default().to_params("http://bit.ly/abc").unwrap_err();
        assert_eq!(error.code, Some(500));
        assert_eq!(error.message, "MISSING_ARG_EDIT");
    }

    #[test]
    fn test_filter_mode_names() {
        assert_eq!(FilterMode::On.as_str(), "on");
        assert_eq!(FilterMode::Off.as_str(), "off");
        assert_eq!(FilterMode::Both.as_str(), "both");
    }
}
