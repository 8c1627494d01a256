//! Bundle endpoints under `v3/bundle/*`.
//!
//! A bundle is a named, shareable collection of links identified by its
//! own bundle link.

use serde_json::Value;

use crate::api::{require, BitlyClient};
use crate::clients::{ApiError, Params, MISSING_ARG_LINK};

/// Optional arguments for [`BitlyClient::bundle_create`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BundleOptions {
    /// Bundle description.
    pub description: Option<String>,
    /// Hide the bundle from other users.
    pub private: Option<bool>,
}

impl BitlyClient {
    /// Returns the links in a bundle.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] with `MISSING_ARG_LINK` if `bundle_link` is blank.
    pub async fn bundle_contents(
        &self,
        bundle_link: &str,
        expand_user: Option<bool>,
    ) -> Result<Value, ApiError> {
        let bundle_link = require(bundle_link, MISSING_ARG_LINK)?;
        let params = Params::new()
            .with("bundle_link", bundle_link)
            .with_opt("expand_user", expand_user);
        self.call_field("v3/bundle/contents", params, "bundle").await
    }

    /// Creates a new bundle.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn bundle_create(
        &self,
        title: &str,
        options: &BundleOptions,
    ) -> Result<Value, ApiError> {
        let params = Params::new()
            .with("title", title)
            .with_opt("description", options.description.as_deref())
            .with_opt("private", options.private);
        self.call_field("v3/bundle/create", params, "bundle").await
    }

    /// Archives a bundle.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] with `MISSING_ARG_LINK` if `bundle_link` is blank.
    pub async fn bundle_archive(&self, bundle_link: &str) -> Result<Value, ApiError> {
        let bundle_link = require(bundle_link, MISSING_ARG_LINK)?;
        let params = Params::new().with("bundle_link", bundle_link);
        self.call_data("v3/bundle/archive", params).await
    }

    /// Adds `link` to a bundle.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] with `MISSING_ARG_LINK` if either link is blank.
    pub async fn bundle_link_add(
        &self,
        bundle_link: &str,
        link: &str,
        title: Option<&str>,
    ) -> Result<Value, ApiError> {
        let bundle_link = require(bundle_link, MISSING_ARG_LINK)?;
        let link = require(link, MISSING_ARG_LINK)?;
        let params = Params::new()
            .with("bundle_link", bundle_link)
            .with("link", link)
            .with_opt("title", title);
        self.call_field("v3/bundle/link_add", params, "bundle").await
    }

    /// Removes `link` from a bundle.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] with `MISSING_ARG_LINK` if either link is blank.
    pub async fn bundle_link_remove(
        &self,
        bundle_link: &str,
        link: &str,
    ) -> Result<Value, ApiError> {
        let bundle_link = require(bundle_link, MISSING_ARG_LINK)?;
        let link = require(link, MISSING_ARG_LINK)?;
        let params = Params::new()
            .with("bundle_link", bundle_link)
            .with("link", link);
        self.call_field("v3/bundle/link_remove", params, "bundle").await
    }

    /// Returns the public bundles owned by `user`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn bundles_by_user(
        &self,
        user: &str,
        expand_user: Option<bool>,
    ) -> Result<Value, ApiError> {
        let params = Params::new()
            .with("user", user)
            .with_opt("expand_user", expand_user);
        self.call_field("v3/bundle/bundles_by_user", params, "bundles").await
    }

    /// Returns the authenticated user's bundles.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn user_bundle_history(&self, expand_user: Option<bool>) -> Result<Value, ApiError> {
        let params = Params::new().with_opt("expand_user", expand_user);
        self.call_field("v3/user/bundle_history", params, "bundles").await
    }
}
