//! The request dispatcher.
//!
//! [`HttpClient`] turns an endpoint name and a [`Params`] map into a signed
//! GET request, sends it through a [`Transport`], and classifies the result.

use std::sync::Arc;
use std::time::Duration;

use crate::auth::signature;
use crate::clients::errors::ApiError;
use crate::clients::http_request::HttpRequest;
use crate::clients::http_response::{classify, ApiResponse};
use crate::clients::params::Params;
use crate::clients::transport::{ReqwestTransport, Transport};
use crate::config::{ApiBaseUrl, BitlyConfig};
use crate::error::ConfigError;

/// Client version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Response format requested when the caller does not pick one.
pub const DEFAULT_FORMAT: &str = "json";

/// Dispatches API calls for one set of credentials.
///
/// Each call runs the same pipeline:
///
/// 1. Default `format` to `json`
/// 2. Add `access_token`, or `login` and `apiKey`
/// 3. Add `t` and `signature` when a shared secret is configured
/// 4. Encode the parameters onto `<base>/<endpoint>?...`
/// 5. Send a GET with the configured timeout and user agent, no redirects
/// 6. Classify the response
///
/// The client holds no per-call state.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use bitly_api::clients::{HttpClient, Params};
/// use bitly_api::{AccessToken, BitlyConfig};
///
/// let config = BitlyConfig::builder()
///     .access_token(AccessToken::new("token").unwrap())
///     .build()
///     .unwrap();
/// let client = HttpClient::new(config)?;
///
/// let response = client
///     .call("v3/expand", Params::new().with("hash", "abc"))
///     .await?;
/// println!("{:?}", response.data());
/// ```
#[derive(Debug, Clone)]
pub struct HttpClient {
    config: BitlyConfig,
    transport: Arc<dyn Transport>,
    base_url: ApiBaseUrl,
    user_agent: String,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a client using the default `reqwest` transport.
    ///
    /// No network activity happens here.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Transport`] if the HTTP client cannot be built.
    pub fn new(config: BitlyConfig) -> Result<Self, ConfigError> {
        let transport = ReqwestTransport::new()?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Creates a client that sends requests through `transport`.
    #[must_use]
    pub fn with_transport(config: BitlyConfig, transport: Arc<dyn Transport>) -> Self {
        let base_url = config.effective_base_url();

        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Bitly API Library v{SDK_VERSION} | Rust {rust_version}");

        Self {
            config,
            transport,
            base_url,
            user_agent,
        }
    }

    /// Returns the configuration this client was built with.
    #[must_use]
    pub const fn config(&self) -> &BitlyConfig {
        &self.config
    }

    /// Returns the base URL requests are sent to.
    #[must_use]
    pub const fn base_url(&self) -> &ApiBaseUrl {
        &self.base_url
    }

    /// Returns the `User-Agent` header value.
    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Runs the parameter pipeline and returns the final, signed parameter set.
    #[must_use]
    pub fn prepare_params(&self, params: Params) -> Params {
        let params = params.with_default("format", DEFAULT_FORMAT);
        let params = self.config.credentials().apply(params);
        match self.config.secret() {
            Some(secret) => signature::sign(params, secret),
            None => params,
        }
    }

    /// Builds the request for `endpoint` without sending it.
    #[must_use]
    pub fn prepare(&self, endpoint: &str, params: Params, timeout: Duration) -> HttpRequest {
        let params = self.prepare_params(params);
        let endpoint = endpoint.trim_start_matches('/');
        let url = format!("{}/{endpoint}?{}", self.base_url, params.to_query_string());
        HttpRequest::new(url, self.user_agent.clone(), timeout)
    }

    /// Calls `endpoint` with `params` using the configured timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, a non-200 HTTP status, a
    /// non-JSON body, or an API-reported failure.
    pub async fn call(&self, endpoint: &str, params: Params) -> Result<ApiResponse, ApiError> {
        self.call_with_timeout(endpoint, params, self.config.timeout()).await
    }

    /// Calls `endpoint` with `params`, overriding the timeout for this call.
    ///
    /// # Errors
    ///
    /// See [`call`](Self::call).
    pub async fn call_with_timeout(
        &self,
        endpoint: &str,
        params: Params,
        timeout: Duration,
    ) -> Result<ApiResponse, ApiError> {
        let request = self.prepare(endpoint, params, timeout);

        tracing::debug!(
            endpoint,
            auth = %self.config.credentials(),
            signed = self.config.secret().is_some(),
            "Sending bitly API request"
        );

        let outcome = self.transport.execute(request).await;
        if let Ok(raw) = &outcome {
            if raw.is_redirect() {
                tracing::warn!(
                    endpoint,
                    status = raw.status,
                    "Redirect from bitly API was not followed"
                );
            }
        }

        let result = classify(outcome);
        if let Err(error) = &result {
            tracing::warn!(
                endpoint,
                code = ?error.code,
                message = %error.message,
                "bitly API call failed"
            );
        }
        result
    }
}
