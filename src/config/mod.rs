//! Configuration types for the bitly API client.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`BitlyConfig`]: The configuration struct holding all client settings
//! - [`BitlyConfigBuilder`]: A builder for constructing [`BitlyConfig`] instances
//! - [`Login`], [`ApiKey`]: Validated legacy credentials
//! - [`AccessToken`]: A validated OAuth bearer token with masked debug output
//! - [`SharedSecret`]: A validated signing secret with masked debug output
//! - [`ApiBaseUrl`]: A validated API base URL override
//!
//! # Example
//!
//! ```rust
//! use bitly_api::{AccessToken, BitlyConfig, SharedSecret};
//!
//! let config = BitlyConfig::builder()
//!     .access_token(AccessToken::new("my-token").unwrap())
//!     .secret(SharedSecret::new("my-secret").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert!(config.credentials().is_token());
//! ```

mod newtypes;

pub use newtypes::{AccessToken, ApiBaseUrl, ApiKey, Login, SharedSecret};

use std::time::Duration;

use crate::auth::Credentials;
use crate::error::ConfigError;

/// Host used for legacy (plain HTTP) requests.
pub const DEFAULT_API_HOST: &str = "api.bit.ly";

/// Host used for token (HTTPS) requests.
pub const DEFAULT_SSL_HOST: &str = "api-ssl.bit.ly";

/// Default domain for newly shortened links.
pub const DEFAULT_PREFERRED_DOMAIN: &str = "bit.ly";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(5000);

/// Environment variable holding an OAuth access token.
pub const ENV_ACCESS_TOKEN: &str = "BITLY_ACCESS_TOKEN";

/// Environment variable holding a legacy login.
pub const ENV_LOGIN: &str = "BITLY_LOGIN";

/// Environment variable holding a legacy API key.
pub const ENV_API_KEY: &str = "BITLY_API_KEY";

/// Environment variable holding the optional shared secret.
pub const ENV_SECRET: &str = "BITLY_SECRET";

/// Configuration for the bitly API client.
///
/// Credentials are fixed for the life of the configuration. When both an
/// access token and a login/API key pair are supplied to the builder, the
/// token wins.
///
/// # Thread Safety
///
/// `BitlyConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct BitlyConfig {
    credentials: Credentials,
    secret: Option<SharedSecret>,
    preferred_domain: String,
    timeout: Duration,
    user_agent_prefix: Option<String>,
    api_base_url: Option<ApiBaseUrl>,
}

impl BitlyConfig {
    /// Creates a new builder for constructing a `BitlyConfig`.
    #[must_use]
    pub fn builder() -> BitlyConfigBuilder {
        BitlyConfigBuilder::new()
    }

    /// Builds a configuration from environment variables.
    ///
    /// Reads `BITLY_ACCESS_TOKEN`, or `BITLY_LOGIN` and `BITLY_API_KEY`, plus
    /// the optional `BITLY_SECRET`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvVar`] if neither a token nor a complete
    /// login/key pair is set, or a validation error if a value is empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        let var = |name: &str| std::env::var(name).ok().filter(|v| !v.is_empty());

        let mut builder = Self::builder();

        if let Some(token) = var(ENV_ACCESS_TOKEN) {
            builder = builder.access_token(AccessToken::new(token)?);
        } else {
            let login = var(ENV_LOGIN).ok_or(ConfigError::MissingEnvVar { name: ENV_LOGIN })?;
            let api_key =
                var(ENV_API_KEY).ok_or(ConfigError::MissingEnvVar { name: ENV_API_KEY })?;
            builder = builder.login_api_key(Login::new(login)?, ApiKey::new(api_key)?);
        }

        if let Some(secret) = var(ENV_SECRET) {
            builder = builder.secret(SharedSecret::new(secret)?);
        }

        builder.build()
    }

    /// Returns the active credentials.
    #[must_use]
    pub const fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Returns the shared signing secret, if configured.
    #[must_use]
    pub const fn secret(&self) -> Option<&SharedSecret> {
        self.secret.as_ref()
    }

    /// Returns the preferred short link domain.
    #[must_use]
    pub fn preferred_domain(&self) -> &str {
        &self.preferred_domain
    }

    /// Returns the per-request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the base URL override, if configured.
    #[must_use]
    pub const fn api_base_url(&self) -> Option<&ApiBaseUrl> {
        self.api_base_url.as_ref()
    }

    /// Returns the base URL requests are sent to.
    ///
    /// This is the override if one is configured, otherwise
    /// `https://api-ssl.bit.ly` in token mode and `http://api.bit.ly` in
    /// legacy mode.
    #[must_use]
    pub fn effective_base_url(&self) -> ApiBaseUrl {
        self.api_base_url.clone().unwrap_or_else(|| {
            let host = if self.credentials.is_token() {
                DEFAULT_SSL_HOST
            } else {
                DEFAULT_API_HOST
            };
            ApiBaseUrl::from_parts(self.credentials.scheme(), host)
        })
    }
}

// Verify BitlyConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<BitlyConfig>();
};

/// Builder for constructing [`BitlyConfig`] instances.
///
/// # Defaults
///
/// - `preferred_domain`: `bit.ly`
/// - `timeout`: 5 seconds
/// - `secret`: `None` (no signing)
/// - `user_agent_prefix`: `None`
/// - `api_base_url`: `None` (host chosen by auth mode)
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use bitly_api::{ApiKey, BitlyConfig, Login};
///
/// let config = BitlyConfig::builder()
///     .login_api_key(Login::new("bitlyapidemo").unwrap(), ApiKey::new("R_key").unwrap())
///     .preferred_domain("j.mp")
///     .timeout(Duration::from_millis(2500))
///     .user_agent_prefix("MyApp/1.0")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.preferred_domain(), "j.mp");
/// ```
#[derive(Debug, Default)]
pub struct BitlyConfigBuilder {
    legacy: Option<(Login, ApiKey)>,
    access_token: Option<AccessToken>,
    secret: Option<SharedSecret>,
    preferred_domain: Option<String>,
    timeout: Option<Duration>,
    user_agent_prefix: Option<String>,
    api_base_url: Option<ApiBaseUrl>,
}

impl BitlyConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the credentials, replacing any set earlier.
    #[must_use]
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        match credentials {
            Credentials::Legacy { login, api_key } => {
                self.legacy = Some((login, api_key));
                self.access_token = None;
            }
            Credentials::Token(token) => {
                self.access_token = Some(token);
                self.legacy = None;
            }
        }
        self
    }

    /// Sets legacy login / API key credentials.
    #[must_use]
    pub fn login_api_key(mut self, login: Login, api_key: ApiKey) -> Self {
        self.legacy = Some((login, api_key));
        self
    }

    /// Sets an OAuth access token. Takes precedence over a login / API key.
    #[must_use]
    pub fn access_token(mut self, token: AccessToken) -> Self {
        self.access_token = Some(token);
        self
    }

    /// Sets the shared secret used to sign requests.
    #[must_use]
    pub fn secret(mut self, secret: SharedSecret) -> Self {
        self.secret = Some(secret);
        self
    }

    /// Sets the default short link domain (e.g. `bit.ly` or `j.mp`).
    #[must_use]
    pub fn preferred_domain(mut self, domain: impl Into<String>) -> Self {
        self.preferred_domain = Some(domain.into());
        self
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Overrides the base URL for all requests (proxies, test servers).
    ///
    /// With an access token the URL must be `https`, unless it points at a
    /// loopback host such as `127.0.0.1` or `localhost`.
    #[must_use]
    pub fn api_base_url(mut self, url: ApiBaseUrl) -> Self {
        self.api_base_url = Some(url);
        self
    }

    /// Builds the [`BitlyConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingCredentials`] if neither an access token
    /// nor a login / API key pair was set, or
    /// [`ConfigError::InsecureBaseUrl`] if an access token would be sent to a
    /// non-loopback `http` base URL.
    pub fn build(self) -> Result<BitlyConfig, ConfigError> {
        let credentials = match (self.access_token, self.legacy) {
            (Some(token), _) => Credentials::Token(token),
            (None, Some((login, api_key))) => Credentials::Legacy { login, api_key },
            (None, None) => return Err(ConfigError::MissingCredentials),
        };

        if let Some(url) = &self.api_base_url {
            if credentials.is_token() && url.scheme() == "http" && !url.is_loopback() {
                return Err(ConfigError::InsecureBaseUrl {
                    url: url.to_string(),
                });
            }
        }

        Ok(BitlyConfig {
            credentials,
            secret: self.secret,
            preferred_domain: self
                .preferred_domain
                .unwrap_or_else(|| DEFAULT_PREFERRED_DOMAIN.to_string()),
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
            user_agent_prefix: self.user_agent_prefix,
            api_base_url: self.api_base_url,
        })
    }
}
