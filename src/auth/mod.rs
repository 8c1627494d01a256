//! Authentication for bitly API requests.
//!
//! A client authenticates in exactly one of two ways:
//!
//! - **Token mode**: an OAuth bearer token sent as `access_token` over HTTPS
//! - **Legacy mode**: a `login` / `apiKey` pair sent over plain HTTP
//!
//! Either mode may additionally sign requests with a shared secret, see
//! [`signature`].
//!
//! # Example
//!
//! ```rust
//! use bitly_api::auth::Credentials;
//! use bitly_api::clients::Params;
//! use bitly_api::{AccessToken, ApiKey, Login};
//!
//! let legacy = Credentials::legacy(
//!     Login::new("bitlyapidemo").unwrap(),
//!     ApiKey::new("R_0123456789").unwrap(),
//! );
//! assert!(!legacy.is_token());
//! assert_eq!(legacy.scheme(), "http");
//!
//! let token = Credentials::token(AccessToken::new("abc").unwrap());
//! let params = token.apply(Params::new());
//! assert!(params.contains_key("access_token"));
//! ```

pub mod signature;

use std::fmt;

use crate::clients::Params;
use crate::config::{AccessToken, ApiKey, Login};

/// The credentials a client authenticates with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Credentials {
    /// Legacy `login` + `apiKey` authentication over plain HTTP.
    Legacy {
        /// The account login.
        login: Login,
        /// The account API key.
        api_key: ApiKey,
    },
    /// OAuth bearer token authentication over HTTPS.
    Token(AccessToken),
}

impl Credentials {
    /// Creates legacy credentials.
    #[must_use]
    pub const fn legacy(login: Login, api_key: ApiKey) -> Self {
        Self::Legacy { login, api_key }
    }

    /// Creates token credentials.
    #[must_use]
    pub const fn token(token: AccessToken) -> Self {
        Self::Token(token)
    }

    /// Returns `true` for token credentials.
    #[must_use]
    pub const fn is_token(&self) -> bool {
        matches!(self, Self::Token(_))
    }

    /// Returns the URL scheme requests must use with these credentials.
    #[must_use]
    pub const fn scheme(&self) -> &'static str {
        match self {
            Self::Legacy { .. } => "http",
            Self::Token(_) => "https",
        }
    }

    /// Returns `params` with the authentication parameters added.
    #[must_use]
    pub fn apply(&self, params: Params) -> Params {
        match self {
            Self::Legacy { login, api_key } => params
                .with("login", login.as_ref())
                .with("apiKey", api_key.as_ref()),
            Self::Token(token) => params.with("access_token", token.as_ref()),
        }
    }
}

impl fmt::Display for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Legacy { login, .. } => write!(f, "api key ({})", login.as_ref()),
            Self::Token(_) => f.write_str("access token"),
        }
    }
}
