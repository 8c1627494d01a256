//! Configuration error types for the bitly API client.
//!
//! Call-time failures use [`ApiError`](crate::clients::ApiError). This module
//! only covers errors that can happen while building a [`BitlyConfig`](crate::BitlyConfig)
//! or a client, before any request is made.
//!
//! # Example
//!
//! ```rust
//! use bitly_api::{ApiKey, ConfigError};
//!
//! let result = ApiKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyApiKey)));
//! ```

use thiserror::Error;

/// Errors that can occur while configuring the client.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Login cannot be empty.
    #[error("Login cannot be empty. Please provide the bitly account login.")]
    EmptyLogin,

    /// API key cannot be empty.
    #[error("API key cannot be empty. Please provide a valid bitly API key.")]
    EmptyApiKey,

    /// Access token cannot be empty.
    #[error("Access token cannot be empty. Please provide a valid OAuth access token.")]
    EmptyAccessToken,

    /// Shared secret cannot be empty.
    #[error("Shared secret cannot be empty. Omit the secret to disable request signing.")]
    EmptySecret,

    /// Neither an access token nor a login/API key pair was supplied.
    #[error("Missing credentials. Provide an access token or a login and API key.")]
    MissingCredentials,

    /// A required environment variable is missing.
    #[error("Missing environment variable '{name}'.")]
    MissingEnvVar {
        /// Name of the missing variable.
        name: &'static str,
    },

    /// API base URL is invalid.
    #[error("Invalid API base URL '{url}'. Expected an http or https URL (e.g., 'https://api-ssl.bit.ly').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A plain HTTP base URL was combined with an access token.
    #[error("Refusing to send an access token over plain HTTP to '{url}'. Use an https URL.")]
    InsecureBaseUrl {
        /// The rejected URL.
        url: String,
    },

    /// The underlying HTTP client could not be created.
    #[error("Failed to create HTTP transport: {reason}")]
    Transport {
        /// The reason reported by the HTTP library.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_api_key_error_message() {
        let error = ConfigError::EmptyApiKey;
        let message = error.to_string();
        assert!(message.contains("API key cannot be empty"));
        assert!(message.contains("bitly API key"));
    }

    #[test]
    fn test_invalid_base_url_error_message() {
        let error = ConfigError::InvalidBaseUrl {
            url: "ftp://bad".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("ftp://bad"));
        assert!(message.contains("http or https"));
    }

    #[test]
    fn test_missing_env_var_error_message() {
        let error = ConfigError::MissingEnvVar {
            name: "BITLY_API_KEY",
        };
        assert!(error.to_string().contains("BITLY_API_KEY"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::MissingCredentials;
        let _: &dyn std::error::Error = &error;
    }
}
