//! # bitly API Rust client
//!
//! A Rust client for the bitly v3 URL shortening API, providing type-safe
//! configuration, both authentication modes, optional request signing, and
//! a single error type for every failed call.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`BitlyConfig`] and [`BitlyConfigBuilder`]
//! - Validated newtypes for credentials, secrets and the API base URL
//! - Token (`access_token` over HTTPS) and legacy (`login` / `apiKey` over
//!   HTTP) authentication via [`auth::Credentials`]
//! - Legacy MD5 request signatures via [`auth::signature`]
//! - A query-string codec for scalar and list parameters via [`clients::Params`]
//! - A dispatcher that never follows redirects and classifies every outcome
//!   into success or [`ApiError`]
//! - Typed endpoint methods on [`BitlyClient`]
//!
//! ## Quick Start
//!
//! ```rust
//! use bitly_api::{AccessToken, BitlyConfig};
//!
//! let config = BitlyConfig::builder()
//!     .access_token(AccessToken::new("your-access-token").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert!(config.credentials().is_token());
//! assert_eq!(config.effective_base_url().as_ref(), "https://api-ssl.bit.ly");
//! ```
//!
//! ## Legacy Authentication
//!
//! ```rust
//! use bitly_api::{ApiKey, BitlyConfig, Login, SharedSecret};
//!
//! let config = BitlyConfig::builder()
//!     .login_api_key(
//!         Login::new("bitlyapidemo").unwrap(),
//!         ApiKey::new("R_0123456789").unwrap(),
//!     )
//!     .secret(SharedSecret::new("my-secret").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.effective_base_url().as_ref(), "http://api.bit.ly");
//! ```
//!
//! ## Making API Requests
//!
//! ```rust,ignore
//! use bitly_api::{BitlyClient, BitlyConfig, LinkQuery};
//!
//! let client = BitlyClient::new(BitlyConfig::from_env()?)?;
//!
//! let link = client.shorten("http://google.com/", Default::default()).await?;
//! let expanded = client.expand(&LinkQuery::new().hash(&link.hash)).await?;
//!
//! match client.pro_domain("nyti.ms").await {
//!     Ok(is_pro) => println!("pro domain: {is_pro}"),
//!     Err(e) => println!("{:?}: {}", e.code, e.message),
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: Newtypes and endpoint arguments are checked
//!   before any request is sent
//! - **Thread-safe**: All client types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime
//! - **Injectable transport**: Requests go through the [`clients::Transport`] trait

pub mod api;
pub mod auth;
pub mod clients;
pub mod config;
pub mod error;

// Re-export public types at crate root for convenience
pub use api::{
    BitlyClient, BundleOptions, FilterMode, LinkEdit, LinkHistoryOptions, LinkQuery,
    LinkSaveOptions, MetricsOptions, SearchOptions, ShortenOptions, ShortenedLink, TimeUnit,
};
pub use auth::Credentials;
pub use config::{
    AccessToken, ApiBaseUrl, ApiKey, BitlyConfig, BitlyConfigBuilder, Login, SharedSecret,
};
pub use error::ConfigError;

// Re-export dispatch types
pub use clients::{ApiError, ApiResponse, HttpClient, ParamValue, Params, Transport};
