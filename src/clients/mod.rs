//! Request dispatch for the bitly API.
//!
//! This module provides the layer every endpoint call goes through:
//! parameter encoding, authentication, optional signing, transport, and
//! response classification.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: The dispatcher that runs the request pipeline
//! - [`Params`] / [`ParamValue`]: Request arguments and their query-string codec
//! - [`Transport`]: The injected capability that sends one GET request
//! - [`ReqwestTransport`]: The default transport (redirects disabled)
//! - [`HttpRequest`] / [`RawResponse`]: What crosses the transport boundary
//! - [`ApiResponse`]: A classified successful response
//! - [`ApiError`]: The single error type for every failed call
//!
//! # Example
//!
//! ```rust,ignore
//! use bitly_api::clients::{HttpClient, Params};
//! use bitly_api::{ApiKey, BitlyConfig, Login};
//!
//! let config = BitlyConfig::builder()
//!     .login_api_key(Login::new("bitlyapidemo")?, ApiKey::new("R_key")?)
//!     .build()?;
//! let client = HttpClient::new(config)?;
//!
//! let response = client.call("v3/lookup", Params::new().with("url", "http://example.com/")).await?;
//! ```
//!
//! # Retry Behavior
//!
//! There is none. Each call makes exactly one request and any failure is
//! returned to the caller.

mod errors;
mod http_client;
mod http_request;
mod http_response;
mod params;
mod transport;

pub use errors::{
    ApiError, TransportError, INTERNAL_ERROR_CODE, INVALID_BARE_DOMAIN, INVALID_LIMIT,
    INVALID_TZ_OFFSET, INVALID_UNITS, MISSING_ARG_DOMAIN, MISSING_ARG_EDIT, MISSING_ARG_LINK,
    MISSING_ARG_QUERY, MISSING_ARG_SHORTURL, UNEXPECTED_RESPONSE, UNKNOWN_ERROR,
};
pub use http_client::{HttpClient, DEFAULT_FORMAT, SDK_VERSION};
pub use http_request::HttpRequest;
pub use http_response::{classify, ApiResponse, RawResponse, STATUS_OK};
pub use params::{ParamValue, Params};
pub use transport::{ReqwestTransport, Transport};
