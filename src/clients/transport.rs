//! The transport seam between the dispatcher and the network.
//!
//! [`Transport`] is the single capability the dispatcher needs: send one GET
//! and hand back the status and body. [`ReqwestTransport`] is the default
//! implementation. Tests and embedders can supply their own.

use async_trait::async_trait;
use reqwest::header::USER_AGENT;
use reqwest::redirect::Policy;
use std::fmt::Debug;

use crate::clients::errors::TransportError;
use crate::clients::http_request::HttpRequest;
use crate::clients::http_response::RawResponse;
use crate::error::ConfigError;

/// Sends a prepared request and returns the raw response.
///
/// Implementations must not follow redirects: a 3xx response is returned
/// as-is so the dispatcher can report it.
#[async_trait]
pub trait Transport: Debug + Send + Sync {
    /// Executes `request` and returns the status and body.
    async fn execute(&self, request: HttpRequest) -> Result<RawResponse, TransportError>;
}

/// [`Transport`] backed by `reqwest` with redirects disabled.
#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

// Verify ReqwestTransport is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ReqwestTransport>();
};

impl ReqwestTransport {
    /// Creates a transport with rustls and redirect following disabled.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Transport`] if the HTTP client cannot be built
    /// (for example when TLS initialization fails).
    pub fn new() -> Result<Self, ConfigError> {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .redirect(Policy::none())
            .build()
            .map_err(|e| ConfigError::Transport {
                reason: e.to_string(),
            })?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: HttpRequest) -> Result<RawResponse, TransportError> {
        let res = self
            .client
            .get(&request.url)
            .header(USER_AGENT, &request.user_agent)
            .timeout(request.timeout)
            .send()
            .await?;

        let status = res.status().as_u16();
        let body = res.text().await?;

        Ok(RawResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn request(server: &MockServer, path_and_query: &str) -> HttpRequest {
        HttpRequest::new(
            format!("{}/{path_and_query}", server.uri()),
            "test-agent/1.0",
            Duration::from_secs(5),
        )
    }

    #[tokio::test]
    async fn test_execute_returns_status_and_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v3/expand"))
            .and(query_param("hash", "abc"))
            .and(header("User-Agent", "test-agent/1.0"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{\"ok\":true}"))
            .expect(1)
            .mount(&server)
            .await;

        let transport = ReqwestTransport::new().unwrap();
        let response = transport
            .execute(request(&server, "v3/expand?hash=abc"))
            .await
            .unwrap();

        assert_eq!(response, RawResponse::new(200, "{\"ok\":true}"));
    }

    #[tokio::test]
    async fn test_redirects_are_not_followed() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v3/shorten"))
            .respond_with(
                ResponseTemplate::new(301)
                    .insert_header("Location", "/elsewhere")
                    .set_body_string("moved"),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/elsewhere"))
            .respond_with(ResponseTemplate::new(200).set_body_string("followed"))
            .expect(0)
            .mount(&server)
            .await;

        let transport = ReqwestTransport::new().unwrap();
        let response = transport
            .execute(request(&server, "v3/shorten"))
            .await
            .unwrap();

        assert_eq!(response.status, 301);
        assert!(response.is_redirect());
        assert_eq!(response.body, "moved");
    }

    #[tokio::test]
    async fn test_timeout_is_reported() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(500)))
            .mount(&server)
            .await;

        let transport = ReqwestTransport::new().unwrap();
        let mut req = request(&server, "v3/info");
        req.timeout = Duration::from_millis(50);

        let error = transport.execute(req).await.unwrap_err();
        assert!(matches!(error, TransportError::Timeout(_)));
    }

    #[tokio::test]
    async fn test_connection_failure_is_reported() {
        // Port 9 (discard) on localhost is expected to refuse connections
        let transport = ReqwestTransport::new().unwrap();
        let req = HttpRequest::new(
            "http://127.0.0.1:9/v3/info",
            "test-agent/1.0",
            Duration::from_secs(2),
        );

        assert!(transport.execute(req).await.is_err());
    }
}
