//! Outbound HTTP client abstraction.
//!
//! # Responsibilities
//! - Issue a single HTTP request against an absolute URL
//! - Apply the configured connect and total timeouts
//! - Surface transport failures as explicit errors
//!
//! # Design Decisions
//! - Trait seam so the relay engine is testable with a fake client
//! - Non-2xx upstream statuses are responses, not errors
//! - No retries; one call per invocation

use std::time::Duration;

use async_trait::async_trait;
use axum::http::Method;
use serde_json::Value;

use crate::config::TimeoutConfig;
use crate::relay::types::{RelayResult, UpstreamResponse};

/// Capability to execute one outbound HTTP request.
#[async_trait]
pub trait UpstreamClient: Send + Sync {
    /// Issue `method` against `url`, with an optional JSON body.
    async fn execute(
        &self,
        method: Method,
        url: &str,
        body: Option<Value>,
    ) -> RelayResult<UpstreamResponse>;
}

/// Production client backed by reqwest.
pub struct HttpUpstreamClient {
    client: reqwest::Client,
}

impl HttpUpstreamClient {
    /// Build a client with the configured timeouts.
    pub fn new(timeouts: &TimeoutConfig) -> RelayResult<Self> {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .timeout(Duration::from_secs(timeouts.upstream_secs))
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl UpstreamClient for HttpUpstreamClient {
    async fn execute(
        &self,
        method: Method,
        url: &str,
        body: Option<Value>,
    ) -> RelayResult<UpstreamResponse> {
        let mut request = self.client.request(method, url);
        if let Some(json) = body {
            request = request.json(&json);
        }

        // A malformed URL (e.g. empty base) fails here like any other
        // transport error; no special-casing.
        let response = request.send().await?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?;

        Ok(UpstreamResponse {
            status,
            headers,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_builds_with_default_timeouts() {
        let timeouts = TimeoutConfig::default();
        assert!(HttpUpstreamClient::new(&timeouts).is_ok());
    }

    #[tokio::test]
    async fn test_unreachable_upstream_is_an_error() {
        // Port 9 is discard; nothing listens there in test environments.
        let client = HttpUpstreamClient::new(&TimeoutConfig {
            connect_secs: 1,
            request_secs: 1,
            upstream_secs: 1,
        })
        .unwrap();

        let result = client
            .execute(Method::GET, "http://127.0.0.1:9/api/users/", None)
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_malformed_url_is_an_error() {
        // An empty base URL produces "/api/users/create"; reqwest rejects it
        // as a relative URL, which surfaces as a RelayError.
        let client = HttpUpstreamClient::new(&TimeoutConfig::default()).unwrap();
        let result = client.execute(Method::POST, "/api/users/create", None).await;
        assert!(result.is_err());
    }
}
