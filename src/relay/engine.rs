//! Relay engine: URL construction and operation forwarding.
//!
//! # Responsibilities
//! - Concatenate the configured base URL with fixed path templates
//! - Issue exactly one outbound request per operation
//! - Return the upstream response without inspecting it
//!
//! # Design Decisions
//! - Base URL is injected at construction, never read from ambient state
//! - No validation of name/email/id; values are forwarded as received
//! - Failures propagate as RelayError; callers decide how to surface them

use std::sync::Arc;

use axum::http::Method;
use serde_json::json;

use crate::relay::client::UpstreamClient;
use crate::relay::types::{RelayResult, UpstreamResponse};

/// Forwards user-management operations to the upstream API.
pub struct Relay {
    base_url: String,
    client: Arc<dyn UpstreamClient>,
}

impl Relay {
    /// Create a relay for the given upstream base URL.
    pub fn new(base_url: impl Into<String>, client: Arc<dyn UpstreamClient>) -> Self {
        Self {
            base_url: base_url.into(),
            client,
        }
    }

    /// Forward a create-user request: `POST {base}/api/users/create`.
    ///
    /// The JSON body contains exactly `name` and `email`, unvalidated.
    pub async fn create_user(&self, name: &str, email: &str) -> RelayResult<UpstreamResponse> {
        let url = format!("{}/api/users/create", self.base_url);
        let body = json!({ "name": name, "email": email });

        tracing::debug!(url = %url, "Forwarding create_user");
        self.client.execute(Method::POST, &url, Some(body)).await
    }

    /// Forward a list-users request: `GET {base}/api/users/`.
    pub async fn list_users(&self) -> RelayResult<UpstreamResponse> {
        let url = format!("{}/api/users/", self.base_url);

        tracing::debug!(url = %url, "Forwarding list_users");
        self.client.execute(Method::GET, &url, None).await
    }

    /// Forward a delete-user request: `DELETE {base}/api/users/delete/{id}`.
    ///
    /// The id is appended verbatim; non-numeric values go upstream as-is.
    pub async fn delete_user(&self, id: &str) -> RelayResult<UpstreamResponse> {
        let url = format!("{}/api/users/delete/{}", self.base_url, id);

        tracing::debug!(url = %url, "Forwarding delete_user");
        self.client.execute(Method::DELETE, &url, None).await
    }

    /// The upstream base URL this relay was constructed with.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
