//! Inbound endpoint handlers.
//!
//! Each handler forwards its operation to the relay and returns the upstream
//! response verbatim. A transport failure on the outbound call maps to
//! 502 Bad Gateway; nothing else is interpreted at this layer.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;

use crate::http::server::AppState;

/// Body accepted by `POST /users`. Fields are forwarded unvalidated.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
}

/// `POST /users` → `POST {base}/api/users/create`.
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserRequest>,
) -> Response {
    match state
        .relay
        .create_user(&payload.name, &payload.email)
        .await
    {
        Ok(upstream) => upstream.into_response(),
        Err(e) => upstream_failure("create_user", e),
    }
}

/// `GET /users` → `GET {base}/api/users/`.
pub async fn list_users(State(state): State<AppState>) -> Response {
    match state.relay.list_users().await {
        Ok(upstream) => upstream.into_response(),
        Err(e) => upstream_failure("list_users", e),
    }
}

/// `DELETE /users/{id}` → `DELETE {base}/api/users/delete/{id}`.
///
/// The id is not checked for shape; whatever the caller sent goes upstream.
pub async fn delete_user(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.relay.delete_user(&id).await {
        Ok(upstream) => upstream.into_response(),
        Err(e) => upstream_failure("delete_user", e),
    }
}

/// Map a transport-level failure to the generic gateway error response.
/// The cause is logged, not leaked to the client.
fn upstream_failure(operation: &str, error: crate::relay::RelayError) -> Response {
    tracing::error!(operation = operation, error = %error, "Upstream request failed");
    (StatusCode::BAD_GATEWAY, "Upstream request failed").into_response()
}
