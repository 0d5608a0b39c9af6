//! Relay types and error definitions.

use axum::http::{HeaderMap, StatusCode};
use bytes::Bytes;
use thiserror::Error;

/// Response received from the upstream API.
///
/// Carried back to the caller without inspection: status, headers, and body
/// are relayed verbatim, including non-2xx statuses and non-JSON bodies.
#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

/// Errors that can occur while forwarding a request upstream.
///
/// Only transport-level failures are errors here. An upstream response with
/// an error status is still a successful relay operation.
#[derive(Debug, Error)]
pub enum RelayError {
    /// The outbound call could not be completed (connect refused, DNS
    /// failure, timeout).
    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),
}

/// Result type for relay operations.
pub type RelayResult<T> = Result<T, RelayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_response_is_opaque() {
        // Non-JSON bodies and error statuses are representable as-is.
        let response = UpstreamResponse {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            headers: HeaderMap::new(),
            body: Bytes::from_static(b"<html>oops</html>"),
        };
        assert_eq!(response.status.as_u16(), 500);
        assert_eq!(&response.body[..], b"<html>oops</html>");
    }
}
