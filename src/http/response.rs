//! Pass-through conversion of upstream responses.
//!
//! # Responsibilities
//! - Turn an UpstreamResponse into an axum response
//! - Relay status, headers, and body without interpretation
//!
//! # Design Decisions
//! - Hop-by-hop headers (connection, transfer-encoding) are stripped; the
//!   server frames the buffered body itself
//! - Everything else, including upstream error statuses, passes unchanged

use axum::body::Body;
use axum::http::header;
use axum::response::{IntoResponse, Response};

use crate::relay::UpstreamResponse;

impl IntoResponse for UpstreamResponse {
    fn into_response(self) -> Response {
        let mut response = Response::new(Body::from(self.body));
        *response.status_mut() = self.status;

        let headers = response.headers_mut();
        for (name, value) in self.headers.iter() {
            if name == header::CONNECTION || name == header::TRANSFER_ENCODING {
                continue;
            }
            headers.append(name.clone(), value.clone());
        }

        response
    }
}
