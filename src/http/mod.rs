//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! inbound connection
//!     → server.rs (axum setup, middleware, routing)
//!     → handlers.rs (extract operation parameters, call relay)
//!     → response.rs (upstream response passed through unchanged)
//!     → send to client
//! ```

pub mod handlers;
pub mod request;
pub mod response;
pub mod server;

pub use request::{MakeRequestUuid, X_REQUEST_ID};
pub use server::{AppState, HttpServer};
