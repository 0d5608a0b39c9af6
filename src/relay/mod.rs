//! Upstream relay subsystem.
//!
//! # Data Flow
//! ```text
//! inbound handler
//!     → engine.rs (build URL from base + path template)
//!     → client.rs (execute one HTTP request)
//!     → types.rs (UpstreamResponse carried back unchanged)
//! ```
//!
//! # Design Decisions
//! - One outbound call per operation; no retries, no caching
//! - Response status/headers/body are relayed verbatim, errors included
//! - The client is a trait object so tests can substitute a fake

pub mod client;
pub mod engine;
pub mod types;

pub use client::{HttpUpstreamClient, UpstreamClient};
pub use engine::Relay;
pub use types::{RelayError, RelayResult, UpstreamResponse};
