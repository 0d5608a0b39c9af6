//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging via tracing; request IDs flow through tower-http
//! - Per-request spans come from TraceLayer in the HTTP server

pub mod logging;

pub use logging::init_logging;
