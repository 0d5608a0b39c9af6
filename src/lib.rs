//! HTTP relay for an upstream user-management API.
//!
//! Exposes three REST endpoints (create, list, delete user), forwards each to
//! a configured upstream API, and returns the upstream response verbatim.
//!
//! ```text
//!                    ┌─────────────────────────────────────────┐
//!                    │               USER RELAY                 │
//!   Client Request   │  ┌────────┐   ┌──────────┐   ┌────────┐ │
//!   ─────────────────┼─▶│  http  │──▶│  relay   │──▶│ client │─┼──▶ Upstream
//!                    │  │ server │   │  engine  │   │(reqwest│ │    users API
//!   Client Response  │  │        │◀──│(verbatim)│◀──│   )    │◀┼───
//!   ◀────────────────┼──└────────┘   └──────────┘   └────────┘ │
//!                    │  ┌────────────────────────────────────┐ │
//!                    │  │ config · lifecycle · observability │ │
//!                    │  └────────────────────────────────────┘ │
//!                    └─────────────────────────────────────────┘
//! ```

// Core subsystems
pub mod config;
pub mod http;
pub mod relay;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use config::RelayConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use relay::Relay;
