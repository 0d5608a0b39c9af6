//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (main.rs):
//!     Load config → Validate → Build client + relay → Bind → Serve
//!
//! Shutdown (shutdown.rs):
//!     Ctrl+C or broadcast trigger → Stop accepting → Drain → Exit
//! ```
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - The listener binds before the server runs (traffic only when ready)

pub mod shutdown;

pub use shutdown::Shutdown;
