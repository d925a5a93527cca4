//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (main.rs):
//!     Load config → Validate → Connect store → Bind listener → Serve
//!
//! Shutdown (shutdown.rs):
//!     Ctrl+C or explicit trigger → broadcast → server drains and exits
//! ```
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - The store connects before the listener binds, so traffic is only
//!   accepted once the backend is reachable

pub mod shutdown;

pub use shutdown::Shutdown;
