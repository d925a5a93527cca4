//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware, SPA fallback)
//!     → api handlers (extract path/body, call store)
//!     → error.rs (failures mapped to status + {message, error} body)
//!     → Send to client
//! ```

pub mod error;
pub mod server;

pub use error::ApiError;
pub use server::{AppState, HttpServer};
