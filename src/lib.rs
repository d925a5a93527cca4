//! Article API Service
//!
//! A small HTTP backend over a document store: fetch an article by name,
//! increment its upvote count, append a comment, and serve the front-end
//! bundle with an SPA index fallback for everything else.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌──────────────────────────────────────────────┐
//!                    │               ARTICLE API SERVICE             │
//!                    │                                               │
//!   Client Request   │  ┌─────────┐    ┌──────────┐    ┌─────────┐  │
//!   ─────────────────┼─▶│  http   │───▶│   api    │───▶│  store  │──┼──▶ MongoDB
//!                    │  │ server  │    │ handlers │    │  trait  │  │   (pooled client)
//!                    │  └────┬────┘    └──────────┘    └─────────┘  │
//!                    │       │                                       │
//!                    │       └──▶ SPA fallback (static bundle)       │
//!                    │                                               │
//!                    │  ┌────────────────────────────────────────┐  │
//!                    │  │          Cross-Cutting Concerns          │  │
//!                    │  │  ┌────────┐ ┌─────────┐ ┌───────────┐  │  │
//!                    │  │  │ config │ │ tracing │ │ lifecycle │  │  │
//!                    │  │  └────────┘ └─────────┘ └───────────┘  │  │
//!                    │  └────────────────────────────────────────┘  │
//!                    └──────────────────────────────────────────────┘
//! ```

// Core subsystems
pub mod api;
pub mod config;
pub mod http;
pub mod model;
pub mod store;

// Cross-cutting concerns
pub mod lifecycle;

pub use config::AppConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
