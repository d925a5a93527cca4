//! Article API endpoints.

pub mod articles;
