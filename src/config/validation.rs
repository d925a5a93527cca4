//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, addresses parseable)
//! - Check the store URL matches the selected backend
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: AppConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::fmt;
use std::net::SocketAddr;

use crate::config::schema::{AppConfig, StoreBackend};

/// A single semantic problem found in a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path of the offending field (e.g., "listener.bind_address").
    pub field: String,

    /// Human-readable description of the problem.
    pub message: String,
}

impl ValidationError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate a configuration, collecting every problem found.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::new(
            "listener.bind_address",
            format!("not a valid socket address: {}", config.listener.bind_address),
        ));
    }

    if config.database.backend == StoreBackend::Mongodb {
        let url = &config.database.url;
        if !url.starts_with("mongodb://") && !url.starts_with("mongodb+srv://") {
            errors.push(ValidationError::new(
                "database.url",
                format!("not a mongodb connection string: {url}"),
            ));
        }
        if config.database.connect_timeout_secs == 0 {
            errors.push(ValidationError::new(
                "database.connect_timeout_secs",
                "must be greater than zero",
            ));
        }
    }

    if config.database.name.is_empty() {
        errors.push(ValidationError::new("database.name", "must not be empty"));
    }
    if config.database.collection.is_empty() {
        errors.push(ValidationError::new(
            "database.collection",
            "must not be empty",
        ));
    }

    if config.static_assets.dir.is_empty() {
        errors.push(ValidationError::new("static_assets.dir", "must not be empty"));
    }
    if config.static_assets.index.is_empty() {
        errors.push(ValidationError::new(
            "static_assets.index",
            "must not be empty",
        ));
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::new(
            "timeouts.request_secs",
            "must be greater than zero",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
