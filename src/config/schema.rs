//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the service.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the article API service.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Document store configuration.
    pub database: DatabaseConfig,

    /// Front-end bundle configuration.
    pub static_assets: StaticAssetsConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8000").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8000".to_string(),
        }
    }
}

/// Which store backend to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// A MongoDB server reached over the network.
    #[default]
    Mongodb,

    /// A process-local map. For tests and local development.
    Memory,
}

/// Document store configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Store backend selection.
    pub backend: StoreBackend,

    /// Connection string (e.g., "mongodb://localhost:27017").
    pub url: String,

    /// Database name.
    pub name: String,

    /// Collection holding article documents.
    pub collection: String,

    /// Connection establishment and server selection timeout in seconds.
    pub connect_timeout_secs: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::Mongodb,
            url: "mongodb://localhost:27017".to_string(),
            name: "my-blog".to_string(),
            collection: "articles".to_string(),
            connect_timeout_secs: 5,
        }
    }
}

/// Front-end bundle configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct StaticAssetsConfig {
    /// Directory containing the built front-end bundle.
    pub dir: String,

    /// Entry file served for unmatched paths (client-side routing).
    pub index: String,
}

impl Default for StaticAssetsConfig {
    fn default() -> Self {
        Self {
            dir: "build".to_string(),
            index: "index.html".to_string(),
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}
