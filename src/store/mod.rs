//! Document store access subsystem.
//!
//! # Data Flow
//! ```text
//! AppConfig.database
//!     → connect() (backend selection, fail-fast ping)
//!     → Arc<dyn ArticleStore> (shared via AppState)
//!     → handlers call find/upvote/add_comment per request
//! ```
//!
//! # Design Decisions
//! - Handlers depend on the `ArticleStore` trait, not a driver type;
//!   the MongoDB and in-memory backends are interchangeable
//! - Updates are single atomic store operations returning the post-image,
//!   so concurrent upvotes or comments on one article cannot lose writes
//! - Absent articles surface as `Ok(None)`, never as an error; the HTTP
//!   layer decides which operations treat absence as 404

pub mod memory;
pub mod mongo;

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::config::schema::{DatabaseConfig, StoreBackend};
use crate::model::{Article, Comment};
use memory::MemoryStore;
use mongo::MongoStore;

/// Errors from the document store backend.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Driver-level failure: connectivity, server selection, command error.
    #[error("database error: {0}")]
    Backend(#[from] mongodb::error::Error),

    /// A document could not be converted to its BSON representation.
    #[error("serialization error: {0}")]
    Serialize(#[from] mongodb::bson::ser::Error),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Read and update operations over the articles collection.
#[async_trait]
pub trait ArticleStore: Send + Sync {
    /// Look up one article by exact name. `None` when no document matches.
    async fn find_article(&self, name: &str) -> StoreResult<Option<Article>>;

    /// Atomically increment an article's upvote counter by one and return
    /// the updated document. `None` when no document matches.
    async fn upvote_article(&self, name: &str) -> StoreResult<Option<Article>>;

    /// Atomically append one comment to an article and return the updated
    /// document. `None` when no document matches.
    async fn add_comment(&self, name: &str, comment: Comment) -> StoreResult<Option<Article>>;
}

/// Build the store backend selected by configuration.
///
/// The MongoDB backend holds a pooled client for the process lifetime;
/// per-request connection acquisition is the driver's responsibility.
pub async fn connect(config: &DatabaseConfig) -> StoreResult<Arc<dyn ArticleStore>> {
    match config.backend {
        StoreBackend::Mongodb => {
            let store = MongoStore::connect(config).await?;
            Ok(Arc::new(store))
        }
        StoreBackend::Memory => {
            tracing::warn!("using in-memory article store; data will not persist");
            Ok(Arc::new(MemoryStore::new()))
        }
    }
}
