//! MongoDB-backed article store.
//!
//! # Responsibilities
//! - Own the pooled `mongodb::Client` for the process lifetime
//! - Translate trait operations into single driver commands
//! - Fail fast at startup if the server is unreachable
//!
//! # Design Decisions
//! - One client, created at startup and shared through `AppState`; the
//!   driver pools connections internally on both success and error paths
//! - Upvote is a `$inc`, add-comment is a `$push`, both via
//!   `find_one_and_update` returning the post-image in one round trip

use std::time::Duration;

use async_trait::async_trait;
use mongodb::bson::doc;
use mongodb::options::{ClientOptions, ReturnDocument};
use mongodb::{Client, Collection};

use crate::config::schema::DatabaseConfig;
use crate::model::{Article, Comment};

use super::{ArticleStore, StoreResult};

/// Article store backed by a MongoDB collection.
pub struct MongoStore {
    articles: Collection<Article>,
}

impl MongoStore {
    /// Connect to the configured server and verify it responds to a ping.
    pub async fn connect(config: &DatabaseConfig) -> StoreResult<Self> {
        let mut options = ClientOptions::parse(&config.url).await?;
        options.connect_timeout = Some(Duration::from_secs(config.connect_timeout_secs));
        options.server_selection_timeout = Some(Duration::from_secs(config.connect_timeout_secs));

        let client = Client::with_options(options)?;
        let database = client.database(&config.name);

        // Fail fast: an unreachable store should abort startup, not
        // surface on the first request.
        database.run_command(doc! { "ping": 1 }).await?;

        tracing::info!(
            url = %config.url,
            database = %config.name,
            collection = %config.collection,
            "Connected to document store"
        );

        Ok(Self {
            articles: database.collection(&config.collection),
        })
    }
}

#[async_trait]
impl ArticleStore for MongoStore {
    async fn find_article(&self, name: &str) -> StoreResult<Option<Article>> {
        let article = self.articles.find_one(doc! { "name": name }).await?;
        Ok(article)
    }

    async fn upvote_article(&self, name: &str) -> StoreResult<Option<Article>> {
        let updated = self
            .articles
            .find_one_and_update(doc! { "name": name }, doc! { "$inc": { "upvotes": 1 } })
            .return_document(ReturnDocument::After)
            .await?;
        Ok(updated)
    }

    async fn add_comment(&self, name: &str, comment: Comment) -> StoreResult<Option<Article>> {
        let entry = mongodb::bson::to_bson(&comment)?;
        let updated = self
            .articles
            .find_one_and_update(doc! { "name": name }, doc! { "$push": { "comments": entry } })
            .return_document(ReturnDocument::After)
            .await?;
        Ok(updated)
    }
}
