//! In-memory article store.
//!
//! # Responsibilities
//! - Back the `ArticleStore` trait with a process-local map
//! - Mirror the MongoDB backend's semantics (atomic updates, `None`
//!   for absent articles) so tests and local development need no server
//!
//! # Design Decisions
//! - Each operation holds the lock for its whole read-modify-write,
//!   which gives the same no-lost-update guarantee as the `$inc`/`$push`
//!   commands on the real backend

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::model::{Article, Comment};

use super::{ArticleStore, StoreResult};

/// Article store holding documents in a process-local map.
#[derive(Default)]
pub struct MemoryStore {
    articles: RwLock<HashMap<String, Article>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with the given articles.
    pub fn seeded(articles: impl IntoIterator<Item = Article>) -> Self {
        let map = articles
            .into_iter()
            .map(|article| (article.name.clone(), article))
            .collect();
        Self {
            articles: RwLock::new(map),
        }
    }
}

#[async_trait]
impl ArticleStore for MemoryStore {
    async fn find_article(&self, name: &str) -> StoreResult<Option<Article>> {
        let articles = self.articles.read().unwrap_or_else(|e| e.into_inner());
        Ok(articles.get(name).cloned())
    }

    async fn upvote_article(&self, name: &str) -> StoreResult<Option<Article>> {
        let mut articles = self.articles.write().unwrap_or_else(|e| e.into_inner());
        Ok(articles.get_mut(name).map(|article| {
            article.upvotes += 1;
            article.clone()
        }))
    }

    async fn add_comment(&self, name: &str, comment: Comment) -> StoreResult<Option<Article>> {
        let mut articles = self.articles.write().unwrap_or_else(|e| e.into_inner());
        Ok(articles.get_mut(name).map(|article| {
            article.comments.push(comment);
            article.clone()
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed() -> MemoryStore {
        MemoryStore::seeded([Article {
            name: "learn-node".to_string(),
            upvotes: 0,
            comments: Vec::new(),
        }])
    }

    #[tokio::test]
    async fn test_find_returns_seeded_article() {
        let store = seed();
        let article = store.find_article("learn-node").await.unwrap().unwrap();
        assert_eq!(article.name, "learn-node");
        assert_eq!(article.upvotes, 0);
    }

    #[tokio::test]
    async fn test_find_missing_returns_none() {
        let store = seed();
        assert!(store.find_article("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_upvote_increments_by_one() {
        let store = seed();
        let updated = store.upvote_article("learn-node").await.unwrap().unwrap();
        assert_eq!(updated.upvotes, 1);

        // Repeated calls are not idempotent; state strictly grows.
        for expected in 2..=5 {
            let updated = store.upvote_article("learn-node").await.unwrap().unwrap();
            assert_eq!(updated.upvotes, expected);
        }
    }

    #[tokio::test]
    async fn test_upvote_missing_returns_none() {
        let store = seed();
        assert!(store.upvote_article("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_add_comment_appends_in_order() {
        let store = seed();
        let first = Comment {
            user_name: "ada".to_string(),
            text: "nice".to_string(),
        };
        let second = Comment {
            user_name: "grace".to_string(),
            text: "agreed".to_string(),
        };

        store.add_comment("learn-node", first.clone()).await.unwrap();
        let updated = store
            .add_comment("learn-node", second.clone())
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.comments, vec![first, second]);
    }

    #[tokio::test]
    async fn test_concurrent_upvotes_all_counted() {
        use std::sync::Arc;

        let store = Arc::new(seed());
        let mut tasks = Vec::new();
        for _ in 0..20 {
            let store = store.clone();
            tasks.push(tokio::spawn(async move {
                store.upvote_article("learn-node").await.unwrap();
            }));
        }
        for task in tasks {
            task.await.unwrap();
        }

        let article = store.find_article("learn-node").await.unwrap().unwrap();
        assert_eq!(article.upvotes, 20);
    }
}
