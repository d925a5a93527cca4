//! Persisted document types.
//!
//! # Data Flow
//! ```text
//! store (BSON document)
//!     → serde deserialize → Article
//!     → handler returns Json<Article>
//!     → serde serialize → response body (camelCase comment fields)
//! ```
//!
//! # Design Decisions
//! - Wire format and stored format are identical; one set of serde types
//! - Comment fields use the `userName` key on the wire, matching the
//!   front-end bundle's expectations
//! - Articles are never created or deleted by this service, only read
//!   and updated in place

use serde::{Deserialize, Serialize};

/// An article document in the `articles` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    /// Unique lookup key. Never mutated after creation.
    pub name: String,

    /// Non-negative upvote counter.
    pub upvotes: i64,

    /// Comments in insertion order.
    #[serde(default)]
    pub comments: Vec<Comment>,
}

/// A comment embedded in an article. Not independently addressable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    #[serde(rename = "userName")]
    pub user_name: String,

    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comment_uses_camel_case_key() {
        let comment = Comment {
            user_name: "ada".to_string(),
            text: "nice".to_string(),
        };
        let json = serde_json::to_value(&comment).unwrap();
        assert_eq!(json["userName"], "ada");
        assert_eq!(json["text"], "nice");
        assert!(json.get("user_name").is_none());
    }

    #[test]
    fn test_article_round_trips() {
        let json = serde_json::json!({
            "name": "learn-node",
            "upvotes": 3,
            "comments": [{"userName": "ada", "text": "nice"}],
        });
        let article: Article = serde_json::from_value(json).unwrap();
        assert_eq!(article.name, "learn-node");
        assert_eq!(article.upvotes, 3);
        assert_eq!(article.comments[0].user_name, "ada");
    }

    #[test]
    fn test_missing_comments_defaults_to_empty() {
        let json = serde_json::json!({"name": "learn-node", "upvotes": 0});
        let article: Article = serde_json::from_value(json).unwrap();
        assert!(article.comments.is_empty());
    }
}
