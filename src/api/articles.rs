//! Article API handlers.
//!
//! # Responsibilities
//! - GET  /api/articles/{name}             — fetch one article
//! - POST /api/articles/{name}/upvote      — atomic upvote increment
//! - POST /api/articles/{name}/add-comment — atomic comment append
//!
//! # Design Decisions
//! - Reads keep the original contract: an absent article is 200 with a
//!   `null` body, not a 404
//! - Updates return the post-image produced by the store's atomic
//!   operation; an absent article is a 404
//! - A missing or mistyped body field on add-comment is rejected with
//!   400 rather than persisted as null

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;

use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::model::{Article, Comment};

/// Request body for the add-comment endpoint. Both fields are required.
#[derive(Debug, Deserialize)]
pub struct AddCommentRequest {
    #[serde(rename = "userName")]
    pub user_name: String,

    pub text: String,
}

/// Fetch one article by name. Absent articles yield `null` with 200.
pub async fn get_article(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Option<Article>>, ApiError> {
    tracing::debug!(article = %name, "Fetching article");

    let article = state.store.find_article(&name).await?;
    Ok(Json(article))
}

/// Increment an article's upvote counter and return the updated document.
pub async fn upvote_article(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Article>, ApiError> {
    tracing::debug!(article = %name, "Upvoting article");

    match state.store.upvote_article(&name).await? {
        Some(article) => Ok(Json(article)),
        None => Err(ApiError::ArticleNotFound(name)),
    }
}

/// Append a comment to an article and return the updated document.
pub async fn add_comment(
    State(state): State<AppState>,
    Path(name): Path<String>,
    body: Result<Json<AddCommentRequest>, JsonRejection>,
) -> Result<Json<Article>, ApiError> {
    let Json(request) = body?;

    tracing::debug!(article = %name, user = %request.user_name, "Adding comment");

    let comment = Comment {
        user_name: request.user_name,
        text: request.text,
    };
    match state.store.add_comment(&name, comment).await? {
        Some(article) => Ok(Json(article)),
        None => Err(ApiError::ArticleNotFound(name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_requires_both_fields() {
        let full: Result<AddCommentRequest, _> =
            serde_json::from_value(serde_json::json!({"userName": "ada", "text": "nice"}));
        assert!(full.is_ok());

        let missing_text: Result<AddCommentRequest, _> =
            serde_json::from_value(serde_json::json!({"userName": "ada"}));
        assert!(missing_text.is_err());

        let wrong_case: Result<AddCommentRequest, _> =
            serde_json::from_value(serde_json::json!({"user_name": "ada", "text": "nice"}));
        assert!(wrong_case.is_err());
    }
}
