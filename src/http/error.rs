//! API error taxonomy and response mapping.
//!
//! # Responsibilities
//! - Distinguish not-found, invalid-body, and store failures
//! - Map each kind to a distinct status code
//! - Keep the `{message, error}` response body shape the front end expects
//!
//! # Design Decisions
//! - Every error is recovered at the request boundary; nothing here is
//!   fatal to the process
//! - Store failures keep the historical "Error connecting to db" message
//! - Raw error text is included in the body; there is no secret material
//!   in driver errors for this service

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::store::StoreError;

/// Errors surfaced by the article API handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// An update targeted an article that does not exist.
    #[error("no article named '{0}'")]
    ArticleNotFound(String),

    /// The request body was missing, malformed, or lacked required fields.
    #[error("{0}")]
    InvalidBody(#[from] JsonRejection),

    /// The document store failed (connectivity or command error).
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// JSON body returned for every error response.
#[derive(Serialize)]
struct ErrorBody {
    message: &'static str,
    error: String,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::ArticleNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> &'static str {
        match self {
            ApiError::ArticleNotFound(_) => "Article not found",
            ApiError::InvalidBody(_) => "Invalid request body",
            ApiError::Store(_) => "Error connecting to db",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, status = %status, "request rejected");
        }

        let body = ErrorBody {
            message: self.message(),
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let response = ApiError::ArticleNotFound("learn-node".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_store_failure_maps_to_500() {
        let driver_err = mongodb::error::Error::custom("connection refused");
        let response = ApiError::Store(StoreError::Backend(driver_err)).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_error_body_shape() {
        let response = ApiError::ArticleNotFound("learn-node".to_string()).into_response();
        let bytes = axum::body::to_bytes(response.into_body(), 1024).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["message"], "Article not found");
        assert!(body["error"].as_str().unwrap().contains("learn-node"));
    }
}
