//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the article API handlers
//! - Wire up middleware (tracing, timeout, request ID)
//! - Serve the front-end bundle with an SPA index fallback
//! - Bind server to listener and run until shutdown

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::config::AppConfig;
use crate::store::ArticleStore;

/// Application state injected into handlers.
///
/// Built once at startup; holds the pooled store handle and the
/// validated configuration. No global state.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ArticleStore>,
    pub config: Arc<AppConfig>,
}

/// HTTP server for the article API.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration and store.
    pub fn new(config: AppConfig, store: Arc<dyn ArticleStore>) -> Self {
        let request_timeout = Duration::from_secs(config.timeouts.request_secs);
        let state = AppState {
            store,
            config: Arc::new(config),
        };

        let router = Self::build_router(state, request_timeout);
        Self { router }
    }

    /// Build the Axum router with API routes, SPA fallback, and middleware.
    fn build_router(state: AppState, request_timeout: Duration) -> Router {
        // Unmatched paths fall through to the bundle; unknown files get
        // the entry file so client-side routing can take over.
        let assets = &state.config.static_assets;
        let index = Path::new(&assets.dir).join(&assets.index);
        let spa = ServeDir::new(&assets.dir).fallback(ServeFile::new(index));

        Router::new()
            .route("/api/articles/{name}", get(api::articles::get_article))
            .route("/api/articles/{name}/upvote", post(api::articles::upvote_article))
            .route(
                "/api/articles/{name}/add-comment",
                post(api::articles::add_comment),
            )
            .with_state(state)
            .fallback_service(spa)
            .layer(TimeoutLayer::new(request_timeout))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections until the shutdown signal.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
