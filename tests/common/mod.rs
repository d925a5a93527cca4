//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::Arc;

use tempfile::TempDir;
use tokio::net::TcpListener;

use article_api::config::AppConfig;
use article_api::http::HttpServer;
use article_api::lifecycle::Shutdown;
use article_api::model::Article;
use article_api::store::memory::MemoryStore;

/// A running server instance backed by the in-memory store.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: reqwest::Client,
    shutdown: Shutdown,
    // Held so the bundle directory outlives the server.
    _static_dir: TempDir,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub fn stop(&self) {
        self.shutdown.trigger();
    }
}

/// Contents written to the test bundle's entry file.
pub const INDEX_HTML: &str = "<!doctype html><title>my-blog</title>";

/// Spawn the server on an ephemeral port, seeded with the given articles.
pub async fn spawn_app(articles: Vec<Article>) -> TestApp {
    let static_dir = tempfile::tempdir().unwrap();
    std::fs::write(static_dir.path().join("index.html"), INDEX_HTML).unwrap();
    std::fs::write(static_dir.path().join("app.js"), "console.log('hi')").unwrap();

    let mut config = AppConfig::default();
    config.static_assets.dir = static_dir.path().to_str().unwrap().to_string();

    let store = Arc::new(MemoryStore::seeded(articles));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config, store);
    let server_shutdown = shutdown.subscribe();

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    let client = reqwest::Client::builder()
        .no_proxy()
        .build()
        .unwrap();

    TestApp {
        addr,
        client,
        shutdown,
        _static_dir: static_dir,
    }
}

/// The seed article from the canonical scenario.
pub fn learn_node() -> Article {
    Article {
        name: "learn-node".to_string(),
        upvotes: 0,
        comments: Vec::new(),
    }
}
