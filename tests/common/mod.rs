//! Common utilities for integration tests
//!
//! Starts the real router on an ephemeral port so tests talk to it over TCP.

#![allow(dead_code)]

use nebula_trips::api::{create_router, AppState};
use nebula_trips::config::DatabaseSettings;
use nebula_trips::db::{DocumentStore, SqliteStore};
use std::net::SocketAddr;
use std::sync::Arc;
use tempfile::TempDir;

/// A running server and the temp directory backing its database
pub struct TestServer {
    pub addr: SocketAddr,
    pub _temp_dir: Option<TempDir>,
}

impl TestServer {
    pub fn http_url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub fn ws_url(&self, path: &str) -> String {
        format!("ws://{}{}", self.addr, path)
    }
}

/// Serve `state` on 127.0.0.1 with an OS-assigned port
pub async fn spawn_server(state: AppState) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Failed to read local addr");

    tokio::spawn(async move {
        axum::serve(listener, create_router(state))
            .await
            .expect("Test server failed");
    });

    addr
}

/// Server backed by a fresh SQLite database
pub async fn start_with_sqlite() -> TestServer {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let url = format!("sqlite://{}", temp_dir.path().join("nebula.db").display());
    let store = SqliteStore::connect(&url)
        .await
        .expect("Failed to open test database");

    let state = AppState::new(
        Some(Arc::new(store) as Arc<dyn DocumentStore>),
        DatabaseSettings::new(Some(url), Some("nebula".to_string())),
    );

    TestServer {
        addr: spawn_server(state).await,
        _temp_dir: Some(temp_dir),
    }
}

/// Server without any database
pub async fn start_without_store() -> TestServer {
    let state = AppState::new(None, DatabaseSettings::default());
    TestServer {
        addr: spawn_server(state).await,
        _temp_dir: None,
    }
}
