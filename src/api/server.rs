use anyhow::{Context, Result};
use axum::Router;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::{handlers, routes};
use crate::config::{DatabaseSettings, ServerConfig};
use crate::db::{DocumentStore, SqliteStore};

/// State shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// `None` when no database is configured or it could not be reached
    pub store: Option<Arc<dyn DocumentStore>>,
    pub database: DatabaseSettings,
}

impl AppState {
    pub fn new(store: Option<Arc<dyn DocumentStore>>, database: DatabaseSettings) -> Self {
        Self { store, database }
    }

    /// Connect the configured store. A missing URL or a failed connection
    /// leaves the service running without one.
    pub async fn connect(database: DatabaseSettings) -> Self {
        let store = match &database.url {
            Some(url) => match SqliteStore::connect(url).await {
                Ok(store) => {
                    tracing::info!("Database connected");
                    Some(Arc::new(store) as Arc<dyn DocumentStore>)
                },
                Err(e) => {
                    crate::log_error!(e, "database connection");
                    None
                },
            },
            None => {
                tracing::warn!("DATABASE_URL not set, running without a database");
                None
            },
        };

        Self::new(store, database)
    }
}

/// API server instance
pub struct ApiServer {
    config: ServerConfig,
}

impl ApiServer {
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    /// Run until Ctrl-C
    pub async fn run(self) -> Result<()> {
        let state = AppState::connect(self.config.database.clone()).await;
        let app = create_router(state);

        let addr = self.config.bind_addr();
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .with_context(|| format!("Failed to bind to {}", addr))?;

        tracing::info!("{} listening on {}", handlers::SERVICE_NAME, addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("Server error")?;

        tracing::info!("Server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

/// Create the Axum router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    routes::api_routes()
        .fallback(handlers::not_found)
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}
