use axum::{
    routing::{get, post},
    Router,
};

use super::handlers;
use super::server::AppState;
use super::websocket;

/// Create the router with every endpoint of the service
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::root))
        // Diagnostics
        .route("/test", get(handlers::test_database))
        // Auth
        .route("/auth/register", post(handlers::register))
        .route("/auth/google", get(handlers::google_demo))
        // Realtime
        .route("/realtime/deals", get(websocket::handle_deals_websocket))
}
