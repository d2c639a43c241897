use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

use super::models::{ApiError, RegisterRequest, RootResponse};
use super::server::AppState;
use crate::auth::{self, GoogleDemo};
use crate::error::NebulaError;
use crate::health::{self, HealthReport};

pub const SERVICE_NAME: &str = "Nebula Trips API";

/// Render an error as `(status, {"detail", "code"})`
pub fn error_response(err: &NebulaError) -> Response {
    let status = err.status_code();
    if status.is_server_error() {
        crate::log_error!(err, "request failed");
    }
    (status, Json(ApiError::from(err))).into_response()
}

pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        ok: true,
        name: SERVICE_NAME.to_string(),
    })
}

/// Backend and database diagnostics. Always answers 200.
pub async fn test_database(State(state): State<AppState>) -> Json<HealthReport> {
    Json(health::check_health(state.store.as_deref(), &state.database).await)
}

/// Register a user with email and password.
///
/// Success is `201 Created`, not `200`; clients should accept any 2xx.
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Response {
    match auth::register(state.store.as_deref(), &req.email, &req.password).await {
        Ok(registration) => (StatusCode::CREATED, Json(registration)).into_response(),
        Err(e) => error_response(&e),
    }
}

pub async fn google_demo() -> Json<GoogleDemo> {
    Json(auth::google_demo())
}

/// 404 Not Found handler
pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ApiError {
            detail: "Not Found".to_string(),
            code: "NOT_FOUND".to_string(),
        }),
    )
}
