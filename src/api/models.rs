use serde::{Deserialize, Serialize};

use crate::error::NebulaError;

/// Body of `GET /`
#[derive(Debug, Serialize, Deserialize)]
pub struct RootResponse {
    pub ok: bool,
    pub name: String,
}

/// Registration request body
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
}

/// API error body. Clients read `detail`; `code` is stable for matching.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiError {
    pub detail: String,
    pub code: String,
}

impl From<&NebulaError> for ApiError {
    fn from(err: &NebulaError) -> Self {
        let response = err.to_error_response();
        Self {
            detail: response.error,
            code: response.code,
        }
    }
}
