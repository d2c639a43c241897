use axum::http::StatusCode;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NebulaError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Database not configured")]
    DatabaseNotConfigured,

    #[error("Email already registered")]
    EmailAlreadyRegistered,

    #[error("Key derivation failed: {0}")]
    KeyDerivation(String),
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl NebulaError {
    pub fn to_error_code(&self) -> &'static str {
        match self {
            NebulaError::DatabaseError(_) => "DATABASE_ERROR",
            NebulaError::InvalidInput(_) => "INVALID_INPUT",
            NebulaError::DatabaseNotConfigured => "DATABASE_NOT_CONFIGURED",
            NebulaError::EmailAlreadyRegistered => "EMAIL_ALREADY_REGISTERED",
            _ => "INTERNAL_ERROR",
        }
    }

    /// HTTP status the transport layer answers with for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            NebulaError::EmailAlreadyRegistered => StatusCode::BAD_REQUEST,
            NebulaError::InvalidInput(_) => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn to_error_response(&self) -> ErrorResponse {
        ErrorResponse {
            error: self.to_string(),
            code: self.to_error_code().to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, NebulaError>;
