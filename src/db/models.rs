use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Name of the collection holding credential records.
pub const AUTH_USER_COLLECTION: &str = "authuser";

/// How an account was registered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Email,
}

impl Provider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Email => "email",
        }
    }
}

/// Stored credential record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CredentialRecord {
    pub id: String,
    pub email: String,
    pub password_salt: String,
    pub password_hash: String,
    pub provider: String,
}

/// Credential record about to be inserted; the store assigns the id
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCredential {
    pub email: String,
    pub password_salt: String,
    pub password_hash: String,
    pub provider: Provider,
}
