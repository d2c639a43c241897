//! Email registration and the demo Google sign-in payload.

use serde::{Deserialize, Serialize};

use crate::db::models::{NewCredential, Provider};
use crate::db::DocumentStore;
use crate::error::{NebulaError, Result};
use crate::password;

const MAX_EMAIL_LEN: usize = 254;

/// Successful registration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    pub id: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoUser {
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoogleDemo {
    pub provider: String,
    pub status: String,
    pub user: DemoUser,
}

/// Static payload standing in for a Google sign-in. No OAuth happens.
pub fn google_demo() -> GoogleDemo {
    GoogleDemo {
        provider: "google".to_string(),
        status: "ok".to_string(),
        user: DemoUser {
            email: "demo@nebula.trips".to_string(),
        },
    }
}

/// Basic shape check for an email address.
pub fn validate_email(email: &str) -> Result<()> {
    let invalid = |reason: &str| Err(NebulaError::InvalidInput(format!("email {}", reason)));

    if email.is_empty() {
        return invalid("must not be empty");
    }
    if email.len() > MAX_EMAIL_LEN {
        return invalid("is too long");
    }
    if email.chars().any(char::is_whitespace) {
        return invalid("must not contain whitespace");
    }

    let Some((local, domain)) = email.split_once('@') else {
        return invalid("must contain '@'");
    };
    if local.is_empty() || domain.contains('@') {
        return invalid("must have exactly one '@' and a local part");
    }
    if !domain.contains('.') || domain.split('.').any(str::is_empty) {
        return invalid("must have a valid domain");
    }

    Ok(())
}

/// Register `email` with `password`.
///
/// Fails with [`NebulaError::DatabaseNotConfigured`] when there is no store and
/// with [`NebulaError::EmailAlreadyRegistered`] when the email exists. Only the
/// success path writes, and it writes exactly one record.
pub async fn register(
    store: Option<&dyn DocumentStore>,
    email: &str,
    password: &str,
) -> Result<Registration> {
    validate_email(email)?;

    let store = store.ok_or(NebulaError::DatabaseNotConfigured)?;

    if store.find_user_by_email(email).await?.is_some() {
        tracing::warn!(email = %email, "Registration rejected: email already registered");
        return Err(NebulaError::EmailAlreadyRegistered);
    }

    let password = password.to_string();
    let (password_salt, password_hash) =
        tokio::task::spawn_blocking(move || password::hash_password(&password, None))
            .await
            .map_err(|e| NebulaError::KeyDerivation(e.to_string()))??;

    let credential = NewCredential {
        email: email.to_string(),
        password_salt,
        password_hash,
        provider: Provider::Email,
    };
    let id = store.insert_user(&credential).await?;

    tracing::info!(id = %id, email = %email, "User registered");

    Ok(Registration {
        id,
        email: email.to_string(),
    })
}
