pub mod models;
pub mod sqlite;

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

use crate::error::Result;
use models::{CredentialRecord, NewCredential};

pub use sqlite::SqliteStore;

/// Document store the handlers talk to.
///
/// Implementations are shared across concurrent requests and are expected to
/// provide their own consistency; callers never lock around them.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Look up a credential record by exact email.
    async fn find_user_by_email(&self, email: &str) -> Result<Option<CredentialRecord>>;

    /// Insert a credential record and return the id the store assigned.
    async fn insert_user(&self, credential: &NewCredential) -> Result<String>;

    /// Names of the collections currently present in the store.
    async fn list_collection_names(&self) -> Result<Vec<String>>;
}

/// Open a connection pool for a SQLite URL such as `sqlite://nebula.db`.
pub async fn create_pool(database_url: &str) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
        .busy_timeout(std::time::Duration::from_millis(5000));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    Ok(pool)
}

pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    // Email uniqueness is checked by the registration flow, not by an index
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS authuser (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            email TEXT NOT NULL,
            password_salt TEXT NOT NULL,
            password_hash TEXT NOT NULL,
            provider TEXT NOT NULL,
            created_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_authuser_email ON authuser(email)")
        .execute(pool)
        .await?;

    Ok(())
}
