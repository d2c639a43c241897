use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;

use super::models::{CredentialRecord, NewCredential};
use super::DocumentStore;
use crate::error::Result;

/// [`DocumentStore`] backed by a SQLite pool; each table is a collection.
#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Connect to `database_url` and bring the schema up to date.
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = super::create_pool(database_url).await?;
        super::run_migrations(&pool).await?;
        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl DocumentStore for SqliteStore {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<CredentialRecord>> {
        let record = sqlx::query_as::<_, CredentialRecord>(
            r#"
            SELECT CAST(id AS TEXT) AS id, email, password_salt, password_hash, provider
            FROM authuser
            WHERE email = ?
            LIMIT 1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }

    async fn insert_user(&self, credential: &NewCredential) -> Result<String> {
        let result = sqlx::query(
            r#"
            INSERT INTO authuser (email, password_salt, password_hash, provider, created_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&credential.email)
        .bind(&credential.password_salt)
        .bind(&credential.password_hash)
        .bind(credential.provider.as_str())
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid().to_string())
    }

    async fn list_collection_names(&self) -> Result<Vec<String>> {
        let names = sqlx::query_scalar::<_, String>(
            r#"
            SELECT name FROM sqlite_master
            WHERE type = 'table' AND name NOT LIKE 'sqlite_%'
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(names)
    }
}
