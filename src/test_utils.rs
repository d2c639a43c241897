#[cfg(test)]
pub mod test_helpers {
    use crate::db::models::{CredentialRecord, NewCredential, AUTH_USER_COLLECTION};
    use crate::db::{DocumentStore, SqliteStore};
    use crate::error::{NebulaError, Result};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tempfile::TempDir;

    pub struct TestContext {
        pub store: SqliteStore,
        pub _temp_dir: TempDir,
    }

    impl TestContext {
        pub async fn new() -> Self {
            let temp_dir = TempDir::new().unwrap();
            let db_path = temp_dir.path().join("nebula.db");
            let url = format!("sqlite://{}", db_path.display());

            let store = SqliteStore::connect(&url).await.unwrap();

            Self {
                store,
                _temp_dir: temp_dir,
            }
        }

        pub fn store(&self) -> &SqliteStore {
            &self.store
        }

        pub fn handle(&self) -> Option<&dyn DocumentStore> {
            Some(&self.store as &dyn DocumentStore)
        }

        pub async fn user_count(&self) -> i64 {
            let query = format!("SELECT COUNT(*) FROM {}", AUTH_USER_COLLECTION);
            sqlx::query_scalar::<_, i64>(&query)
                .fetch_one(self.store.pool())
                .await
                .unwrap()
        }
    }

    /// Store whose every call fails, counting how often it was asked to write.
    #[derive(Default)]
    pub struct FailingStore {
        pub message: String,
        pub inserts: AtomicUsize,
    }

    impl FailingStore {
        pub fn with_message(message: impl Into<String>) -> Self {
            Self {
                message: message.into(),
                inserts: AtomicUsize::new(0),
            }
        }

        fn error(&self) -> NebulaError {
            NebulaError::IoError(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                self.message.clone(),
            ))
        }
    }

    #[async_trait]
    impl DocumentStore for FailingStore {
        async fn find_user_by_email(&self, _email: &str) -> Result<Option<CredentialRecord>> {
            Err(self.error())
        }

        async fn insert_user(&self, _credential: &NewCredential) -> Result<String> {
            self.inserts.fetch_add(1, Ordering::SeqCst);
            Err(self.error())
        }

        async fn list_collection_names(&self) -> Result<Vec<String>> {
            Err(self.error())
        }
    }

    /// Store that reports a fixed list of collections and holds no users.
    pub struct FixedCollectionsStore(pub Vec<String>);

    #[async_trait]
    impl DocumentStore for FixedCollectionsStore {
        async fn find_user_by_email(&self, _email: &str) -> Result<Option<CredentialRecord>> {
            Ok(None)
        }

        async fn insert_user(&self, _credential: &NewCredential) -> Result<String> {
            Ok("1".to_string())
        }

        async fn list_collection_names(&self) -> Result<Vec<String>> {
            Ok(self.0.clone())
        }
    }
}
