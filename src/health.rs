//! Diagnostics report behind `GET /test`.
//!
//! The check never fails: store errors are folded into the report.

use serde::{Deserialize, Serialize};

use crate::config::DatabaseSettings;
use crate::db::DocumentStore;

/// Maximum number of collection names included in a report.
pub const MAX_COLLECTIONS: usize = 10;

/// Maximum number of characters of a store error echoed back.
pub const MAX_ERROR_CHARS: usize = 80;

const RUNNING: &str = "✅ Running";
const NOT_INITIALIZED: &str = "⚠️ Available but not initialized";
const CONNECTED_AND_WORKING: &str = "✅ Connected & Working";
const SET: &str = "✅ Set";
const NOT_SET: &str = "❌ Not Set";
const CONNECTED: &str = "Connected";
const NOT_CONNECTED: &str = "Not Connected";

/// Report returned by `GET /test`. The default is the report for a process
/// with no store handle and no database settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthReport {
    pub backend: String,
    pub database: String,
    pub database_url: String,
    pub database_name: String,
    pub connection_status: String,
    pub collections: Vec<String>,
}

impl Default for HealthReport {
    fn default() -> Self {
        Self {
            backend: RUNNING.to_string(),
            database: NOT_INITIALIZED.to_string(),
            database_url: NOT_SET.to_string(),
            database_name: NOT_SET.to_string(),
            connection_status: NOT_CONNECTED.to_string(),
            collections: Vec::new(),
        }
    }
}

fn presence(is_set: bool) -> String {
    let label = if is_set { SET } else { NOT_SET };
    label.to_string()
}

/// First `max_chars` characters of `message`, never splitting a character.
pub fn truncate_chars(message: &str, max_chars: usize) -> String {
    message.chars().take(max_chars).collect()
}

/// Build a report for the given store handle and settings.
pub async fn check_health(store: Option<&dyn DocumentStore>, settings: &DatabaseSettings) -> HealthReport {
    let mut report = HealthReport::default();
    report.database_url = presence(settings.url_is_set());
    report.database_name = presence(settings.name_is_set());

    let Some(store) = store else {
        return report;
    };

    match store.list_collection_names().await {
        Ok(mut collections) => {
            collections.truncate(MAX_COLLECTIONS);
            report.collections = collections;
            report.database = CONNECTED_AND_WORKING.to_string();
            report.connection_status = CONNECTED.to_string();
        },
        Err(e) => {
            tracing::warn!(error = %e, "Database health check failed");
            report.database = format!(
                "⚠️ Connected but Error: {}",
                truncate_chars(&e.to_string(), MAX_ERROR_CHARS)
            );
        },
    }

    report
}
