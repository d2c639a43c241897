//! Synthetic travel deals derived from wall-clock time.
//!
//! Every connected client computes the deal from the same clock, so clients
//! connected at the same moment see the same deal.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// (origin, destination) pairs, indexed by `timestamp mod 6`.
pub const ROUTES: [(&str, &str); 6] = [
    ("NYC", "Paris"),
    ("Tokyo", "Seoul"),
    ("Berlin", "Rome"),
    ("SF", "Honolulu"),
    ("Dubai", "Sydney"),
    ("LA", "Mexico City"),
];

pub const BASE_PRICE: i64 = 199;
pub const PRICE_SPREAD: i64 = 500;

/// Pause between two deals on one connection.
pub const STREAM_INTERVAL: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deal {
    pub route: String,
    pub destination: String,
    pub price: i64,
}

/// Frame sent to clients: `{"type":"deal","payload":{...}}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "lowercase")]
pub enum DealMessage {
    Deal(Deal),
}

impl DealMessage {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Index into [`ROUTES`] for a Unix timestamp in seconds.
pub fn route_index(timestamp: i64) -> usize {
    timestamp.rem_euclid(ROUTES.len() as i64) as usize
}

pub fn price_at(timestamp: i64) -> i64 {
    BASE_PRICE + timestamp.rem_euclid(PRICE_SPREAD)
}

/// Deal for the given Unix timestamp in seconds.
pub fn deal_at(timestamp: i64) -> Deal {
    let (origin, destination) = ROUTES[route_index(timestamp)];
    Deal {
        route: format!("{} → {}", origin, destination),
        destination: destination.to_string(),
        price: price_at(timestamp),
    }
}

/// Current Unix time in whole seconds (UTC).
pub fn wall_clock_seconds() -> i64 {
    chrono::Utc::now().timestamp()
}
