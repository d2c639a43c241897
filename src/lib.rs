pub mod api;
pub mod auth;
pub mod cli;
pub mod config;
pub mod db;
pub mod deals;
pub mod error;
pub mod health;
pub mod logging;
pub mod password;

#[cfg(test)]
pub mod test_utils;
