//! Server configuration assembled from the command line and environment.

use crate::cli::Cli;

/// Database settings. Only their presence is ever reported outward.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DatabaseSettings {
    pub url: Option<String>,
    pub name: Option<String>,
}

impl DatabaseSettings {
    pub fn new(url: Option<String>, name: Option<String>) -> Self {
        Self {
            url: non_empty(url),
            name: non_empty(name),
        }
    }

    pub fn url_is_set(&self) -> bool {
        self.url.is_some()
    }

    pub fn name_is_set(&self) -> bool {
        self.name.is_some()
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub database: DatabaseSettings,
}

impl ServerConfig {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            host: cli.host.clone(),
            port: cli.port,
            database: DatabaseSettings::new(cli.database_url.clone(), cli.database_name.clone()),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
