use clap::Parser;
use std::path::PathBuf;

const LONG_ABOUT: &str = r#"
Nebula Trips API

Endpoints:
  GET  /                 service name
  GET  /test             backend and database diagnostics
  POST /auth/register    email + password registration
  GET  /auth/google      demo sign-in payload
  WS   /realtime/deals   a synthetic travel deal every 2 seconds

The database is optional. Without DATABASE_URL the service still starts;
registration then answers 500 and /test reports the store as unavailable.
"#;

#[derive(Parser, Clone, Debug)]
#[command(name = "nebula-trips")]
#[command(about = "Nebula Trips API - registration, diagnostics and realtime deals")]
#[command(long_about = LONG_ABOUT)]
#[command(version)]
pub struct Cli {
    /// Address to bind
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = 8000)]
    pub port: u16,

    /// Database connection string (e.g. sqlite://nebula.db)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Database name, reported by the diagnostics endpoint
    #[arg(long, env = "DATABASE_NAME")]
    pub database_name: Option<String>,

    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error output (-q)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output logs in JSON format
    #[arg(long)]
    pub json: bool,

    /// Write logs to this file instead of stdout
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
