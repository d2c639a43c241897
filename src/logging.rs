//! Nebula Trips Logging System
//!
//! Structured logging on top of `tracing`. Output goes to stdout by default,
//! or to a file through `tracing-appender` when one is configured.

use std::io;
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer, Registry,
};

/// Logging configuration options
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Minimum log level to output
    pub level: Level,
    /// Enable colored output
    pub color: bool,
    /// Show timestamps
    pub show_timestamps: bool,
    /// Show target/module name
    pub show_target: bool,
    /// Enable JSON format for machine parsing
    pub json_format: bool,
    /// Output to file instead of stdout
    pub file_output: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self::for_mode(ApplicationMode::Server)
    }
}

/// Application modes with different logging requirements
#[derive(Debug, Clone, Copy)]
pub enum ApplicationMode {
    /// Long-running API server
    Server,
    /// Test mode - maximum detail for testing
    Test,
}

impl LoggingConfig {
    pub fn for_mode(mode: ApplicationMode) -> Self {
        match mode {
            ApplicationMode::Server => Self {
                level: Level::INFO,
                color: false,
                show_timestamps: true,
                show_target: true,
                json_format: false,
                file_output: None,
            },
            ApplicationMode::Test => Self {
                level: Level::DEBUG,
                color: false,
                show_timestamps: true,
                show_target: true,
                json_format: false,
                file_output: None,
            },
        }
    }

    /// Create config from CLI arguments. `verbose` is the number of `-v`
    /// flags: one for DEBUG, two or more for TRACE. It wins over `quiet`.
    pub fn from_args(quiet: bool, verbose: u8, json: bool) -> Self {
        let level = match verbose {
            0 if quiet => Level::ERROR,
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        };

        Self {
            level,
            color: !quiet && !json && io::stdout().is_terminal(),
            show_timestamps: true,
            show_target: verbose >= 2,
            json_format: json,
            file_output: None,
        }
    }

    /// Default filter directives when `RUST_LOG` is not set
    pub fn filter_directives(&self) -> String {
        format!("nebula_trips={level},tower_http={level}", level = self.level)
    }
}

/// Initialize the global subscriber. Fails if called twice.
pub fn init_logging(config: LoggingConfig) -> io::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.filter_directives()));

    let registry = Registry::default().with(env_filter);

    let result = if let Some(log_file) = &config.file_output {
        let directory = log_file
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| std::path::Path::new("."));
        let file_name = log_file.file_name().ok_or_else(|| {
            io::Error::new(io::ErrorKind::InvalidInput, "Invalid log file name")
        })?;
        std::fs::create_dir_all(directory)?;

        let file_appender = tracing_appender::rolling::never(directory, file_name);

        if config.json_format {
            fmt::layer()
                .json()
                .with_span_events(FmtSpan::CLOSE)
                .with_writer(file_appender)
                .with_subscriber(registry)
                .try_init()
        } else {
            fmt::layer()
                .with_target(config.show_target)
                .with_ansi(false)
                .with_timer(fmt::time::ChronoUtc::rfc_3339())
                .with_writer(file_appender)
                .with_subscriber(registry)
                .try_init()
        }
    } else if config.json_format {
        fmt::layer()
            .json()
            .with_span_events(FmtSpan::CLOSE)
            .with_writer(io::stdout)
            .with_subscriber(registry)
            .try_init()
    } else {
        let fmt_layer = fmt::layer()
            .with_target(config.show_target)
            .with_level(true)
            .with_ansi(config.color)
            .with_writer(io::stdout);

        if config.show_timestamps {
            fmt_layer
                .with_timer(fmt::time::ChronoUtc::rfc_3339())
                .with_subscriber(registry)
                .try_init()
        } else {
            fmt_layer.without_time().with_subscriber(registry).try_init()
        }
    };

    result.map_err(|e| io::Error::new(io::ErrorKind::AlreadyExists, e.to_string()))
}

/// Utility macro for structured error logging
#[macro_export]
macro_rules! log_error {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Operation failed"
        );
    };
}
