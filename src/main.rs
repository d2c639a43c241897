use clap::Parser;
use nebula_trips::api::ApiServer;
use nebula_trips::cli::Cli;
use nebula_trips::config::ServerConfig;
use nebula_trips::logging::LoggingConfig;

#[tokio::main]
async fn main() {
    // Parse CLI arguments first to get logging configuration
    let cli = Cli::parse();

    let mut log_config = LoggingConfig::from_args(cli.quiet, cli.verbose, cli.json);
    log_config.file_output = cli.log_file.clone();

    if let Err(e) = nebula_trips::logging::init_logging(log_config) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    let config = ServerConfig::from_cli(&cli);

    if let Err(e) = ApiServer::new(config).run().await {
        tracing::error!("{:#}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
