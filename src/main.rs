//! publishing-api: the service binary.
//!
//! This is the application entry point. It initializes tracing, loads
//! configuration from a TOML file, builds the router and starts the HTTP
//! server.

use clap::Parser;
use const_format::formatcp;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use publishing_api::build_http_mux;
use publishing_api::config::{
    AppConfig, LogFormat, DEFAULT_CONFIG_PATH, DEFAULT_LISTEN_ADDR, DEFAULT_LOG_FILTER,
};
use publishing_api::http::start_server;

/// publishing-api: publishing service with liveness health check
#[derive(Parser, Debug)]
#[command(
    name = "publishing-api",
    version,
    about,
    after_help = formatcp!(
        "Reads {} when --config is not given and listens on {} unless configured otherwise.",
        DEFAULT_CONFIG_PATH,
        DEFAULT_LISTEN_ADDR
    )
)]
struct Args {
    /// Path to configuration file (defaults apply if the default path is missing)
    #[arg(short, long)]
    config: Option<String>,

    /// Log level filter (e.g., "publishing_api=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // An explicit --config must exist; the default path is optional
    let (config_path, optional) = match args.config {
        Some(path) => (path, false),
        None => (DEFAULT_CONFIG_PATH.to_string(), true),
    };
    let config = AppConfig::load(&config_path, optional)?;

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    let registry =
        tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(&log_filter));
    match config.logging.format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
    }

    tracing::info!(
        config = %config_path,
        host = %config.http.host,
        port = config.http.port,
        "Loaded configuration"
    );

    let app = build_http_mux();
    start_server(app, &config).await?;

    Ok(())
}
