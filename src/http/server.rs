//! HTTP server startup logic.

use std::net::SocketAddr;
use std::time::Duration;

use axum::Router;
use axum_server::Handle;

use crate::config::{AppConfig, ConfigError};

use super::shutdown;

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid server configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),
}

/// Start the HTTP server based on configuration.
///
/// Installs the signal handlers for graceful shutdown and blocks until the
/// server has stopped.
pub async fn start_server(app: Router, config: &AppConfig) -> Result<(), ServerError> {
    let addr = config.http.socket_addr()?;
    let handle = Handle::new();

    shutdown::setup_shutdown_handler(
        handle.clone(),
        Duration::from_secs(config.http.shutdown_grace_seconds),
    );

    serve(app, addr, handle).await
}

/// Serve `app` on `addr` until `handle` requests shutdown.
///
/// Binding to port 0 picks an ephemeral port; the actual address is available
/// from [`Handle::listening`] once the listener is up.
pub async fn serve(app: Router, addr: SocketAddr, handle: Handle) -> Result<(), ServerError> {
    tracing::info!(%addr, "Starting HTTP server");

    axum_server::bind(addr)
        .handle(handle)
        .serve(app.into_make_service())
        .await?;

    tracing::info!("HTTP server stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_invalid_address_is_config_error() {
        let mut config = AppConfig::default();
        config.http.host = "not a host".to_string();

        let err = start_server(Router::new(), &config).await.unwrap_err();
        assert!(matches!(err, ServerError::Config(ConfigError::Validation(_))));
    }

    #[tokio::test]
    async fn test_serve_reports_bound_address_and_stops() {
        let handle = Handle::new();
        let server = tokio::spawn(serve(
            Router::new(),
            "127.0.0.1:0".parse().unwrap(),
            handle.clone(),
        ));

        let addr = handle.listening().await.expect("server failed to bind");
        assert_ne!(addr.port(), 0);

        handle.shutdown();
        server.await.unwrap().unwrap();
    }
}
