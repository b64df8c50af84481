//! Server startup

use crate::error::ServerError;
use crate::routes::router;
use crate::state::AppState;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Bind address configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host to bind
    pub host: String,
    /// Port to listen on
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

impl ServerConfig {
    /// Create a configuration for the given host and port.
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// The socket address string.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Serve the work until the process is terminated.
pub async fn serve(config: ServerConfig, state: AppState) -> Result<(), ServerError> {
    let app = router(Arc::new(state));
    let addr = config.addr();
    info!("starting display server on {addr}");
    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

/// Blocking entry point for synchronous callers (the CLI): builds a runtime,
/// installs a tracing subscriber if none is set, and runs [`serve`].
pub fn serve_blocking(config: ServerConfig, state: AppState) -> Result<(), ServerError> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .try_init();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| ServerError::Runtime(e.to_string()))?;
    runtime.block_on(serve(config, state))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_binds_loopback() {
        let config = ServerConfig::default();
        assert_eq!(config.addr(), "127.0.0.1:8080");
    }

    #[test]
    fn addr_joins_host_and_port() {
        let config = ServerConfig::new("0.0.0.0", 9000);
        assert_eq!(config.addr(), "0.0.0.0:9000");
    }
}
