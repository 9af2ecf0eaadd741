//! Server builder and run_server function

use crate::config::Config;
use crate::server::server::HttpServer;
use crate::utils::error::{Result, ServiceError};
use tracing::info;

/// Server builder for easier configuration
pub struct ServerBuilder {
    config: Option<Config>,
}

impl ServerBuilder {
    /// Create a new server builder
    pub fn new() -> Self {
        Self { config: None }
    }

    /// Set configuration
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Build the HTTP server
    pub async fn build(self) -> Result<HttpServer> {
        let config = self
            .config
            .ok_or_else(|| ServiceError::Config("Configuration is required".to_string()))?;

        HttpServer::new(&config).await
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the server from `config` and run it until shutdown
pub async fn run_server(config: Config) -> Result<()> {
    info!("Starting tuneline");

    let server = ServerBuilder::new().with_config(config).build().await?;
    let address = server.config().address();
    info!("Server starting at: http://{}", address);
    info!("API Endpoints:");
    info!("   GET  /test    - Liveness probe");
    info!("   GET  /health  - Health check");
    info!("   GET  /tagline - Tagline from Spotify top genres");
    info!("   POST /execute - Voice command");

    server.start().await
}
