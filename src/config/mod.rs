//! Configuration management for the service
//!
//! This module handles loading, environment overrides and validation of the
//! service configuration.

pub mod models;

pub use models::*;

use crate::utils::error::{Result, ServiceError};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Main configuration struct for the service
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Service configuration
    pub service: ServiceConfig,
    /// File the configuration was read from, `None` when defaults were used
    source: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config = Self::parse_file(path.as_ref()).await?;
        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load the file if it exists, apply environment overrides, then validate
    ///
    /// Nothing is logged here, tracing is configured from the result. See
    /// [`Config::log_summary`].
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let mut config = if tokio::fs::try_exists(path).await.unwrap_or(false) {
            Self::parse_file(path).await?
        } else {
            Self::default()
        };

        config.apply_overrides(|key| std::env::var(key).ok().filter(|v| !v.is_empty()))?;
        config.validate()?;
        Ok(config)
    }

    async fn parse_file(path: &Path) -> Result<Self> {
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ServiceError::Config(format!("Failed to read config file: {}", e)))?;

        let service: ServiceConfig = serde_yaml::from_str(&content)
            .map_err(|e| ServiceError::Config(format!("Failed to parse config: {}", e)))?;

        Ok(Self {
            service,
            source: Some(path.to_path_buf()),
        })
    }

    /// File the configuration came from
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Apply environment-style overrides through `lookup`
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let service = &mut self.service;

        if let Some(host) = lookup("SERVER_HOST") {
            service.server.host = host;
        }
        if let Some(port) = lookup("SERVER_PORT") {
            service.server.port = port
                .parse()
                .map_err(|e| ServiceError::Config(format!("Invalid SERVER_PORT: {}", e)))?;
        }
        if let Some(level) = lookup("LOG_LEVEL") {
            service.logging.level = level;
        }

        if let Some(api_key) = lookup("OPENAI_API_KEY") {
            service.openai.api_key = api_key;
        }
        if let Some(api_base) = lookup("OPENAI_API_BASE") {
            service.openai.api_base = api_base;
        }

        if let Some(client_id) = lookup("CLIENT_ID") {
            service.spotify.client_id = client_id;
        }
        if let Some(client_secret) = lookup("CLIENT_SECRET") {
            service.spotify.client_secret = client_secret;
        }
        if let Some(token_url) = lookup("TOKEN_URL") {
            service.spotify.token_url = token_url;
        }
        if let Some(endpoint) = lookup("ENDPOINTS") {
            service.spotify.top_artists_url = endpoint;
        }

        if let Some(base_url) = lookup("BASE_URL") {
            service.commands.base_url = base_url;
        }

        Ok(())
    }

    /// Get server configuration
    pub fn server(&self) -> &ServerConfig {
        &self.service.server
    }

    /// Get logging configuration
    pub fn logging(&self) -> &LoggingConfig {
        &self.service.logging
    }

    /// Get OpenAI configuration
    pub fn openai(&self) -> &OpenAIConfig {
        &self.service.openai
    }

    /// Get Spotify configuration
    pub fn spotify(&self) -> &SpotifyConfig {
        &self.service.spotify
    }

    /// Get voice command configuration
    pub fn commands(&self) -> &CommandsConfig {
        &self.service.commands
    }

    /// Get session store configuration
    pub fn sessions(&self) -> &SessionsConfig {
        &self.service.sessions
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.service
            .server
            .validate()
            .map_err(|e| ServiceError::Config(format!("Server config error: {}", e)))?;

        self.service
            .openai
            .validate()
            .map_err(|e| ServiceError::Config(format!("OpenAI config error: {}", e)))?;

        self.service
            .spotify
            .validate()
            .map_err(|e| ServiceError::Config(format!("Spotify config error: {}", e)))?;

        self.service
            .commands
            .validate()
            .map_err(|e| ServiceError::Config(format!("Commands config error: {}", e)))?;

        Ok(())
    }

    /// Report where the configuration came from; call once tracing is installed
    pub fn log_summary(&self, requested: &Path) {
        match self.source() {
            Some(path) => info!("Loaded configuration file: {:?}", path),
            None => warn!(
                "Configuration file {:?} not found, using defaults and environment",
                requested
            ),
        }
        if self.service.openai.api_key.is_empty() {
            warn!("No OpenAI API key configured; transcription and generation calls will fail");
        }
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(&self.service)
            .map_err(|e| ServiceError::Config(format!("Failed to serialize config to YAML: {}", e)))
    }
}
