//! Top-level service configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Main service configuration, one section per collaborator
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ServiceConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub openai: OpenAIConfig,
    #[serde(default)]
    pub spotify: SpotifyConfig,
    #[serde(default)]
    pub commands: CommandsConfig,
    #[serde(default)]
    pub sessions: SessionsConfig,
}
