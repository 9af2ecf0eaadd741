//! Session store configuration

use serde::{Deserialize, Serialize};

/// Session store configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SessionsConfig {
    /// YAML file mapping session ids to Spotify credentials
    #[serde(default)]
    pub path: Option<String>,
}
