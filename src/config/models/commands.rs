//! Voice command configuration

use super::default_true;
use serde::{Deserialize, Serialize};

/// What the pipeline does when the model's answer cannot be used
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum UnmatchedPolicy {
    /// Fall back to the first catalog entry and flag the result as defaulted
    #[default]
    DefaultCommand,
    /// End the request with a "command not recognized" result
    Reject,
}

/// Command catalog and dispatch configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandsConfig {
    /// JSON file holding the command templates
    #[serde(default = "default_catalog_path")]
    pub catalog_path: String,
    /// Downstream API root, substituted for `{base_url}` in templates
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Timeout of the downstream call in seconds
    #[serde(default = "default_dispatch_timeout")]
    pub dispatch_timeout: u64,
    #[serde(default)]
    pub unmatched: UnmatchedPolicy,
    /// Only dispatch to URLs on the same origin as `base_url`
    #[serde(default = "default_true")]
    pub restrict_to_base_url: bool,
}

impl Default for CommandsConfig {
    fn default() -> Self {
        Self {
            catalog_path: default_catalog_path(),
            base_url: default_base_url(),
            dispatch_timeout: default_dispatch_timeout(),
            unmatched: UnmatchedPolicy::default(),
            restrict_to_base_url: true,
        }
    }
}

impl CommandsConfig {
    /// Validate command configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.catalog_path.trim().is_empty() {
            return Err("Command catalog path cannot be empty".to_string());
        }
        if self.dispatch_timeout == 0 {
            return Err("Dispatch timeout cannot be 0".to_string());
        }
        if self.base_url.is_empty() {
            if self.restrict_to_base_url {
                return Err("restrict_to_base_url requires a base_url".to_string());
            }
        } else if url::Url::parse(&self.base_url).is_err() {
            return Err(format!("Invalid downstream base_url: {}", self.base_url));
        }
        Ok(())
    }
}

fn default_catalog_path() -> String {
    "config/commands.json".to_string()
}

fn default_base_url() -> String {
    "http://localhost:8000/api/".to_string()
}

fn default_dispatch_timeout() -> u64 {
    120
}
