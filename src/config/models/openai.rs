//! OpenAI-compatible backend configuration
//!
//! One account serves the chat, legacy completion and transcription endpoints.

use serde::{Deserialize, Serialize};

/// OpenAI-compatible API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAIConfig {
    /// API key sent as a bearer token
    #[serde(default)]
    pub api_key: String,
    /// Base URL, without trailing slash
    #[serde(default = "default_api_base")]
    pub api_base: String,
    /// Model used by the classifier and the template filler
    #[serde(default = "default_chat_model")]
    pub chat_model: String,
    /// Model used for taglines (legacy completions endpoint)
    #[serde(default = "default_completion_model")]
    pub completion_model: String,
    /// Speech-to-text model
    #[serde(default = "default_transcription_model")]
    pub transcription_model: String,
    /// Per-request timeout in seconds
    #[serde(default = "default_openai_timeout")]
    pub timeout: u64,
}

impl Default for OpenAIConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_base: default_api_base(),
            chat_model: default_chat_model(),
            completion_model: default_completion_model(),
            transcription_model: default_transcription_model(),
            timeout: default_openai_timeout(),
        }
    }
}

impl OpenAIConfig {
    /// Base URL with any trailing slash removed
    pub fn api_base(&self) -> &str {
        self.api_base.trim_end_matches('/')
    }

    /// Validate OpenAI configuration
    pub fn validate(&self) -> Result<(), String> {
        if url::Url::parse(&self.api_base).is_err() {
            return Err(format!("Invalid OpenAI api_base: {}", self.api_base));
        }
        if self.timeout == 0 {
            return Err("OpenAI timeout cannot be 0".to_string());
        }
        if self.chat_model.is_empty() || self.completion_model.is_empty() {
            return Err("OpenAI model names cannot be empty".to_string());
        }
        Ok(())
    }
}

fn default_api_base() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_chat_model() -> String {
    "gpt-3.5-turbo".to_string()
}

fn default_completion_model() -> String {
    "gpt-3.5-turbo-instruct".to_string()
}

fn default_transcription_model() -> String {
    "whisper-1".to_string()
}

fn default_openai_timeout() -> u64 {
    60
}
