//! Generative-text backend
//!
//! The [`TextGenerator`] trait is the seam between the pipelines and the
//! OpenAI-compatible HTTP API, so tests can script model replies.

mod client;
mod error;
mod types;

pub use client::OpenAIClient;
pub use error::LlmError;
pub use types::{ChatMessage, ChatRole, GenerationParams};

use async_trait::async_trait;

/// Text generation backend
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Run a chat completion and return the first choice's content
    async fn chat(
        &self,
        messages: Vec<ChatMessage>,
        params: GenerationParams,
    ) -> Result<String, LlmError>;

    /// Run a legacy text completion and return the first choice's text
    async fn complete(&self, prompt: String, params: GenerationParams)
    -> Result<String, LlmError>;
}
