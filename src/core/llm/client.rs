//! OpenAI-compatible chat and completion client

use super::{ChatMessage, GenerationParams, LlmError, TextGenerator};
use crate::config::OpenAIConfig;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

/// Client for the `/chat/completions` and `/completions` endpoints
#[derive(Debug, Clone)]
pub struct OpenAIClient {
    http: reqwest::Client,
    config: OpenAIConfig,
}

#[derive(Serialize)]
struct ChatCompletionBody<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    #[serde(flatten)]
    params: &'a GenerationParams,
}

#[derive(Serialize)]
struct CompletionBody<'a> {
    model: &'a str,
    prompt: &'a str,
    #[serde(flatten)]
    params: &'a GenerationParams,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct CompletionResponse {
    choices: Vec<CompletionChoice>,
}

#[derive(Deserialize)]
struct CompletionChoice {
    text: String,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Deserialize)]
struct ApiErrorDetail {
    message: String,
}

impl OpenAIClient {
    /// Create a client whose every request is bounded by `config.timeout`
    pub fn new(config: OpenAIConfig) -> Result<Self, LlmError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()
            .map_err(|e| LlmError::Network(e.to_string()))?;

        Ok(Self { http, config })
    }

    async fn post_json<B: Serialize>(&self, endpoint: &str, body: &B) -> Result<String, LlmError> {
        let url = format!("{}/{}", self.config.api_base(), endpoint);
        debug!("POST {}", url);

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ApiErrorBody>(&text)
                .map(|body| body.error.message)
                .unwrap_or(text);
            warn!(status = status.as_u16(), "{} request failed", endpoint);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(text)
    }
}

#[async_trait]
impl TextGenerator for OpenAIClient {
    async fn chat(
        &self,
        messages: Vec<ChatMessage>,
        params: GenerationParams,
    ) -> Result<String, LlmError> {
        let body = ChatCompletionBody {
            model: &self.config.chat_model,
            messages: &messages,
            params: &params,
        };
        let text = self.post_json("chat/completions", &body).await?;

        let response: ChatCompletionResponse =
            serde_json::from_str(&text).map_err(|e| LlmError::ResponseParsing(e.to_string()))?;

        response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content.unwrap_or_default())
            .ok_or(LlmError::EmptyResponse)
    }

    async fn complete(
        &self,
        prompt: String,
        params: GenerationParams,
    ) -> Result<String, LlmError> {
        let body = CompletionBody {
            model: &self.config.completion_model,
            prompt: &prompt,
            params: &params,
        };
        let text = self.post_json("completions", &body).await?;

        let response: CompletionResponse =
            serde_json::from_str(&text).map_err(|e| LlmError::ResponseParsing(e.to_string()))?;

        response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.text)
            .ok_or(LlmError::EmptyResponse)
    }
}
