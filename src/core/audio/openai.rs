//! OpenAI Whisper transcription backend

use super::types::mime_for_extension;
use super::{SpeechToText, TranscriptionError};
use crate::config::OpenAIConfig;
use async_trait::async_trait;
use reqwest::multipart;
use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;

/// `POST {api_base}/audio/transcriptions` with `response_format=text`
#[derive(Debug, Clone)]
pub struct OpenAIWhisper {
    http: reqwest::Client,
    api_base: String,
    api_key: String,
    model: String,
}

impl OpenAIWhisper {
    pub fn new(config: &OpenAIConfig) -> Result<Self, TranscriptionError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self {
            http,
            api_base: config.api_base().to_string(),
            api_key: config.api_key.clone(),
            model: config.transcription_model.clone(),
        })
    }
}

#[async_trait]
impl SpeechToText for OpenAIWhisper {
    async fn transcribe_file(
        &self,
        path: PathBuf,
        filename: String,
    ) -> Result<String, TranscriptionError> {
        let bytes = tokio::fs::read(&path).await?;
        let extension = filename.rsplit('.').next().unwrap_or_default().to_string();

        let file_part = multipart::Part::bytes(bytes)
            .file_name(filename)
            .mime_str(mime_for_extension(&extension))
            .map_err(|e| TranscriptionError::Rejected(format!("Invalid MIME type: {}", e)))?;

        let form = multipart::Form::new()
            .part("file", file_part)
            .text("model", self.model.clone())
            .text("response_format", "text");

        let url = format!("{}/audio/transcriptions", self.api_base);
        debug!("Submitting audio to {}", url);

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(TranscriptionError::Api {
                status: status.as_u16(),
                body,
            });
        }

        Ok(body)
    }
}
