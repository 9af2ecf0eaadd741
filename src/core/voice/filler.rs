//! Template filler
//!
//! Asks the model to substitute the `{placeholder}` tokens of a command
//! template from the transcript, then parses the reply as a strict
//! [`ApiDescriptor`]. The reply is data, never code.

use super::types::ApiDescriptor;
use crate::core::catalog::{CommandTemplate, is_supported_method, placeholders};
use crate::core::llm::{ChatMessage, GenerationParams, LlmError, TextGenerator};
use serde_json::error::Category;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

const MAX_REPLY_TOKENS: u32 = 512;

const SYSTEM_PROMPT: &str = "You fill API templates. Replace every {placeholder} in the \
template with the matching value from the user's request. Reply with only the filled JSON \
object with the keys url, method and payload. No explanation.";

/// Template filler errors
#[derive(Error, Debug)]
pub enum FillError {
    #[error("Template filling failed: {0}")]
    Backend(#[from] LlmError),

    #[error("Filled command does not match the descriptor schema: {0}")]
    Schema(String),
}

/// Result of filling a template
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FillOutcome {
    Filled(ApiDescriptor),
    /// The reply was not JSON at all
    Unparseable { raw: String },
}

/// Turns a template and a transcript into a concrete call
#[derive(Clone)]
pub struct TemplateFiller {
    generator: Arc<dyn TextGenerator>,
}

impl TemplateFiller {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    pub async fn fill(
        &self,
        text: &str,
        template: &CommandTemplate,
    ) -> Result<FillOutcome, FillError> {
        let messages = build_messages(text, template)?;
        let params = GenerationParams::default()
            .max_tokens(MAX_REPLY_TOKENS)
            .temperature(0.0);

        let reply = self.generator.chat(messages, params).await?;
        let outcome = parse_reply(&reply)?;

        if let FillOutcome::Unparseable { .. } = &outcome {
            warn!(command = %template.name, "Filled template is not valid JSON");
        } else {
            debug!(command = %template.name, "Template filled");
        }
        Ok(outcome)
    }
}

fn build_messages(text: &str, template: &CommandTemplate) -> Result<Vec<ChatMessage>, FillError> {
    let template_json = serde_json::to_string_pretty(&ApiDescriptor::from(template))
        .map_err(|e| FillError::Schema(e.to_string()))?;

    let prompt = format!(
        "Template:\n{}\n\nRequest: \"{}\"\n\nFilled JSON:",
        template_json, text
    );
    Ok(vec![ChatMessage::system(SYSTEM_PROMPT), ChatMessage::user(prompt)])
}

/// Remove a surrounding Markdown code fence, with or without a language tag
fn strip_code_fence(reply: &str) -> &str {
    let trimmed = reply.trim();
    let Some(inner) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let inner = inner.strip_suffix("```").unwrap_or(inner);
    // Drop the info string ("json") on the opening line.
    match inner.split_once('\n') {
        Some((first, rest)) if !first.trim_start().starts_with('{') => rest.trim(),
        _ => inner.trim(),
    }
}

pub(crate) fn parse_reply(reply: &str) -> Result<FillOutcome, FillError> {
    let body = strip_code_fence(reply);

    let descriptor: ApiDescriptor = match serde_json::from_str(body) {
        Ok(descriptor) => descriptor,
        Err(e) => {
            return match e.classify() {
                Category::Syntax | Category::Eof => Ok(FillOutcome::Unparseable {
                    raw: reply.to_string(),
                }),
                Category::Data | Category::Io => Err(FillError::Schema(e.to_string())),
            };
        }
    };

    validate(descriptor).map(FillOutcome::Filled)
}

fn validate(mut descriptor: ApiDescriptor) -> Result<ApiDescriptor, FillError> {
    if !is_supported_method(&descriptor.method) {
        return Err(FillError::Schema(format!(
            "unsupported method {}",
            descriptor.method
        )));
    }
    descriptor.method = descriptor.method.to_ascii_uppercase();

    if !placeholders(&descriptor.url).is_empty() {
        return Err(FillError::Schema(format!(
            "url still contains a placeholder: {}",
            descriptor.url
        )));
    }
    if let Some((key, _)) = descriptor
        .payload
        .iter()
        .find(|(_, value)| !placeholders(value).is_empty())
    {
        return Err(FillError::Schema(format!(
            "payload field {} still contains a placeholder",
            key
        )));
    }
    Ok(descriptor)
}
