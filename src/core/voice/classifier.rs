//! Intent classifier

use super::types::Classification;
use crate::core::catalog::Catalog;
use crate::core::llm::{ChatMessage, GenerationParams, LlmError, TextGenerator};
use std::sync::Arc;
use tracing::{debug, info};

/// Keeps the model from answering with prose
const MAX_REPLY_TOKENS: u32 = 9;

const SYSTEM_PROMPT: &str = "You map a user's request to one command from a list. \
Reply with only the id of the matching command. No explanation.";

/// Picks one catalog entry for a transcript
#[derive(Clone)]
pub struct IntentClassifier {
    generator: Arc<dyn TextGenerator>,
}

impl IntentClassifier {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Ask the model which command `text` refers to.
    ///
    /// Backend failures are returned as errors; a reply that is not an id in
    /// range is `Classification::Unmatched`.
    pub async fn classify(&self, text: &str, catalog: &Catalog) -> Result<Classification, LlmError> {
        let messages = build_messages(text, catalog);
        let params = GenerationParams::default()
            .max_tokens(MAX_REPLY_TOKENS)
            .temperature(0.0);

        let reply = self.generator.chat(messages, params).await?;
        let classification = parse_reply(&reply, catalog);

        match &classification {
            Classification::Matched(id) => debug!(id, "Classifier matched command"),
            Classification::Unmatched { raw } => {
                info!(reply = %raw, "Classifier reply is not a catalog id")
            }
        }
        Ok(classification)
    }
}

fn build_messages(text: &str, catalog: &Catalog) -> Vec<ChatMessage> {
    let mut prompt = format!("Categorize the request: \"{}\"\n\nCommands:\n", text);
    for command in catalog.iter() {
        prompt.push_str(&format!(
            "- id {}: {}. {}\n",
            command.id, command.name, command.description
        ));
    }
    prompt.push_str("\nAnswer with the id only.");

    vec![ChatMessage::system(SYSTEM_PROMPT), ChatMessage::user(prompt)]
}

/// Interpret the raw model reply against `catalog`
pub(crate) fn parse_reply(reply: &str, catalog: &Catalog) -> Classification {
    let cleaned = reply
        .trim()
        .trim_matches(|c: char| c == '"' || c == '\'' || c == '`')
        .trim_end_matches('.')
        .trim();

    match cleaned.parse::<usize>() {
        Ok(id) if catalog.get(id).is_some() => Classification::Matched(id),
        _ => Classification::Unmatched {
            raw: reply.to_string(),
        },
    }
}
