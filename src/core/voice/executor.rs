//! Voice command pipeline

use super::classifier::IntentClassifier;
use super::dispatcher::{CommandDispatcher, DispatchError};
use super::filler::{FillError, FillOutcome, TemplateFiller};
use super::types::{ApiDescriptor, BearerToken, Classification, PipelineStage};
use crate::config::UnmatchedPolicy;
use crate::core::audio::{AudioUpload, Transcriber};
use crate::core::catalog::{Catalog, CommandTemplate};
use crate::core::llm::LlmError;
use crate::utils::truncate_string;
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Failures that end the pipeline before dispatch
#[derive(Error, Debug)]
pub enum VoiceError {
    #[error("Intent classification failed: {0}")]
    Classification(#[from] LlmError),

    #[error(transparent)]
    Filling(#[from] FillError),
}

/// How a voice command request ended
#[derive(Debug)]
pub enum ExecutionOutcome {
    /// Transcription produced nothing usable
    NoSpeech,
    /// The model could not map the request and the policy is `reject`
    Unrecognized { transcript: String },
    Succeeded {
        command: String,
        defaulted: bool,
        body: Value,
    },
    DispatchFailed {
        command: String,
        defaulted: bool,
        error: DispatchError,
    },
    /// The fill reply was unusable; the first template is returned unfilled
    /// and never sent downstream
    Defaulted {
        command: String,
        descriptor: ApiDescriptor,
    },
}

/// Runs `transcribe → classify → fill → dispatch` for one upload
#[derive(Clone)]
pub struct CommandExecutor {
    transcriber: Transcriber,
    classifier: IntentClassifier,
    filler: TemplateFiller,
    dispatcher: CommandDispatcher,
    catalog: Arc<Catalog>,
    policy: UnmatchedPolicy,
}

impl CommandExecutor {
    pub fn new(
        transcriber: Transcriber,
        classifier: IntentClassifier,
        filler: TemplateFiller,
        dispatcher: CommandDispatcher,
        catalog: Arc<Catalog>,
        policy: UnmatchedPolicy,
    ) -> Self {
        Self {
            transcriber,
            classifier,
            filler,
            dispatcher,
            catalog,
            policy,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub async fn execute(
        &self,
        upload: AudioUpload,
        token: BearerToken,
    ) -> Result<ExecutionOutcome, VoiceError> {
        info!(stage = %PipelineStage::Received, bytes = upload.len(), "Voice command received");

        let Some(transcript) = self.transcriber.transcribe(upload).await else {
            return Ok(ExecutionOutcome::NoSpeech);
        };
        info!(
            stage = %PipelineStage::Transcribed,
            transcript = %truncate_string(&transcript, 80)
        );

        let classification = self.classifier.classify(&transcript, &self.catalog).await?;
        let Some((template, defaulted)) = self.resolve(&classification) else {
            info!(stage = %PipelineStage::Classified, "Command not recognized");
            return Ok(ExecutionOutcome::Unrecognized { transcript });
        };
        info!(
            stage = %PipelineStage::Classified,
            command = %template.name,
            defaulted
        );

        let command = template.name.clone();
        let descriptor = match self.filler.fill(&transcript, template).await? {
            FillOutcome::Filled(descriptor) => descriptor,
            FillOutcome::Unparseable { .. } => match self.policy {
                UnmatchedPolicy::DefaultCommand => {
                    let fallback = self.catalog.first();
                    info!(
                        stage = %PipelineStage::Filled,
                        command = %fallback.name,
                        "Fill reply unusable, returning default command without dispatch"
                    );
                    return Ok(ExecutionOutcome::Defaulted {
                        command: fallback.name.clone(),
                        descriptor: ApiDescriptor::from(fallback),
                    });
                }
                UnmatchedPolicy::Reject => {
                    return Ok(ExecutionOutcome::Unrecognized { transcript });
                }
            },
        };
        info!(
            stage = %PipelineStage::Filled,
            method = %descriptor.method,
            url = %descriptor.url
        );

        let outcome = match self.dispatcher.dispatch(&descriptor, &token).await {
            Ok(body) => ExecutionOutcome::Succeeded {
                command,
                defaulted,
                body,
            },
            Err(error) => {
                warn!(stage = %PipelineStage::Dispatched, error = %error, "Command dispatch failed");
                ExecutionOutcome::DispatchFailed {
                    command,
                    defaulted,
                    error,
                }
            }
        };
        if let ExecutionOutcome::Succeeded { .. } = &outcome {
            info!(stage = %PipelineStage::Dispatched, "Command dispatched");
        }
        Ok(outcome)
    }

    /// Template to fill, and whether it came from the unmatched policy
    fn resolve(&self, classification: &Classification) -> Option<(&CommandTemplate, bool)> {
        if let Classification::Matched(id) = classification {
            if let Some(template) = self.catalog.get(*id) {
                return Some((template, false));
            }
        }
        match self.policy {
            UnmatchedPolicy::DefaultCommand => Some((self.catalog.first(), true)),
            UnmatchedPolicy::Reject => None,
        }
    }
}
