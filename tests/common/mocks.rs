//! Scripted backends
//!
//! The library's mockall mocks only exist in its own unit tests, so the
//! integration tests implement the backend traits by hand.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use tuneline::core::audio::{SpeechToText, TranscriptionError};
use tuneline::core::llm::{ChatMessage, GenerationParams, LlmError, TextGenerator};

/// Replays queued replies in order; an exhausted queue answers `EmptyResponse`
#[derive(Default)]
pub struct ScriptedGenerator {
    chat_replies: Mutex<VecDeque<Result<String, LlmError>>>,
    completions: Mutex<VecDeque<Result<String, LlmError>>>,
    chat_calls: AtomicUsize,
    completion_calls: AtomicUsize,
}

impl ScriptedGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_chat(self, reply: impl Into<String>) -> Self {
        self.chat_replies.lock().unwrap().push_back(Ok(reply.into()));
        self
    }

    pub fn with_chat_error(self, error: LlmError) -> Self {
        self.chat_replies.lock().unwrap().push_back(Err(error));
        self
    }

    pub fn with_completion(self, reply: impl Into<String>) -> Self {
        self.completions.lock().unwrap().push_back(Ok(reply.into()));
        self
    }

    pub fn chat_calls(&self) -> usize {
        self.chat_calls.load(Ordering::SeqCst)
    }

    pub fn completion_calls(&self) -> usize {
        self.completion_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn chat(
        &self,
        _messages: Vec<ChatMessage>,
        _params: GenerationParams,
    ) -> Result<String, LlmError> {
        self.chat_calls.fetch_add(1, Ordering::SeqCst);
        self.chat_replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(LlmError::EmptyResponse))
    }

    async fn complete(
        &self,
        _prompt: String,
        _params: GenerationParams,
    ) -> Result<String, LlmError> {
        self.completion_calls.fetch_add(1, Ordering::SeqCst);
        self.completions
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(LlmError::EmptyResponse))
    }
}

/// Speech-to-text backend with a fixed answer
pub enum FakeSpeechToText {
    Says(String),
    Fails { status: u16, body: String },
}

impl FakeSpeechToText {
    pub fn says(text: impl Into<String>) -> Self {
        FakeSpeechToText::Says(text.into())
    }

    pub fn corrupt_audio() -> Self {
        FakeSpeechToText::Fails {
            status: 400,
            body: "Audio file might be corrupted or unsupported".to_string(),
        }
    }
}

#[async_trait]
impl SpeechToText for FakeSpeechToText {
    async fn transcribe_file(
        &self,
        path: PathBuf,
        _filename: String,
    ) -> Result<String, TranscriptionError> {
        assert!(path.exists(), "upload must be on disk during transcription");
        match self {
            FakeSpeechToText::Says(text) => Ok(text.clone()),
            FakeSpeechToText::Fails { status, body } => Err(TranscriptionError::Api {
                status: *status,
                body: body.clone(),
            }),
        }
    }
}
