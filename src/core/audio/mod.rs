//! Speech-to-text
//!
//! [`Transcriber`] is the lossy adapter used by the voice pipeline: it scopes
//! the upload to a temporary file, hands it to a [`SpeechToText`] backend and
//! turns every failure into `None`.

mod error;
mod openai;
mod transcription;
mod types;

pub use error::TranscriptionError;
pub use openai::OpenAIWhisper;
pub use transcription::Transcriber;
pub use types::{AudioUpload, MAX_FILE_SIZE, supported_audio_formats};

use async_trait::async_trait;
use std::path::PathBuf;

/// Speech-to-text backend working on a file on disk
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SpeechToText: Send + Sync {
    /// Transcribe the audio file at `path` to plain text.
    ///
    /// `filename` is the name reported to the backend; its extension tells the
    /// backend which container format to expect.
    async fn transcribe_file(
        &self,
        path: PathBuf,
        filename: String,
    ) -> Result<String, TranscriptionError>;
}
