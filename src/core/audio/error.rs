//! Transcription errors

use thiserror::Error;

/// Errors raised while transcribing an upload
#[derive(Error, Debug)]
pub enum TranscriptionError {
    #[error("Audio file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Transcription timed out: {0}")]
    Timeout(String),

    #[error("Transcription backend returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Audio rejected: {0}")]
    Rejected(String),
}

impl From<reqwest::Error> for TranscriptionError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TranscriptionError::Timeout(err.to_string())
        } else {
            TranscriptionError::Network(err.to_string())
        }
    }
}
