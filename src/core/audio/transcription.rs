//! Lossy transcription adapter

use super::types::{AudioUpload, MAX_FILE_SIZE, supported_audio_formats};
use super::{SpeechToText, TranscriptionError};
use crate::utils::truncate_string;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Converts an upload into a transcript, or `None` on any failure
#[derive(Clone)]
pub struct Transcriber {
    backend: Arc<dyn SpeechToText>,
}

impl Transcriber {
    pub fn new(backend: Arc<dyn SpeechToText>) -> Self {
        Self { backend }
    }

    /// Transcribe `upload`.
    ///
    /// Errors are logged and swallowed. An empty transcript is also `None`.
    pub async fn transcribe(&self, upload: AudioUpload) -> Option<String> {
        match self.try_transcribe(&upload).await {
            Ok(text) => {
                let text = text.trim();
                if text.is_empty() {
                    info!(filename = %upload.filename, "Transcription returned no speech");
                    None
                } else {
                    debug!(transcript = %truncate_string(text, 80), "Transcribed audio");
                    Some(text.to_string())
                }
            }
            Err(e) => {
                warn!(filename = %upload.filename, error = %e, "Transcription failed");
                None
            }
        }
    }

    async fn try_transcribe(&self, upload: &AudioUpload) -> Result<String, TranscriptionError> {
        if upload.is_empty() {
            return Err(TranscriptionError::Rejected("empty audio upload".to_string()));
        }
        if upload.len() > MAX_FILE_SIZE {
            return Err(TranscriptionError::Rejected(format!(
                "audio file too large ({} bytes, max {})",
                upload.len(),
                MAX_FILE_SIZE
            )));
        }

        let extension = upload.extension();
        if !supported_audio_formats().contains(&extension.as_str()) {
            return Err(TranscriptionError::Rejected(format!(
                "unsupported audio format: {}",
                extension
            )));
        }

        let file = tempfile::Builder::new()
            .prefix("tuneline-audio-")
            .suffix(&format!(".{}", extension))
            .tempfile()?;
        tokio::fs::write(file.path(), &upload.bytes).await?;

        let result = self
            .backend
            .transcribe_file(file.path().to_path_buf(), upload.backend_filename())
            .await;

        if let Err(e) = file.close() {
            warn!(error = %e, "Failed to remove temporary audio file");
        }

        result
    }
}
