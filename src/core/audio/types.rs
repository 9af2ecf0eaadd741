//! Audio upload types

use std::fmt;

/// Maximum accepted upload size in bytes (25MB)
pub const MAX_FILE_SIZE: usize = 25 * 1024 * 1024;

/// Extension assumed when the upload's filename has none
const DEFAULT_EXTENSION: &str = "webm";

/// Container formats accepted by the transcription backend
pub fn supported_audio_formats() -> &'static [&'static str] {
    &[
        "mp3", "mp4", "mpeg", "mpga", "m4a", "wav", "webm", "ogg", "flac",
    ]
}

/// Raw audio received from the client
#[derive(Clone, PartialEq, Eq)]
pub struct AudioUpload {
    /// Filename reported by the client
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl AudioUpload {
    pub fn new(filename: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            bytes,
        }
    }

    /// Lower-cased extension of the client filename, `webm` if absent
    pub fn extension(&self) -> String {
        std::path::Path::new(&self.filename)
            .extension()
            .and_then(|ext| ext.to_str())
            .filter(|ext| !ext.is_empty())
            .map(|ext| ext.to_ascii_lowercase())
            .unwrap_or_else(|| DEFAULT_EXTENSION.to_string())
    }

    /// Sanitized name sent to the backend; keeps only the extension
    pub fn backend_filename(&self) -> String {
        format!("audio.{}", self.extension())
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl fmt::Debug for AudioUpload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AudioUpload")
            .field("filename", &self.filename)
            .field("bytes", &self.bytes.len())
            .finish()
    }
}

/// MIME type for a supported extension
pub(crate) fn mime_for_extension(extension: &str) -> &'static str {
    match extension {
        "mp3" | "mpeg" | "mpga" => "audio/mpeg",
        "mp4" | "m4a" => "audio/mp4",
        "wav" => "audio/wav",
        "ogg" => "audio/ogg",
        "flac" => "audio/flac",
        _ => "audio/webm",
    }
}
