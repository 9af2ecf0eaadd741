//! Type conversions for ServiceError

use super::types::ServiceError;
use crate::core::audio::TranscriptionError;
use crate::core::catalog::CatalogError;
use crate::core::llm::LlmError;
use crate::core::music::MusicError;
use crate::core::sessions::SessionError;
use crate::core::voice::{DispatchError, FillError, VoiceError};

impl From<CatalogError> for ServiceError {
    fn from(err: CatalogError) -> Self {
        ServiceError::Config(err.to_string())
    }
}

impl From<LlmError> for ServiceError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::Timeout(message) => ServiceError::Timeout(message),
            other => ServiceError::Upstream(other.to_string()),
        }
    }
}

impl From<TranscriptionError> for ServiceError {
    fn from(err: TranscriptionError) -> Self {
        match err {
            TranscriptionError::Timeout(message) => ServiceError::Timeout(message),
            TranscriptionError::Rejected(message) => ServiceError::Validation(message),
            TranscriptionError::Io(e) => ServiceError::Io(e),
            other => ServiceError::Upstream(other.to_string()),
        }
    }
}

impl From<FillError> for ServiceError {
    fn from(err: FillError) -> Self {
        match err {
            FillError::Backend(e) => e.into(),
            FillError::Schema(message) => {
                ServiceError::Upstream(format!("Filled command is invalid: {}", message))
            }
        }
    }
}

impl From<DispatchError> for ServiceError {
    fn from(err: DispatchError) -> Self {
        match err {
            DispatchError::Rejected(message) => ServiceError::Validation(message),
            DispatchError::Timeout(message) => ServiceError::Timeout(message),
            other => ServiceError::Upstream(other.to_string()),
        }
    }
}

impl From<VoiceError> for ServiceError {
    fn from(err: VoiceError) -> Self {
        match err {
            VoiceError::Classification(e) => e.into(),
            VoiceError::Filling(e) => e.into(),
        }
    }
}

impl From<MusicError> for ServiceError {
    fn from(err: MusicError) -> Self {
        match err {
            MusicError::Timeout(message) => ServiceError::Timeout(message),
            other => ServiceError::Upstream(other.to_string()),
        }
    }
}

impl From<SessionError> for ServiceError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::Storage(message) => ServiceError::Internal(message),
            SessionError::Seed(message) => ServiceError::Config(message),
        }
    }
}
