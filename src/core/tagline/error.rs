//! Tagline flow errors

use crate::core::llm::LlmError;
use crate::core::music::MusicError;
use crate::core::sessions::SessionError;
use actix_web::http::StatusCode;
use thiserror::Error;

/// Failures of `GET /tagline`
#[derive(Error, Debug)]
pub enum TaglineError {
    #[error("Unknown session")]
    UnknownSession,

    #[error("Session lookup failed: {0}")]
    Session(#[from] SessionError),

    #[error("Spotify token refresh failed: {0}")]
    Refresh(MusicError),

    #[error("Spotify top artists lookup failed: {0}")]
    TopGenres(MusicError),

    #[error("Tagline completion failed: {0}")]
    Generation(#[from] LlmError),

    #[error("Completion returned an empty tagline")]
    EmptyTagline,
}

impl TaglineError {
    pub fn status(&self) -> StatusCode {
        match self {
            TaglineError::UnknownSession => StatusCode::UNAUTHORIZED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message shown to the client; details stay in the logs
    pub fn user_message(&self) -> &'static str {
        match self {
            TaglineError::UnknownSession => "Unknown session",
            TaglineError::Session(_) => "Error retrieving session",
            TaglineError::Refresh(MusicError::MissingAccessToken) => {
                "Error retrieving Spotify access token"
            }
            TaglineError::Refresh(_) => "Error refreshing Spotify access token",
            TaglineError::TopGenres(_) => "Error retrieving top genres from Spotify",
            TaglineError::Generation(_) | TaglineError::EmptyTagline => "Error generating tagline",
        }
    }
}
