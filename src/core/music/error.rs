//! Spotify client errors

use thiserror::Error;

/// Spotify client errors
#[derive(Error, Debug)]
pub enum MusicError {
    #[error("Token refresh rejected ({status}): {body}")]
    RefreshRejected { status: u16, body: String },

    #[error("Token response did not contain an access token")]
    MissingAccessToken,

    #[error("Top artists request failed ({status}): {body}")]
    TopArtists { status: u16, body: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Failed to parse response: {0}")]
    ResponseParsing(String),
}

impl From<reqwest::Error> for MusicError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            MusicError::Timeout(err.to_string())
        } else {
            MusicError::Network(err.to_string())
        }
    }
}
