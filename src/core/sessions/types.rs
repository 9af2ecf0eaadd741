//! Session types

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Session store errors
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Session storage error: {0}")]
    Storage(String),

    #[error("Failed to load session seed file: {0}")]
    Seed(String),
}

/// Spotify OAuth tokens of one user
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpotifyCredentials {
    #[serde(default)]
    pub access_token: String,
    pub refresh_token: String,
}

impl SpotifyCredentials {
    pub fn new(access_token: impl Into<String>, refresh_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token: refresh_token.into(),
        }
    }
}

impl fmt::Debug for SpotifyCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpotifyCredentials")
            .field("access_token", &"[REDACTED]")
            .field("refresh_token", &"[REDACTED]")
            .finish()
    }
}
