//! Spotify configuration

use serde::{Deserialize, Serialize};

/// Spotify Web API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpotifyConfig {
    #[serde(default)]
    pub client_id: String,
    #[serde(default)]
    pub client_secret: String,
    /// Token endpoint used for the refresh grant
    #[serde(default = "default_token_url")]
    pub token_url: String,
    /// Top-artists endpoint of the current user
    #[serde(default = "default_top_artists_url")]
    pub top_artists_url: String,
    #[serde(default = "default_scope")]
    pub scope: String,
    /// Number of top artists to fetch
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default = "default_time_range")]
    pub time_range: String,
    /// Per-request timeout in seconds
    #[serde(default = "default_spotify_timeout")]
    pub timeout: u64,
}

impl Default for SpotifyConfig {
    fn default() -> Self {
        Self {
            client_id: String::new(),
            client_secret: String::new(),
            token_url: default_token_url(),
            top_artists_url: default_top_artists_url(),
            scope: default_scope(),
            limit: default_limit(),
            time_range: default_time_range(),
            timeout: default_spotify_timeout(),
        }
    }
}

impl SpotifyConfig {
    /// Validate Spotify configuration
    pub fn validate(&self) -> Result<(), String> {
        for (name, value) in [
            ("token_url", &self.token_url),
            ("top_artists_url", &self.top_artists_url),
        ] {
            if url::Url::parse(value).is_err() {
                return Err(format!("Invalid Spotify {}: {}", name, value));
            }
        }
        if self.limit == 0 || self.limit > 50 {
            return Err("Spotify limit must be between 1 and 50".to_string());
        }
        if self.timeout == 0 {
            return Err("Spotify timeout cannot be 0".to_string());
        }
        Ok(())
    }
}

fn default_token_url() -> String {
    "https://accounts.spotify.com/api/token".to_string()
}

fn default_top_artists_url() -> String {
    "https://api.spotify.com/v1/me/top/artists".to_string()
}

fn default_scope() -> String {
    "user-top-read".to_string()
}

fn default_limit() -> u32 {
    10
}

fn default_time_range() -> String {
    "short_term".to_string()
}

fn default_spotify_timeout() -> u64 {
    30
}
