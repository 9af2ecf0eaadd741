//! Spotify HTTP client

use super::MusicError;
use crate::config::SpotifyConfig;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, error};

#[derive(Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
}

#[derive(Deserialize)]
struct TopArtistsResponse {
    items: Vec<Artist>,
}

#[derive(Deserialize)]
struct Artist {
    #[serde(default)]
    genres: Vec<String>,
}

/// Spotify accounts and Web API client
#[derive(Debug, Clone)]
pub struct SpotifyClient {
    http: reqwest::Client,
    config: SpotifyConfig,
}

impl SpotifyClient {
    pub fn new(config: SpotifyConfig) -> Result<Self, MusicError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()
            .map_err(|e| MusicError::Network(e.to_string()))?;

        Ok(Self { http, config })
    }

    /// Exchange a refresh token for a fresh access token
    pub async fn refresh_access_token(&self, refresh_token: &str) -> Result<String, MusicError> {
        let form = [
            ("grant_type", "refresh_token"),
            ("refresh_token", refresh_token),
            ("client_id", self.config.client_id.as_str()),
            ("client_secret", self.config.client_secret.as_str()),
            ("scope", self.config.scope.as_str()),
        ];

        let response = self
            .http
            .post(&self.config.token_url)
            .form(&form)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if status.as_u16() != 200 {
            error!(status = status.as_u16(), body = %body, "Spotify token refresh failed");
            return Err(MusicError::RefreshRejected {
                status: status.as_u16(),
                body,
            });
        }

        let token: TokenResponse =
            serde_json::from_str(&body).map_err(|e| MusicError::ResponseParsing(e.to_string()))?;

        match token.access_token {
            Some(access_token) if !access_token.is_empty() => {
                debug!("Refreshed Spotify access token");
                Ok(access_token)
            }
            _ => {
                error!("Spotify token response has no access token");
                Err(MusicError::MissingAccessToken)
            }
        }
    }

    /// Genres of the user's top artists, flattened in order with duplicates removed
    pub async fn top_genres(&self, access_token: &str) -> Result<Vec<String>, MusicError> {
        let response = self
            .http
            .get(&self.config.top_artists_url)
            .query(&[
                ("limit", self.config.limit.to_string()),
                ("time_range", self.config.time_range.clone()),
            ])
            .bearer_auth(access_token)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if status.as_u16() != 200 {
            error!(status = status.as_u16(), body = %body, "Spotify top artists request failed");
            return Err(MusicError::TopArtists {
                status: status.as_u16(),
                body,
            });
        }

        let artists: TopArtistsResponse =
            serde_json::from_str(&body).map_err(|e| MusicError::ResponseParsing(e.to_string()))?;

        let mut genres: Vec<String> = Vec::new();
        for genre in artists.items.into_iter().flat_map(|artist| artist.genres) {
            if !genres.contains(&genre) {
                genres.push(genre);
            }
        }

        debug!(count = genres.len(), "Collected top genres");
        Ok(genres)
    }
}
