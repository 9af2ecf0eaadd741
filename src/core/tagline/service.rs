//! Tagline orchestration

use super::TaglineError;
use super::prompt::{build_prompt, clean_tagline};
use crate::core::llm::{GenerationParams, TextGenerator};
use crate::core::music::SpotifyClient;
use crate::core::sessions::SessionStore;
use std::sync::Arc;
use tracing::{debug, error, info};

/// Session → Spotify → completion
#[derive(Clone)]
pub struct TaglineService {
    sessions: Arc<dyn SessionStore>,
    spotify: SpotifyClient,
    generator: Arc<dyn TextGenerator>,
}

impl TaglineService {
    pub fn new(
        sessions: Arc<dyn SessionStore>,
        spotify: SpotifyClient,
        generator: Arc<dyn TextGenerator>,
    ) -> Self {
        Self {
            sessions,
            spotify,
            generator,
        }
    }

    fn completion_params() -> GenerationParams {
        GenerationParams::default()
            .temperature(0.0)
            .max_tokens(100)
            .top_p(1.0)
            .frequency_penalty(0.2)
            .presence_penalty(0.0)
    }

    /// Generate a tagline for the user behind `session_id`
    pub async fn generate(&self, session_id: &str) -> Result<String, TaglineError> {
        let credentials = self
            .sessions
            .get(session_id)
            .await?
            .ok_or(TaglineError::UnknownSession)?;

        let access_token = self
            .spotify
            .refresh_access_token(&credentials.refresh_token)
            .await
            .map_err(TaglineError::Refresh)?;
        self.sessions
            .update_access_token(session_id, &access_token)
            .await?;

        let genres = self
            .spotify
            .top_genres(&access_token)
            .await
            .map_err(TaglineError::TopGenres)?;
        debug!(genres = ?genres, "Building tagline prompt");

        let raw = self
            .generator
            .complete(build_prompt(&genres), Self::completion_params())
            .await
            .map_err(|e| {
                error!(error = %e, "Tagline completion failed");
                TaglineError::Generation(e)
            })?;

        let tagline = clean_tagline(&raw);
        if tagline.is_empty() {
            error!("Tagline completion was empty");
            return Err(TaglineError::EmptyTagline);
        }

        info!(genre_count = genres.len(), "Generated tagline");
        Ok(tagline)
    }
}
