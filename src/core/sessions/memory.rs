//! In-memory session store

use super::{SessionError, SessionStore, SpotifyCredentials};
use async_trait::async_trait;
use dashmap::DashMap;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info};

/// Session store backed by a concurrent map, optionally seeded from YAML
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    sessions: DashMap<String, SpotifyCredentials>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a YAML mapping of session id to credentials
    pub fn from_yaml_str(yaml: &str) -> Result<Self, SessionError> {
        let seed: HashMap<String, SpotifyCredentials> =
            serde_yaml::from_str(yaml).map_err(|e| SessionError::Seed(e.to_string()))?;

        let store = Self::new();
        for (session_id, credentials) in seed {
            store.insert(session_id, credentials);
        }
        Ok(store)
    }

    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SessionError> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| SessionError::Seed(format!("{}: {}", path.display(), e)))?;

        let store = Self::from_yaml_str(&content)?;
        info!("Loaded {} sessions from {:?}", store.len(), path);
        Ok(store)
    }

    pub fn insert(&self, session_id: impl Into<String>, credentials: SpotifyCredentials) {
        self.sessions.insert(session_id.into(), credentials);
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn get(&self, session_id: &str) -> Result<Option<SpotifyCredentials>, SessionError> {
        Ok(self
            .sessions
            .get(session_id)
            .map(|entry| entry.value().clone()))
    }

    async fn update_access_token(
        &self,
        session_id: &str,
        access_token: &str,
    ) -> Result<(), SessionError> {
        match self.sessions.get_mut(session_id) {
            Some(mut entry) => {
                entry.access_token = access_token.to_string();
                debug!("Stored refreshed access token");
                Ok(())
            }
            None => Err(SessionError::Storage(
                "cannot update an unknown session".to_string(),
            )),
        }
    }
}
