//! Session store
//!
//! Maps the session id a client sends as its bearer token to the Spotify
//! credentials of that user.

mod memory;
mod types;

pub use memory::InMemorySessionStore;
pub use types::{SessionError, SpotifyCredentials};

use async_trait::async_trait;

/// Lookup and write-back of per-session Spotify credentials
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Credentials for `session_id`, or `None` if the session is unknown
    async fn get(&self, session_id: &str) -> Result<Option<SpotifyCredentials>, SessionError>;

    /// Replace the stored access token after a refresh
    async fn update_access_token(
        &self,
        session_id: &str,
        access_token: &str,
    ) -> Result<(), SessionError>;
}
