//! Spotify Web API client
//!
//! Only the two calls the tagline flow needs: the refresh-token grant and the
//! current user's top artists.

mod client;
mod error;

pub use client::SpotifyClient;
pub use error::MusicError;
