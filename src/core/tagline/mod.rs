//! Tagline generation from a user's Spotify listening history

mod error;
mod prompt;
mod service;

pub use error::TaglineError;
pub use prompt::{build_prompt, clean_tagline};
pub use service::TaglineService;
