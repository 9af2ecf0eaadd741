//! Core functionality for the service
//!
//! Business logic of the two flows, independent of the HTTP layer.

pub mod audio;
pub mod catalog;
pub mod llm;
pub mod music;
pub mod sessions;
pub mod tagline;
pub mod voice;
