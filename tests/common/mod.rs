//! Common test utilities for tuneline
//!
//! - Scripted text generation and speech-to-text backends
//! - Catalog, state and multipart fixtures

pub mod fixtures;
pub mod mocks;

pub use fixtures::{TestApp, multipart_body, multipart_content_type};
pub use mocks::{FakeSpeechToText, ScriptedGenerator};
