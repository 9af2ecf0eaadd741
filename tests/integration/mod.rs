//! Integration tests for tuneline
//!
//! These tests drive the actix application end to end; only the external
//! HTTP services are replaced by `wiremock`.

pub mod config_tests;
pub mod error_handling_tests;
pub mod tagline_tests;
pub mod whisper_tests;
