//! Configuration data models
//!
//! This module defines all configuration structures used throughout the service.

#![allow(missing_docs)]

pub mod commands;
pub mod logging;
pub mod openai;
pub mod server;
pub mod service;
pub mod sessions;
pub mod spotify;

pub use commands::*;
pub use logging::*;
pub use openai::*;
pub use server::*;
pub use service::*;
pub use sessions::*;
pub use spotify::*;

/// Default values for configuration
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    5000
}

/// Default timeout in seconds
pub fn default_timeout() -> u64 {
    30
}

/// Default maximum body size in bytes
pub fn default_max_body_size() -> usize {
    26 * 1024 * 1024 // audio uploads up to 25MB plus form overhead
}

pub(crate) fn default_true() -> bool {
    true
}
