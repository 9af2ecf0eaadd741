//! # tuneline
//!
//! Backend for a music social app with two flows:
//!
//! - **Taglines**: `GET /tagline` turns a user's Spotify top-artist genres
//!   into a short tagline through a text-completion model.
//! - **Voice commands**: `POST /execute` transcribes an audio clip, picks a
//!   command from a static catalog, fills its template and calls the
//!   downstream API with the caller's bearer token.
//!
//! ## Running
//!
//! ```rust,no_run
//! use tuneline::{Config, server::builder::run_server};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config/service.yaml").await?;
//!     run_server(config).await?;
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod core;
pub mod server;
pub mod utils;

pub use config::Config;
pub use utils::error::{Result, ServiceError};

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Package name
pub const NAME: &str = env!("CARGO_PKG_NAME");
