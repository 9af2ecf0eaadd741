//! Command catalog
//!
//! The ordered list of downstream calls a voice command can turn into. It is
//! loaded once at startup and shared read-only behind an `Arc`.

mod loader;
mod types;

pub use loader::{Catalog, CatalogError};
pub use types::{CommandTemplate, SUPPORTED_METHODS, is_supported_method, placeholders};
