//! Error handling for the service
//!
//! This module defines the error type shared by every layer of the service.

#![allow(missing_docs)]

mod conversions;
mod helpers;
mod response;
mod types;

pub use response::{ErrorDetail, ErrorResponse};
pub use types::{Result, ServiceError};
