//! Voice pipeline data types

use crate::core::catalog::CommandTemplate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A concrete downstream call, ready for dispatch.
///
/// Deserialization is strict: anything but exactly `url`, `method` and an
/// optional string-to-string `payload` is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApiDescriptor {
    pub url: String,
    pub method: String,
    #[serde(default)]
    pub payload: BTreeMap<String, String>,
}

impl From<&CommandTemplate> for ApiDescriptor {
    fn from(template: &CommandTemplate) -> Self {
        Self {
            url: template.url_template.clone(),
            method: template.method.clone(),
            payload: template.payload_template.clone(),
        }
    }
}

/// Result of the intent classifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// The model named a catalog id that exists
    Matched(usize),
    /// The reply was not a usable id
    Unmatched { raw: String },
}

/// Bearer credential of the caller, forwarded verbatim downstream
#[derive(Clone, PartialEq, Eq)]
pub struct BearerToken(String);

impl BearerToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Parse an `Authorization` header value of the form `Bearer <token>`
    pub fn from_header_value(value: &str) -> Option<Self> {
        let (scheme, token) = value.trim().split_once(' ')?;
        let token = token.trim();
        if !scheme.eq_ignore_ascii_case("bearer") || token.is_empty() {
            return None;
        }
        Some(Self(token.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BearerToken([REDACTED])")
    }
}

/// Stages of a voice command request, used for logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    Received,
    Transcribed,
    Classified,
    Filled,
    Dispatched,
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PipelineStage::Received => "received",
            PipelineStage::Transcribed => "transcribed",
            PipelineStage::Classified => "classified",
            PipelineStage::Filled => "filled",
            PipelineStage::Dispatched => "dispatched",
        };
        f.write_str(name)
    }
}
