//! Command dispatcher

use super::types::{ApiDescriptor, BearerToken};
use crate::config::CommandsConfig;
use reqwest::Method;
use serde_json::{Value, json};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};
use url::Url;

/// Downstream call errors
#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("Refusing to dispatch: {0}")]
    Rejected(String),

    #[error("Downstream request failed: {0}")]
    Transport(String),

    #[error("Downstream request timed out: {0}")]
    Timeout(String),

    #[error("Downstream returned {status}: {body}")]
    Status { status: u16, body: String },
}

impl DispatchError {
    /// `{"error": <text>}` body relayed to the client
    pub fn envelope(&self) -> Value {
        let text = match self {
            DispatchError::Status { body, .. } => body.clone(),
            other => other.to_string(),
        };
        json!({ "error": text })
    }
}

impl From<reqwest::Error> for DispatchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            DispatchError::Timeout(err.to_string())
        } else {
            DispatchError::Transport(err.to_string())
        }
    }
}

/// Issues filled commands against the downstream API
#[derive(Debug, Clone)]
pub struct CommandDispatcher {
    http: reqwest::Client,
    allowed_origin: Option<Url>,
}

impl CommandDispatcher {
    pub fn new(config: &CommandsConfig) -> Result<Self, DispatchError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.dispatch_timeout))
            .build()
            .map_err(|e| DispatchError::Transport(e.to_string()))?;

        let allowed_origin = if config.restrict_to_base_url {
            let base = Url::parse(&config.base_url)
                .map_err(|e| DispatchError::Rejected(format!("invalid base_url: {}", e)))?;
            Some(base)
        } else {
            None
        };

        Ok(Self {
            http,
            allowed_origin,
        })
    }

    /// Send `descriptor` once with the caller's bearer token.
    ///
    /// A 2xx response yields its JSON body (`null` when empty, a string when
    /// the body is not JSON).
    pub async fn dispatch(
        &self,
        descriptor: &ApiDescriptor,
        token: &BearerToken,
    ) -> Result<Value, DispatchError> {
        let url = self.check_url(&descriptor.url)?;
        let method = Method::from_bytes(descriptor.method.to_ascii_uppercase().as_bytes())
            .map_err(|_| DispatchError::Rejected(format!("invalid method {}", descriptor.method)))?;

        info!(method = %method, url = %url, "Dispatching command");

        let mut request = self
            .http
            .request(method, url)
            .bearer_auth(token.as_str());
        if !descriptor.payload.is_empty() {
            request = request.json(&descriptor.payload);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!(status = status.as_u16(), "Downstream call failed");
            return Err(DispatchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        debug!(status = status.as_u16(), "Downstream call succeeded");
        Ok(parse_body(body))
    }

    fn check_url(&self, raw: &str) -> Result<Url, DispatchError> {
        let url = Url::parse(raw).map_err(|e| DispatchError::Rejected(format!("{}: {}", raw, e)))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(DispatchError::Rejected(format!(
                "unsupported scheme {}",
                url.scheme()
            )));
        }

        if let Some(origin) = &self.allowed_origin {
            if url.origin() != origin.origin() {
                return Err(DispatchError::Rejected(format!(
                    "{} is outside the configured downstream API",
                    url.host_str().unwrap_or_default()
                )));
            }
        }
        Ok(url)
    }
}

fn parse_body(body: String) -> Value {
    if body.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(&body).unwrap_or(Value::String(body))
}
