//! Catalog loading and validation

use super::types::{CommandTemplate, is_supported_method};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

/// Reserved placeholder replaced with the downstream API root at load time
const BASE_URL_PLACEHOLDER: &str = "{base_url}";

/// Catalog loading errors
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read command catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse command catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Command catalog is empty")]
    Empty,

    #[error("Command at position {position} has id {id}; ids must equal their position")]
    IdMismatch { position: usize, id: usize },

    #[error("Command {id} uses unsupported method {method}")]
    UnsupportedMethod { id: usize, method: String },
}

/// Immutable, ordered list of command templates
#[derive(Debug, Clone)]
pub struct Catalog {
    commands: Vec<CommandTemplate>,
}

impl Catalog {
    /// Validate and wrap a list of templates.
    ///
    /// The list must be non-empty and every `id` must equal its position, so a
    /// classifier answer can be used as an index.
    pub fn new(commands: Vec<CommandTemplate>) -> Result<Self, CatalogError> {
        if commands.is_empty() {
            return Err(CatalogError::Empty);
        }

        for (position, command) in commands.iter().enumerate() {
            if command.id != position {
                return Err(CatalogError::IdMismatch {
                    position,
                    id: command.id,
                });
            }
            if !is_supported_method(&command.method) {
                return Err(CatalogError::UnsupportedMethod {
                    id: command.id,
                    method: command.method.clone(),
                });
            }
        }

        let commands = commands
            .into_iter()
            .map(|mut command| {
                command.method = command.method.to_ascii_uppercase();
                command
            })
            .collect();

        Ok(Self { commands })
    }

    /// Parse a JSON array of templates, expanding `{base_url}`
    pub fn from_json_str(json: &str, base_url: &str) -> Result<Self, CatalogError> {
        let mut commands: Vec<CommandTemplate> = serde_json::from_str(json)?;
        for command in &mut commands {
            command.url_template = command.url_template.replace(BASE_URL_PLACEHOLDER, base_url);
        }
        Self::new(commands)
    }

    /// Load the catalog file once at startup
    pub async fn load<P: AsRef<Path>>(path: P, base_url: &str) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        debug!("Loading command catalog from {:?}", path);

        let content = tokio::fs::read_to_string(path).await?;
        let catalog = Self::from_json_str(&content, base_url)?;

        info!(
            "Loaded {} commands: {}",
            catalog.len(),
            catalog
                .iter()
                .map(|c| c.name.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );
        Ok(catalog)
    }

    /// Template with the given id, if in range
    pub fn get(&self, id: usize) -> Option<&CommandTemplate> {
        self.commands.get(id)
    }

    /// The first template, used as the default command
    pub fn first(&self) -> &CommandTemplate {
        // Non-empty is checked in `new`.
        &self.commands[0]
    }

    pub fn iter(&self) -> impl Iterator<Item = &CommandTemplate> {
        self.commands.iter()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
