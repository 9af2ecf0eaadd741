//! Application state shared across HTTP handlers

use crate::config::Config;
use crate::core::audio::{OpenAIWhisper, Transcriber};
use crate::core::catalog::Catalog;
use crate::core::llm::{OpenAIClient, TextGenerator};
use crate::core::music::SpotifyClient;
use crate::core::sessions::{InMemorySessionStore, SessionStore};
use crate::core::tagline::TaglineService;
use crate::core::voice::{CommandDispatcher, CommandExecutor, IntentClassifier, TemplateFiller};
use crate::utils::error::Result;
use std::sync::Arc;
use tracing::{info, warn};

/// HTTP server state shared across handlers
///
/// Everything here is built once at startup and only read afterwards.
#[derive(Clone)]
pub struct AppState {
    /// Service configuration (shared read-only)
    pub config: Arc<Config>,
    /// Voice command pipeline
    pub executor: Arc<CommandExecutor>,
    /// Tagline flow
    pub taglines: Arc<TaglineService>,
}

impl AppState {
    pub fn new(config: Config, executor: CommandExecutor, taglines: TaglineService) -> Self {
        Self {
            config: Arc::new(config),
            executor: Arc::new(executor),
            taglines: Arc::new(taglines),
        }
    }

    /// Build every client, load the catalog and the session seed
    pub async fn from_config(config: &Config) -> Result<Self> {
        let commands = config.commands();
        let catalog = Arc::new(Catalog::load(&commands.catalog_path, &commands.base_url).await?);

        let generator: Arc<dyn TextGenerator> = Arc::new(OpenAIClient::new(config.openai().clone())?);
        let transcriber = Transcriber::new(Arc::new(OpenAIWhisper::new(config.openai())?));

        let executor = CommandExecutor::new(
            transcriber,
            IntentClassifier::new(generator.clone()),
            TemplateFiller::new(generator.clone()),
            CommandDispatcher::new(commands)?,
            catalog,
            commands.unmatched,
        );

        let sessions: Arc<dyn SessionStore> = match &config.sessions().path {
            Some(path) => Arc::new(InMemorySessionStore::from_file(path).await?),
            None => {
                warn!("No session file configured; every /tagline request will be rejected");
                Arc::new(InMemorySessionStore::new())
            }
        };
        let taglines = TaglineService::new(
            sessions,
            SpotifyClient::new(config.spotify().clone())?,
            generator,
        );

        info!("Application state initialized");
        Ok(Self::new(config.clone(), executor, taglines))
    }

    /// Get service configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
