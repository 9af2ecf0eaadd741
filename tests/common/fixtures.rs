//! Test fixtures
//!
//! [`TestApp`] assembles a real [`AppState`] whose external services all
//! point at one `wiremock` server.

use super::mocks::{FakeSpeechToText, ScriptedGenerator};
use std::sync::Arc;
use tuneline::Config;
use tuneline::config::{CommandsConfig, SpotifyConfig, UnmatchedPolicy};
use tuneline::core::audio::Transcriber;
use tuneline::core::catalog::Catalog;
use tuneline::core::llm::TextGenerator;
use tuneline::core::music::SpotifyClient;
use tuneline::core::sessions::{InMemorySessionStore, SpotifyCredentials};
use tuneline::core::tagline::TaglineService;
use tuneline::core::voice::{CommandDispatcher, CommandExecutor, IntentClassifier, TemplateFiller};
use tuneline::server::state::AppState;

pub const SESSION_ID: &str = "6439bfa512b767882aee8b9b";
pub const REFRESH_TOKEN: &str = "refresh-token-1";

const BOUNDARY: &str = "tuneline-integration-boundary";

/// The catalog shipped in `config/commands.json`
pub fn shipped_catalog_json() -> String {
    std::fs::read_to_string(concat!(env!("CARGO_MANIFEST_DIR"), "/config/commands.json"))
        .expect("config/commands.json")
}

pub struct TestApp {
    pub commands: CommandsConfig,
    pub spotify: SpotifyConfig,
    pub sessions: Arc<InMemorySessionStore>,
    pub generator: Arc<ScriptedGenerator>,
    speech: Arc<FakeSpeechToText>,
}

impl TestApp {
    /// Point Spotify and the downstream API at `server_uri`
    pub fn new(server_uri: &str, generator: ScriptedGenerator, speech: FakeSpeechToText) -> Self {
        let sessions = InMemorySessionStore::new();
        sessions.insert(SESSION_ID, SpotifyCredentials::new("stale-access", REFRESH_TOKEN));

        Self {
            commands: CommandsConfig {
                base_url: format!("{}/api/", server_uri),
                ..CommandsConfig::default()
            },
            spotify: SpotifyConfig {
                client_id: "client-id".to_string(),
                client_secret: "client-secret".to_string(),
                token_url: format!("{}/api/token", server_uri),
                top_artists_url: format!("{}/v1/me/top/artists", server_uri),
                ..SpotifyConfig::default()
            },
            sessions: Arc::new(sessions),
            generator: Arc::new(generator),
            speech: Arc::new(speech),
        }
    }

    pub fn with_policy(mut self, policy: UnmatchedPolicy) -> Self {
        self.commands.unmatched = policy;
        self
    }

    pub fn state(&self) -> AppState {
        let catalog = Arc::new(
            Catalog::from_json_str(&shipped_catalog_json(), &self.commands.base_url)
                .expect("shipped catalog is valid"),
        );
        let generator: Arc<dyn TextGenerator> = self.generator.clone();

        let executor = CommandExecutor::new(
            Transcriber::new(self.speech.clone()),
            IntentClassifier::new(generator.clone()),
            TemplateFiller::new(generator.clone()),
            CommandDispatcher::new(&self.commands).expect("dispatcher"),
            catalog,
            self.commands.unmatched,
        );
        let taglines = TaglineService::new(
            self.sessions.clone(),
            SpotifyClient::new(self.spotify.clone()).expect("spotify client"),
            generator,
        );

        let mut config = Config::default();
        config.service.commands = self.commands.clone();
        config.service.spotify = self.spotify.clone();
        AppState::new(config, executor, taglines)
    }
}

/// A multipart/form-data body with one file field
pub fn multipart_body(field: &str, filename: &str, bytes: &[u8]) -> Vec<u8> {
    let mut body = format!(
        "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{field}\"; filename=\"{filename}\"\r\nContent-Type: audio/webm\r\n\r\n"
    )
    .into_bytes();
    body.extend_from_slice(bytes);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
    body
}

pub fn multipart_content_type() -> String {
    format!("multipart/form-data; boundary={BOUNDARY}")
}
