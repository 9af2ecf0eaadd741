//! Voice command pipeline
//!
//! `Received → Transcribed → Classified → Filled → Dispatched`. Each stage is
//! a separate component so it can be exercised on its own; [`CommandExecutor`]
//! wires them together for the `/execute` endpoint.

mod classifier;
mod dispatcher;
mod executor;
mod filler;
mod types;

pub use classifier::IntentClassifier;
pub use dispatcher::{CommandDispatcher, DispatchError};
pub use executor::{CommandExecutor, ExecutionOutcome, VoiceError};
pub use filler::{FillError, FillOutcome, TemplateFiller};
pub use types::{ApiDescriptor, BearerToken, Classification, PipelineStage};
