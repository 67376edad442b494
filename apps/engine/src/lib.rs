#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod ai;
pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod narration;
pub mod services;

// Re-exports for public API
pub use ai::{BotBrain, BrainConfig, FallbackBrain, RemoteBrain};
pub use config::{Difficulty, GameSetup, SetupPlayer};
pub use error::AppError;
pub use narration::{Announcer, Dictation, DictationError, Narrator, SilentNarrator};
pub use services::game_flow::GameFlowService;
pub use services::session_log::{SessionRecord, SessionSink, TracingSessionSink};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    engine_test_support::test_logging::init();
}
