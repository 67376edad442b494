//! Dictation gateway: the consumed speech-to-text contract.
//!
//! Capture itself is a presentation concern; the engine only defines the
//! interface and the failure taxonomy surfaced to the player. Dictation
//! failures never touch game state.

use async_trait::async_trait;
use thiserror::Error;

/// User-visible dictation failures. None of these affect phase or state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DictationError {
    #[error("Microphone permission blocked")]
    PermissionDenied,
    #[error("No speech detected")]
    NoSpeech,
    #[error("No microphone available")]
    NoMicrophone,
    #[error("Dictation network error")]
    Network,
    #[error("Dictation not supported on this device")]
    Unsupported,
    #[error("Dictation aborted")]
    Aborted,
}

/// The consumed speech-to-text contract: one user-initiated capture
/// resolving to the final transcript, plus an explicit abort.
#[async_trait]
pub trait Dictation: Send + Sync {
    async fn dictate(&self) -> Result<String, DictationError>;

    /// Abort an in-flight capture; the pending `dictate` resolves with
    /// [`DictationError::Aborted`].
    fn stop(&self);
}
