//! Bounded, cancellable announcements.
//!
//! The speech engine is an external collaborator; the engine only requires
//! "resolves when playback ends, never errors". [`Announcer`] enforces the
//! rest of the contract: a hard time cap so narration can never stall the
//! turn loop, mute short-circuiting, and cancellation for reset/leave.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Maximum time any single announcement may hold up the game.
pub const NARRATION_CAP: Duration = Duration::from_secs(5);

/// The consumed speech contract. Implementations resolve when playback ends
/// and swallow their own failures (a broken speech engine means silence, not
/// errors).
#[async_trait]
pub trait Narrator: Send + Sync {
    async fn speak(&self, text: &str);
}

/// Narrator that completes immediately. Used when no speech engine is
/// available and by the demo binary's quiet mode.
pub struct SilentNarrator;

#[async_trait]
impl Narrator for SilentNarrator {
    async fn speak(&self, _text: &str) {}
}

/// Wraps a [`Narrator`] with the engine-side policy: cap, mute, cancel.
pub struct Announcer {
    narrator: Arc<dyn Narrator>,
    cancel: Mutex<CancellationToken>,
}

impl Announcer {
    pub fn new(narrator: Arc<dyn Narrator>) -> Self {
        Self {
            narrator,
            cancel: Mutex::new(CancellationToken::new()),
        }
    }

    /// Announce `text` and wait for completion.
    ///
    /// Resolves immediately when muted; otherwise waits for playback end,
    /// cancellation, or the cap, whichever comes first. Never errors.
    pub async fn announce(&self, text: &str, muted: bool) {
        if muted {
            return;
        }

        let token = self.cancel.lock().clone();
        tokio::select! {
            _ = token.cancelled() => {
                debug!(%text, "Narration cancelled");
            }
            result = tokio::time::timeout(NARRATION_CAP, self.narrator.speak(text)) => {
                if result.is_err() {
                    debug!(%text, "Narration timed out, forcing completion");
                }
            }
        }
    }

    /// Abort any in-flight announcement and arm a fresh token for the next
    /// one. Called on mute, reset, and leaving the game view.
    pub fn cancel_all(&self) {
        let mut guard = self.cancel.lock();
        guard.cancel();
        *guard = CancellationToken::new();
    }
}
