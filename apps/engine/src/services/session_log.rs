//! Fire-and-forget session analytics.
//!
//! Logging a finished game must never affect gameplay: records are handed to
//! a detached task and sink failures end there.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use time::OffsetDateTime;
use tracing::info;
use uuid::Uuid;

use crate::config::Difficulty;

/// Analytics record for one completed (or leaked) game.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    pub game_id: Uuid,
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub finished_at: OffsetDateTime,
    pub difficulty: Difficulty,
    pub player_count: usize,
    pub bot_count: usize,
    pub impostor_count: usize,
    pub rounds_played: u32,
    /// `"innocents-win"`, `"impostors-win"`, or `"impostor-leak"`.
    pub outcome: &'static str,
    pub word: String,
}

/// Where session records go. Implementations must swallow their own
/// failures; there is nobody upstream to handle them.
#[async_trait]
pub trait SessionSink: Send + Sync {
    async fn log_session(&self, record: SessionRecord);
}

/// Default sink: structured log line, nothing else.
pub struct TracingSessionSink;

#[async_trait]
impl SessionSink for TracingSessionSink {
    async fn log_session(&self, record: SessionRecord) {
        info!(
            game_id = %record.game_id,
            outcome = record.outcome,
            rounds = record.rounds_played,
            players = record.player_count,
            bots = record.bot_count,
            "Session finished"
        );
    }
}

/// Hand `record` to the sink on a detached task.
pub fn spawn_log(sink: Arc<dyn SessionSink>, record: SessionRecord) {
    tokio::spawn(async move {
        sink.log_session(record).await;
    });
}
