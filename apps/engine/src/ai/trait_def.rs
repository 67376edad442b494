//! Bot brain trait definition.

use std::fmt;

use async_trait::async_trait;

use crate::domain::player_view::{DescribeView, VoteView};
use crate::error::AppError;

/// Errors that can occur during bot decision-making.
#[derive(Debug)]
pub enum AiError {
    /// Brain failed to answer within its time budget
    Timeout,
    /// Brain encountered an internal error
    Internal(String),
    /// Brain produced an unusable suggestion
    InvalidSuggestion(String),
}

impl fmt::Display for AiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AiError::Timeout => write!(f, "bot decision timeout"),
            AiError::Internal(msg) => write!(f, "bot internal error: {msg}"),
            AiError::InvalidSuggestion(msg) => write!(f, "bot invalid suggestion: {msg}"),
        }
    }
}

impl std::error::Error for AiError {}

impl From<AiError> for AppError {
    fn from(err: AiError) -> Self {
        AppError::internal(format!("bot error: {err}"))
    }
}

/// Trait for bot players.
///
/// Implementations receive the game state visible to the acting player and
/// produce a suggestion. Brains may fail or stall; the orchestrator always
/// recovers with the deterministic fallback, so an error here never blocks
/// turn progression.
#[async_trait]
pub trait BotBrain: Send + Sync {
    /// Suggest a one-word description for the player in `view`.
    async fn suggest_description(&self, view: &DescribeView) -> Result<String, AiError>;

    /// Suggest the name of the player to vote for.
    ///
    /// The reply does not have to be an exact roster name; the voting engine
    /// fuzzy-matches it and falls back to random on a miss.
    async fn suggest_vote(&self, view: &VoteView) -> Result<String, AiError>;
}
