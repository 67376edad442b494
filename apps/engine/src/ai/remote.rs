//! Remote suggestion brain - asks the description/vote service over HTTP.
//!
//! Every request has a hard client timeout and every error maps into
//! [`AiError`]; the orchestrator recovers with the fallback brain, so a dead
//! or slow service degrades gameplay to deterministic suggestions instead of
//! blocking it.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use super::protocol::{
    clean_description, DeduceRequest, DescribeRequest, DescribeResponse, GuessResponse,
    SuggestionRequest, VoteRequest, VoteResponse,
};
use super::trait_def::{AiError, BotBrain};
use crate::domain::player_view::{DescribeView, VoteView};

/// Per-request budget. Generous next to the narration cap, but bounded: the
/// turn loop never waits on the network forever.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub struct RemoteBrain {
    client: reqwest::Client,
    endpoint: String,
}

impl RemoteBrain {
    pub const NAME: &'static str = "remote";

    pub fn new(endpoint: impl Into<String>) -> Result<Self, AiError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| AiError::Internal(format!("HTTP client build failed: {e}")))?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    async fn post(&self, request: &SuggestionRequest) -> Result<reqwest::Response, AiError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AiError::Timeout
                } else {
                    AiError::Internal(format!("suggestion request failed: {e}"))
                }
            })?;

        if !response.status().is_success() {
            return Err(AiError::Internal(format!(
                "suggestion service returned {}",
                response.status()
            )));
        }
        Ok(response)
    }

    /// Ask the service to guess the secret word from the transcript.
    ///
    /// Impostor-only helper; not part of the per-turn flow, so it lives on
    /// the concrete type rather than on [`BotBrain`].
    pub async fn deduce_word(
        &self,
        hint: String,
        previous_descriptions: Vec<String>,
    ) -> Result<String, AiError> {
        let request = SuggestionRequest::Deduce(DeduceRequest::new(hint, previous_descriptions));
        let response = self.post(&request).await?;
        let body: GuessResponse = response
            .json()
            .await
            .map_err(|e| AiError::InvalidSuggestion(format!("malformed guess reply: {e}")))?;
        Ok(body.guess)
    }
}

#[async_trait]
impl BotBrain for RemoteBrain {
    async fn suggest_description(&self, view: &DescribeView) -> Result<String, AiError> {
        let request = SuggestionRequest::Describe(DescribeRequest::from(view));
        let response = self.post(&request).await?;

        let body: DescribeResponse = response
            .json()
            .await
            .map_err(|e| AiError::InvalidSuggestion(format!("malformed description reply: {e}")))?;

        let description = clean_description(&body.description);
        if description.is_empty() {
            return Err(AiError::InvalidSuggestion(
                "service returned an empty description".into(),
            ));
        }

        debug!(player = %view.player_name, %description, "Remote description suggestion");
        Ok(description)
    }

    async fn suggest_vote(&self, view: &VoteView) -> Result<String, AiError> {
        let request = SuggestionRequest::Vote(VoteRequest::from(view));
        let response = self.post(&request).await?;

        let body: VoteResponse = response
            .json()
            .await
            .map_err(|e| AiError::InvalidSuggestion(format!("malformed vote reply: {e}")))?;

        if body.voted_for.trim().is_empty() {
            return Err(AiError::InvalidSuggestion(
                "service returned an empty vote".into(),
            ));
        }

        debug!(voter = %view.voter_name, voted_for = %body.voted_for, "Remote vote suggestion");
        Ok(body.voted_for)
    }
}
