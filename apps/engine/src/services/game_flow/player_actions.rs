//! Player-initiated actions: reveal confirmations, descriptions, skips,
//! vote start, and votes.
//!
//! Every method follows the same shape: validate and mutate under the state
//! lock, then narrate, then drive the processing loop. Rejections leave the
//! state untouched and surface as transient notices.

use tracing::{info, warn};

use super::GameFlowService;
use crate::domain::describe::{self, DescribeOutcome};
use crate::domain::roles;
use crate::domain::voting;
use crate::error::AppError;
use crate::narration::Dictation;

impl GameFlowService {
    /// A player confirmed their reveal card. The last confirmation moves
    /// the game into the playing phase.
    pub async fn confirm_seen(&self, player_name: &str) -> Result<(), AppError> {
        let (_, events) = self.apply(|state| {
            let (index, _) = state.find_player(player_name)?;
            roles::confirm_seen(state, index)
        })?;

        info!(player = player_name, "Reveal confirmed");
        self.announce_events(&events).await;
        self.process_game_state().await
    }

    /// Accept a description from the human at the current turn position.
    ///
    /// The description is recorded before its narration is requested; the
    /// turn advances only after narration completes, and only if the game
    /// was not superseded in the meantime.
    pub async fn submit_description(&self, player_name: &str, text: &str) -> Result<(), AppError> {
        let generation = self.current_generation();

        let ((outcome, position, spoken), events) = self.apply(|state| {
            let position = state.current_turn_position;
            let outcome = describe::submit_description(state, player_name, text)?;
            Ok((outcome, position, text.trim().to_string()))
        })?;

        info!(player = player_name, ?outcome, "Description submitted");

        match outcome {
            DescribeOutcome::ImpostorWon => {
                self.announce_events(&events).await;
                self.log_outcome("impostor-leak");
                Ok(())
            }
            DescribeOutcome::Recorded => {
                self.announce(&format!("{player_name} says: {spoken}")).await;
                if self.advance_from(generation, position) {
                    self.process_game_state().await?;
                }
                Ok(())
            }
        }
    }

    /// Capture a description by dictation and submit it.
    ///
    /// Dictation failures are surfaced as transient notices and never touch
    /// game state.
    pub async fn submit_dictated(
        &self,
        player_name: &str,
        dictation: &dyn Dictation,
    ) -> Result<(), AppError> {
        let text = dictation.dictate().await.map_err(|err| {
            warn!(player = player_name, error = %err, "Dictation failed");
            AppError::invalid("DICTATION_FAILED", err.to_string())
        })?;
        self.submit_description(player_name, &text).await
    }

    /// Skip the current turn, recording the skip marker in its place.
    ///
    /// Works for humans declining to answer and for cutting short a bot
    /// whose suggestion call is taking too long; the position check makes
    /// the late suggestion stale.
    pub async fn skip_turn(&self, player_name: &str) -> Result<(), AppError> {
        let generation = self.current_generation();

        let (position, _) = self.apply(|state| {
            let position = state.current_turn_position;
            describe::skip_turn(state, player_name)?;
            Ok(position)
        })?;

        info!(player = player_name, "Turn skipped");
        self.announce(&format!("{player_name} skips their turn")).await;
        if self.advance_from(generation, position) {
            self.process_game_state().await?;
        }
        Ok(())
    }

    /// Move from playing to voting. Gated on every player having spoken in
    /// the current round.
    pub async fn start_voting(&self) -> Result<(), AppError> {
        let (_, events) = self.apply(voting::start_voting)?;

        info!("Voting started");
        self.announce_events(&events).await;
        self.process_game_state().await
    }

    /// Accept a vote from the human the voting cursor points at.
    ///
    /// The vote is recorded before the next voter (or the finished
    /// transition) is evaluated.
    pub async fn submit_vote(
        &self,
        voter_name: &str,
        voted_for_name: &str,
    ) -> Result<(), AppError> {
        let (outcome, events) = self.apply(|state| {
            voting::submit_vote(state, voter_name, voted_for_name)
        })?;

        info!(voter = voter_name, target = voted_for_name, ?outcome, "Vote submitted");
        self.announce(&format!("{voter_name} votes for {voted_for_name}"))
            .await;
        self.announce_events(&events).await;
        self.process_game_state().await
    }
}
