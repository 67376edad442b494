//! The processing loop: applies pending transitions and executes bot
//! actions until the game waits on a human or reaches a terminal phase.

use std::sync::atomic::Ordering;

use time::OffsetDateTime;
use tracing::{debug, warn};

use super::{narration_line, result_line, GameFlowService};
use crate::ai::BotBrain;
use crate::domain::describe::{self, DescribeOutcome};
use crate::domain::player_view::{DescribeView, VoteView};
use crate::domain::state::{GamePlayer, Phase};
use crate::domain::transition::{derive_events, GameEvent, LifecycleView};
use crate::domain::voting::{self, GameOutcome};
use crate::error::AppError;
use crate::errors::domain::{DomainError, ValidationKind};
use crate::services::session_log::{self, SessionRecord};

/// Hard stop for a runaway loop. A drive pauses at round boundaries in
/// unattended games, so one pass is bounded by a single round of bot turns
/// plus announcements.
const MAX_ITERATIONS: usize = 1000;

/// Bounded retries when a suggestion comes back unusable (duplicate).
const MAX_SUGGESTION_ATTEMPTS: usize = 3;

impl GameFlowService {
    /// Process game state after any action or transition.
    ///
    /// The core orchestrator loop:
    /// 1. Announces a pending round transition (always before the turn).
    /// 2. Announces whose turn it is.
    /// 3. Executes a bot description or bot vote if one is due.
    /// 4. Loops until the game waits on a human, pauses at a round boundary
    ///    (all-bot games), or reaches a terminal phase.
    ///
    /// Single-flight: a second concurrent call returns immediately while the
    /// first keeps driving. Loop-based rather than recursive.
    pub async fn process_game_state(&self) -> Result<(), AppError> {
        if self
            .processing
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Ok(());
        }
        let result = self.drive().await;
        self.processing.store(false, Ordering::Release);
        result
    }

    async fn drive(&self) -> Result<(), AppError> {
        let generation = self.current_generation();
        let mut bot_actions: usize = 0;

        for _iteration in 0..MAX_ITERATIONS {
            // Superseded by a reset or leave: stop without touching state.
            if self.is_stale(generation) {
                return Ok(());
            }

            let phase = self.state.lock().phase;
            match phase {
                Phase::Reveal => return Ok(()),
                Phase::Playing => {
                    // Unattended all-bot games yield at each round boundary
                    // so the operator chooses another round or a vote.
                    if bot_actions > 0 && self.at_spectator_boundary() {
                        return Ok(());
                    }

                    if self.announce_round_if_needed().await? {
                        continue;
                    }
                    if self.announce_turn_if_needed(generation).await {
                        continue;
                    }

                    let acting_bot = {
                        let state = self.state.lock();
                        state.phase == Phase::Playing && state.current_player().is_bot
                    };
                    if acting_bot {
                        self.run_bot_turn(generation).await?;
                        bot_actions += 1;
                        continue;
                    }
                    return Ok(()); // waiting for human input
                }
                Phase::Voting => {
                    if self.bot_voter_pending() {
                        self.run_bot_vote(generation).await?;
                        bot_actions += 1;
                        continue;
                    }
                    return Ok(()); // waiting for a human vote
                }
                Phase::Finished => {
                    self.announce_result_once().await;
                    return Ok(());
                }
                Phase::ImpostorWins => return Ok(()), // announced at the leak
            }
        }

        Err(AppError::internal(format!(
            "process_game_state exceeded max iterations {MAX_ITERATIONS}"
        )))
    }

    fn at_spectator_boundary(&self) -> bool {
        let state = self.state.lock();
        state.phase == Phase::Playing
            && state.all_bots()
            && state.derived_round() > state.current_round
    }

    fn bot_voter_pending(&self) -> bool {
        let state = self.state.lock();
        if state.phase != Phase::Voting {
            return false;
        }
        state
            .current_voter_name()
            .and_then(|name| state.players.iter().find(|p| p.name == name))
            .is_some_and(|p| p.is_bot)
    }

    /// Bump the stored round to the derived round and announce it. Returns
    /// true when a transition was handled; the caller loops.
    async fn announce_round_if_needed(&self) -> Result<bool, AppError> {
        let pending = {
            let state = self.state.lock();
            state.phase == Phase::Playing && state.derived_round() > state.current_round
        };
        if !pending {
            return Ok(false);
        }

        let (_, events) = self.apply(|state| {
            if state.phase == Phase::Playing && state.derived_round() > state.current_round {
                state.current_round = state.derived_round();
            }
            Ok(())
        })?;

        self.announce_events(&events).await;
        Ok(true)
    }

    /// Announce whose turn it is, once per turn position. Returns true when
    /// an announcement played; the caller loops.
    async fn announce_turn_if_needed(&self, generation: u64) -> bool {
        let pending = {
            let state = self.state.lock();
            if state.phase != Phase::Playing {
                None
            } else {
                let position = state.current_turn_position;
                if *self.announced_turn.lock() == Some(position) {
                    None
                } else {
                    Some((position, state.current_player().name.clone()))
                }
            }
        };
        let Some((position, player)) = pending else {
            return false;
        };

        self.announce(&narration_line(&GameEvent::TurnBecame { player }))
            .await;
        if !self.is_stale(generation) {
            *self.announced_turn.lock() = Some(position);
        }
        true
    }

    /// Advance the turn cursor, unless the game was superseded or the
    /// position already moved (skip racing a bot suggestion).
    pub(super) fn advance_from(&self, generation: u64, position: u64) -> bool {
        if self.is_stale(generation) {
            return false;
        }
        let mut state = self.state.lock();
        if state.phase != Phase::Playing || state.current_turn_position != position {
            return false;
        }
        describe::advance_turn(&mut state);
        true
    }

    /// Execute one bot description turn.
    ///
    /// The suggestion round-trip is unbounded work against an external
    /// service; the result is applied only if the same game generation and
    /// turn position are still current. Collaborator failure falls back to
    /// the deterministic phrase pool, duplicates retry against it, and a
    /// still-unusable suggestion degrades to a skipped turn so progression
    /// never blocks.
    pub(super) async fn run_bot_turn(&self, generation: u64) -> Result<(), AppError> {
        let pending = {
            let state = self.state.lock();
            if state.phase != Phase::Playing || !state.current_player().is_bot {
                None
            } else {
                let index = state.current_player_index();
                Some((
                    state.current_turn_position,
                    state.players[index].name.clone(),
                    DescribeView::for_player(&state, index),
                ))
            }
        };
        let Some((position, player_name, view)) = pending else {
            return Ok(());
        };

        debug!(player = %player_name, position, "Processing bot turn");

        let suggestion = match self.brain.suggest_description(&view).await {
            Ok(text) => text,
            Err(err) => {
                warn!(player = %player_name, error = %err, "Suggestion collaborator failed, falling back");
                self.fallback.suggest_description(&view).await?
            }
        };

        enum Applied {
            Recorded(String),
            Won(Vec<GameEvent>),
            Skipped,
            Stale,
        }

        let applied = {
            let mut state = self.state.lock();
            if self.is_stale(generation)
                || state.phase != Phase::Playing
                || state.current_turn_position != position
            {
                Applied::Stale
            } else {
                let before = LifecycleView::of(&state);
                let mut text = suggestion;
                let mut recorded = None;
                for _attempt in 0..MAX_SUGGESTION_ATTEMPTS {
                    match describe::submit_description(&mut state, &player_name, &text) {
                        Ok(outcome) => {
                            recorded = Some((outcome, text.clone()));
                            break;
                        }
                        Err(DomainError::Validation(
                            ValidationKind::DuplicateDescription,
                            _,
                        )) => {
                            let used: Vec<String> =
                                state.descriptions.iter().map(|d| d.text.clone()).collect();
                            text = self.fallback.unused_phrase(state.difficulty, &used);
                        }
                        Err(other) => return Err(other.into()),
                    }
                }

                match recorded {
                    Some((DescribeOutcome::Recorded, text)) => Applied::Recorded(text),
                    Some((DescribeOutcome::ImpostorWon, _)) => {
                        let after = LifecycleView::of(&state);
                        Applied::Won(derive_events(&before, &after))
                    }
                    None => {
                        describe::skip_turn(&mut state, &player_name)
                            .map_err(AppError::from)?;
                        Applied::Skipped
                    }
                }
            }
        };

        match applied {
            Applied::Stale => {
                debug!(player = %player_name, "Discarding stale bot suggestion");
                Ok(())
            }
            Applied::Recorded(text) => {
                self.announce(&format!("{player_name} says: {text}")).await;
                self.advance_from(generation, position);
                Ok(())
            }
            Applied::Won(events) => {
                self.announce_events(&events).await;
                self.log_outcome("impostor-leak");
                Ok(())
            }
            Applied::Skipped => {
                self.announce(&format!("{player_name} skips their turn"))
                    .await;
                self.advance_from(generation, position);
                Ok(())
            }
        }
    }

    /// Execute one bot vote.
    ///
    /// The collaborator reply is fuzzy-matched against real player names;
    /// failures and unrecognized names fall back to a uniform-random choice
    /// among the other players.
    pub(super) async fn run_bot_vote(&self, generation: u64) -> Result<(), AppError> {
        let pending = {
            let state = self.state.lock();
            if state.phase != Phase::Voting {
                None
            } else {
                state.current_voter_name().and_then(|name| {
                    let player = state.players.iter().find(|p| p.name == name)?;
                    if !player.is_bot {
                        return None;
                    }
                    Some((
                        state.current_voter_index,
                        name.to_string(),
                        VoteView::for_voter(&state, name, player.is_impostor),
                    ))
                })
            }
        };
        let Some((cursor, voter_name, view)) = pending else {
            return Ok(());
        };

        debug!(voter = %voter_name, cursor, "Processing bot vote");

        let reply = match self.brain.suggest_vote(&view).await {
            Ok(reply) => reply,
            Err(err) => {
                warn!(voter = %voter_name, error = %err, "Vote collaborator failed, falling back");
                self.fallback.suggest_vote(&view).await?
            }
        };

        let matched = {
            let state = self.state.lock();
            let candidates: Vec<&GamePlayer> = state
                .players
                .iter()
                .filter(|p| p.name != voter_name)
                .collect();
            voting::fuzzy_match_name(&candidates, &reply)
        };
        let target = match matched {
            Some(name) => name,
            None => {
                warn!(voter = %voter_name, %reply, "Unrecognized vote target, choosing at random");
                self.fallback.suggest_vote(&view).await?
            }
        };

        let applied = {
            let mut state = self.state.lock();
            if self.is_stale(generation)
                || state.phase != Phase::Voting
                || state.current_voter_index != cursor
            {
                None
            } else {
                let before = LifecycleView::of(&state);
                let outcome = voting::submit_vote(&mut state, &voter_name, &target)?;
                let after = LifecycleView::of(&state);
                Some((outcome, derive_events(&before, &after)))
            }
        };

        match applied {
            None => {
                debug!(voter = %voter_name, "Discarding stale bot vote");
                Ok(())
            }
            Some((_, events)) => {
                self.announce(&format!("{voter_name} votes for {target}"))
                    .await;
                self.announce_events(&events).await;
                Ok(())
            }
        }
    }

    /// Announce the voted-out result exactly once per game, no matter how
    /// many times the finished phase is observed.
    pub(super) async fn announce_result_once(&self) {
        if self.result_announced.swap(true, Ordering::AcqRel) {
            return;
        }

        let outcome = {
            let state = self.state.lock();
            voting::determine_outcome(&state)
        };
        let Some(outcome) = outcome else { return };

        self.announce(&result_line(&outcome)).await;

        let label = match outcome {
            GameOutcome::InnocentsWin { .. } => "innocents-win",
            GameOutcome::ImpostorsWin { .. } => "impostors-win",
        };
        self.log_outcome(label);
    }

    /// Build and detach the analytics record. Fire-and-forget: sink
    /// failures never reach gameplay.
    pub(super) fn log_outcome(&self, outcome: &'static str) {
        let record = {
            let state = self.state.lock();
            SessionRecord {
                game_id: *self.game_id.lock(),
                started_at: *self.started_at.lock(),
                finished_at: OffsetDateTime::now_utc(),
                difficulty: state.difficulty,
                player_count: state.players.len(),
                bot_count: state.players.iter().filter(|p| p.is_bot).count(),
                impostor_count: state.players.iter().filter(|p| p.is_impostor).count(),
                rounds_played: state.current_round,
                outcome,
                word: state.word.clone(),
            }
        };
        session_log::spawn_log(self.sink.clone(), record);
    }
}
