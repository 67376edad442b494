//! Edge-triggered lifecycle events derived from before/after state.
//!
//! The orchestrator snapshots the lifecycle view around every mutation and
//! announces the derived events in order. Encoding the derivation here gives
//! the narration ordering rules a single, testable home.

use crate::domain::state::{GameState, Phase};

/// The slice of state that lifecycle announcements depend on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LifecycleView {
    pub phase: Phase,
    pub round: u32,
    pub turn_position: u64,
    pub current_player: String,
}

impl LifecycleView {
    pub fn of(state: &GameState) -> Self {
        Self {
            phase: state.phase,
            round: state.current_round,
            turn_position: state.current_turn_position,
            current_player: state.current_player().name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// Edge-triggered: reveal completed, play begins.
    GameStarted,
    /// Edge-triggered: the stored round advanced. Always announced before
    /// the turn that opens the round.
    RoundBegan { round: u32 },
    /// Edge-triggered: the turn cursor moved to a player.
    TurnBecame { player: String },
    /// Edge-triggered: the game entered the voting phase.
    VotingStarted,
    /// Edge-triggered: the last vote was cast.
    VotingFinished,
    /// Edge-triggered: an impostor leaked the secret word.
    ImpostorWon { player: String },
}

/// Derive lifecycle events from a before/after pair.
///
/// Ordering is load-bearing: a round transition is pushed before the turn
/// transition so the round announcement always precedes the turn
/// announcement.
pub fn derive_events(before: &LifecycleView, after: &LifecycleView) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if before.phase == Phase::Reveal && after.phase == Phase::Playing {
        events.push(GameEvent::GameStarted);
    }

    if after.phase == Phase::Playing && after.round > before.round {
        events.push(GameEvent::RoundBegan { round: after.round });
    }

    if after.phase == Phase::Playing && after.turn_position != before.turn_position {
        events.push(GameEvent::TurnBecame {
            player: after.current_player.clone(),
        });
    }

    if before.phase != Phase::Voting && after.phase == Phase::Voting {
        events.push(GameEvent::VotingStarted);
    }

    if before.phase != Phase::Finished && after.phase == Phase::Finished {
        events.push(GameEvent::VotingFinished);
    }

    if before.phase != Phase::ImpostorWins && after.phase == Phase::ImpostorWins {
        events.push(GameEvent::ImpostorWon {
            player: after.current_player.clone(),
        });
    }

    events
}
