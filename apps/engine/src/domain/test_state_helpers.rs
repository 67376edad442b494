//! Shared builders for domain tests.

use crate::config::{Difficulty, GameSetup, SetupPlayer};
use crate::domain::state::{GamePlayer, GameState, Phase};

pub struct MakeGameStateArgs {
    pub phase: Phase,
    pub word: &'static str,
    pub hint: &'static str,
    pub impostor_index: usize,
    pub current_round: u32,
}

impl Default for MakeGameStateArgs {
    fn default() -> Self {
        Self {
            phase: Phase::Playing,
            word: "GUITAR",
            hint: "Music",
            impostor_index: 0,
            current_round: 1,
        }
    }
}

/// Build a game state with an identity turn order and the given roster.
///
/// `roster` entries are `(name, is_bot)`; the impostor is chosen by index so
/// tests control roles directly instead of sampling.
pub fn make_game_state(roster: &[(&str, bool)], args: MakeGameStateArgs) -> GameState {
    let players = roster
        .iter()
        .enumerate()
        .map(|(i, (name, is_bot))| GamePlayer {
            name: name.to_string(),
            is_bot: *is_bot,
            is_impostor: i == args.impostor_index,
            word: args.word.to_string(),
            hint: args.hint.to_string(),
            has_seen_word: true,
        })
        .collect::<Vec<_>>();

    GameState {
        phase: args.phase,
        turn_order: (0..players.len()).collect(),
        players,
        current_turn_position: 0,
        current_round: args.current_round,
        descriptions: Vec::new(),
        votes: Vec::new(),
        voting_order: None,
        current_voter_index: 0,
        word: args.word.to_string(),
        hint: args.hint.to_string(),
        difficulty: Difficulty::Normal,
        muted: false,
        allow_impostor_hint: true,
    }
}

pub fn make_setup(roster: &[(&str, bool)], impostor_count: usize, seed: Option<u64>) -> GameSetup {
    GameSetup {
        players: roster
            .iter()
            .map(|(name, is_bot)| SetupPlayer {
                name: name.to_string(),
                is_bot: *is_bot,
            })
            .collect(),
        impostor_count,
        selected_categories: Vec::new(),
        difficulty: Difficulty::Normal,
        allow_impostor_hint: true,
        seed,
    }
}
