//! Roster and role assignment: seeds a fresh [`GameState`].

use std::collections::HashSet;

use rand::prelude::SliceRandom;
use rand::Rng;

use crate::config::{GameSetup, SetupPlayer};
use crate::domain::state::{GamePlayer, GameState, Phase, PlayerIndex};
use crate::domain::words::WordPair;
use crate::errors::domain::{DomainError, ValidationKind};

/// Choose exactly `impostor_count` distinct roster indices uniformly at
/// random.
///
/// Repeated uniform sampling into a set; terminates for any
/// `impostor_count <= player_count`.
pub fn pick_impostors<R: Rng>(
    rng: &mut R,
    player_count: usize,
    impostor_count: usize,
) -> Result<HashSet<PlayerIndex>, DomainError> {
    if impostor_count > player_count {
        return Err(DomainError::validation(
            ValidationKind::InvalidConfig,
            format!("Cannot pick {impostor_count} impostors from {player_count} players"),
        ));
    }

    let mut indices = HashSet::new();
    while indices.len() < impostor_count {
        indices.insert(rng.random_range(0..player_count));
    }
    Ok(indices)
}

/// Unbiased Fisher-Yates permutation of all roster indices.
pub fn shuffle_turn_order<R: Rng>(rng: &mut R, player_count: usize) -> Vec<PlayerIndex> {
    let mut order: Vec<PlayerIndex> = (0..player_count).collect();
    order.shuffle(rng);
    order
}

/// Build the roster with assigned roles.
///
/// Bots never go through the reveal step, so they start `has_seen_word`.
pub fn assign_roles(
    players: &[SetupPlayer],
    impostors: &HashSet<PlayerIndex>,
    pair: &WordPair,
) -> Vec<GamePlayer> {
    players
        .iter()
        .enumerate()
        .map(|(i, p)| GamePlayer {
            name: p.name.clone(),
            is_bot: p.is_bot,
            is_impostor: impostors.contains(&i),
            word: pair.word.clone(),
            hint: pair.hint.clone(),
            has_seen_word: p.is_bot,
        })
        .collect()
}

/// Seed a complete [`GameState`] for one game.
///
/// `role_rng` and `order_rng` are independent streams so a reset re-rolls
/// both draws independently of each other and of the word draw.
pub fn new_game_state<R1: Rng, R2: Rng>(
    setup: &GameSetup,
    pair: WordPair,
    role_rng: &mut R1,
    order_rng: &mut R2,
) -> Result<GameState, DomainError> {
    setup.validate()?;

    let impostors = pick_impostors(role_rng, setup.player_count(), setup.impostor_count)?;
    let players = assign_roles(&setup.players, &impostors, &pair);
    let turn_order = shuffle_turn_order(order_rng, setup.player_count());

    // All-bot rosters have nothing to reveal.
    let phase = if players.iter().all(|p| p.is_bot) {
        Phase::Playing
    } else {
        Phase::Reveal
    };

    Ok(GameState {
        phase,
        players,
        turn_order,
        current_turn_position: 0,
        current_round: 1,
        descriptions: Vec::new(),
        votes: Vec::new(),
        voting_order: None,
        current_voter_index: 0,
        word: pair.word,
        hint: pair.hint,
        difficulty: setup.difficulty,
        muted: false,
        allow_impostor_hint: setup.allow_impostor_hint,
    })
}

/// Mark a player's word as seen; transitions `Reveal → Playing` once the
/// last human confirms.
///
/// Returns `true` when the confirmation completed the reveal phase.
pub fn confirm_seen(state: &mut GameState, index: PlayerIndex) -> Result<bool, DomainError> {
    if state.phase != Phase::Reveal {
        return Err(DomainError::validation(
            ValidationKind::PhaseMismatch,
            "Not in reveal phase",
        ));
    }

    state.players[index].has_seen_word = true;

    if state.all_seen_word() {
        state.phase = Phase::Playing;
        return Ok(true);
    }
    Ok(false)
}
