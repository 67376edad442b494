//! Description engine: one description per turn, uniqueness enforced,
//! secret-word leakage detected.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::domain::state::{Description, GameState, Phase, SKIPPED_TEXT};
use crate::errors::domain::{ConflictKind, DomainError, ValidationKind};

/// Normalization used for every description comparison: NFD decomposition
/// with combining marks stripped, lowercased, trimmed.
pub fn normalize(text: &str) -> String {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
        .trim()
        .to_string()
}

/// Whether `text` would be rejected as a duplicate of the transcript.
///
/// Scope is the entire game, not the current round: a word said in round 1
/// stays blocked in round 3.
pub fn is_duplicate(state: &GameState, text: &str) -> bool {
    let normalized = normalize(text);
    state
        .descriptions
        .iter()
        .any(|d| normalize(&d.text) == normalized)
}

/// Whether `text` leaks the secret word.
///
/// Substring containment on normalized text, deliberately generous to the
/// innocents' detection odds (a description containing the word inside a
/// longer word still triggers).
pub fn leaks_secret_word(word: &str, text: &str) -> bool {
    normalize(text).contains(&normalize(word))
}

/// What a successful submission did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescribeOutcome {
    /// Description recorded; caller narrates it and then advances the turn.
    Recorded,
    /// Description recorded and the secret word leaked: the game moved to
    /// the terminal `ImpostorWins` phase. The turn does not advance.
    ImpostorWon,
}

fn require_acting_player(state: &GameState, player_name: &str) -> Result<(), DomainError> {
    if state.phase != Phase::Playing {
        return Err(DomainError::validation(
            ValidationKind::PhaseMismatch,
            "Descriptions are only accepted while playing",
        ));
    }
    let expected = state.current_player();
    if expected.name != player_name {
        return Err(DomainError::validation(
            ValidationKind::OutOfTurn,
            format!(
                "Not {player_name}'s turn, expected {expected}",
                expected = expected.name
            ),
        ));
    }
    // Invariant while playing: every consumed position recorded exactly one
    // entry, so the transcript length equals the turn position between
    // turns. A longer transcript means this position already resolved and
    // is waiting on narration before the advance.
    if state.descriptions.len() as u64 != state.current_turn_position {
        return Err(DomainError::conflict(
            ConflictKind::TurnInFlight,
            "Current turn already has a recorded entry",
        ));
    }
    Ok(())
}

/// Accept one description for the player at the current turn position.
///
/// On rejection nothing is mutated and the turn does not advance. On
/// success the description is recorded *before* any narration happens;
/// the caller advances the turn afterwards (unless the impostor won).
pub fn submit_description(
    state: &mut GameState,
    player_name: &str,
    text: &str,
) -> Result<DescribeOutcome, DomainError> {
    require_acting_player(state, player_name)?;

    let text = text.trim();
    if text.is_empty() {
        return Err(DomainError::validation(
            ValidationKind::EmptyDescription,
            "Description must be non-empty",
        ));
    }

    if is_duplicate(state, text) {
        return Err(DomainError::validation(
            ValidationKind::DuplicateDescription,
            format!("\"{text}\" was already said this game"),
        ));
    }

    let (index, _) = state.find_player(player_name)?;
    let leaked = state.players[index].is_impostor && leaks_secret_word(&state.word, text);

    // Recorded first in both branches so the transcript shows the leak.
    state.descriptions.push(Description {
        player_name: player_name.to_string(),
        text: text.to_string(),
        round: state.current_round,
    });

    if leaked {
        state.phase = Phase::ImpostorWins;
        return Ok(DescribeOutcome::ImpostorWon);
    }

    Ok(DescribeOutcome::Recorded)
}

/// Skip the current turn: records the skip marker in place of a real
/// description. Still consumes the turn and counts toward round completion.
pub fn skip_turn(state: &mut GameState, player_name: &str) -> Result<(), DomainError> {
    require_acting_player(state, player_name)?;

    state.descriptions.push(Description {
        player_name: player_name.to_string(),
        text: SKIPPED_TEXT.to_string(),
        round: state.current_round,
    });
    Ok(())
}

/// Advance the turn cursor by exactly one position.
pub fn advance_turn(state: &mut GameState) {
    state.current_turn_position += 1;
}
