//! Views of game state handed to bot brains.
//!
//! Brains never see the full [`GameState`]; they get exactly the slice a
//! player in that seat could know, so a misbehaving brain cannot act on
//! hidden information.

use crate::config::Difficulty;
use crate::domain::state::{Description, GameState, PlayerIndex};

/// What a bot knows when asked for a description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescribeView {
    pub player_name: String,
    /// The secret word. Meaningful only when `is_impostor` is false; an
    /// impostor brain must rely on the hint and the transcript.
    pub word: String,
    pub hint: String,
    pub is_impostor: bool,
    pub previous_descriptions: Vec<String>,
    pub difficulty: Difficulty,
}

impl DescribeView {
    pub fn for_player(state: &GameState, index: PlayerIndex) -> Self {
        let player = &state.players[index];
        Self {
            player_name: player.name.clone(),
            word: player.word.clone(),
            hint: player.hint.clone(),
            is_impostor: player.is_impostor,
            previous_descriptions: state.descriptions.iter().map(|d| d.text.clone()).collect(),
            difficulty: state.difficulty,
        }
    }
}

/// What a bot knows when asked to vote: the full transcript and roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoteView {
    pub voter_name: String,
    pub voter_is_impostor: bool,
    pub word: String,
    /// Every roster name, in roster order.
    pub players: Vec<String>,
    /// Names the voter may legally vote for (everyone but themselves).
    pub candidates: Vec<String>,
    pub descriptions: Vec<Description>,
}

impl VoteView {
    pub fn for_voter(state: &GameState, voter_name: &str, voter_is_impostor: bool) -> Self {
        Self {
            voter_name: voter_name.to_string(),
            voter_is_impostor,
            word: state.word.clone(),
            players: state.players.iter().map(|p| p.name.clone()).collect(),
            candidates: state
                .players
                .iter()
                .filter(|p| p.name != voter_name)
                .map(|p| p.name.clone())
                .collect(),
            descriptions: state.descriptions.clone(),
        }
    }
}
