//! Wire protocol for the remote suggestion collaborator.
//!
//! The service speaks a JSON request/response dialect keyed by an optional
//! `action` discriminator. On this side of the boundary that grab-bag is a
//! proper tagged union: each variant is constructed from an already-validated
//! domain view, so no optional-field soup leaks into the engine.

use serde::{Deserialize, Serialize};

use crate::config::Difficulty;
use crate::domain::player_view::{DescribeView, VoteView};
use crate::domain::state::Description;

/// Requests the collaborator understands.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SuggestionRequest {
    Describe(DescribeRequest),
    Vote(VoteRequest),
    Deduce(DeduceRequest),
}

/// Ask for a one-word description (no `action` field on the wire).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribeRequest {
    pub word: String,
    pub hint: String,
    pub is_impostor: bool,
    pub previous_descriptions: Vec<String>,
    pub difficulty: Difficulty,
}

impl From<&DescribeView> for DescribeRequest {
    fn from(view: &DescribeView) -> Self {
        Self {
            word: view.word.clone(),
            hint: view.hint.clone(),
            is_impostor: view.is_impostor,
            previous_descriptions: view.previous_descriptions.clone(),
            difficulty: view.difficulty,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerRef {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DescriptionRef {
    pub player_name: String,
    pub text: String,
    pub round: u32,
}

impl From<&Description> for DescriptionRef {
    fn from(d: &Description) -> Self {
        Self {
            player_name: d.player_name.clone(),
            text: d.text.clone(),
            round: d.round,
        }
    }
}

/// Ask which player to vote for (`action: "vote"`).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteRequest {
    pub action: &'static str,
    pub players: Vec<PlayerRef>,
    pub descriptions: Vec<DescriptionRef>,
    pub voter_name: String,
    pub voter_is_impostor: bool,
    pub word: String,
}

impl From<&VoteView> for VoteRequest {
    fn from(view: &VoteView) -> Self {
        Self {
            action: "vote",
            players: view
                .players
                .iter()
                .map(|name| PlayerRef { name: name.clone() })
                .collect(),
            descriptions: view.descriptions.iter().map(DescriptionRef::from).collect(),
            voter_name: view.voter_name.clone(),
            voter_is_impostor: view.voter_is_impostor,
            word: view.word.clone(),
        }
    }
}

/// Ask an impostor brain to guess the secret word (`action: "deduce"`).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeduceRequest {
    pub action: &'static str,
    pub hint: String,
    pub previous_descriptions: Vec<String>,
}

impl DeduceRequest {
    pub fn new(hint: String, previous_descriptions: Vec<String>) -> Self {
        Self {
            action: "deduce",
            hint,
            previous_descriptions,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DescribeResponse {
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteResponse {
    pub voted_for: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GuessResponse {
    pub guess: String,
}

/// Reduce a collaborator description reply to a single clean word: trim,
/// strip trailing punctuation, keep the first whitespace/comma token.
pub fn clean_description(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches(['.', ',', '!', '?', ';', ':']);
    trimmed
        .split([' ', '\t', '\n', ','])
        .find(|token| !token.is_empty())
        .unwrap_or("")
        .to_string()
}
