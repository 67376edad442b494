//! Voting engine: ordering, collection, tally, and outcome.

use crate::domain::state::{require_voting_order, GamePlayer, GameState, Phase, Vote};
use crate::errors::domain::{ConflictKind, DomainError, ValidationKind};

/// Voting order: all human players in roster order, then all bot players in
/// roster order. Bots always vote last, regardless of turn order.
pub fn compute_voting_order(players: &[GamePlayer]) -> Vec<String> {
    let humans = players.iter().filter(|p| !p.is_bot).map(|p| p.name.clone());
    let bots = players.iter().filter(|p| p.is_bot).map(|p| p.name.clone());
    humans.chain(bots).collect()
}

/// Enter the voting phase.
///
/// Gated on round completion: every player must have spoken in the current
/// round before voting can start.
pub fn start_voting(state: &mut GameState) -> Result<(), DomainError> {
    if state.phase != Phase::Playing {
        return Err(DomainError::validation(
            ValidationKind::PhaseMismatch,
            "Voting can only start from the playing phase",
        ));
    }
    if !state.round_complete() {
        return Err(DomainError::validation(
            ValidationKind::RoundIncomplete,
            format!(
                "Voting needs {} descriptions, got {}",
                state.roster_size() * state.current_round as usize,
                state.descriptions.len()
            ),
        ));
    }

    state.phase = Phase::Voting;
    state.votes = Vec::new();
    state.voting_order = Some(compute_voting_order(&state.players));
    state.current_voter_index = 0;
    Ok(())
}

/// What a successful vote did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteOutcome {
    /// Vote recorded; the cursor moved to the next voter.
    Recorded,
    /// Vote recorded and it was the last one: phase is now `Finished`.
    Finished,
}

/// Accept one vote from the voter the cursor points at.
///
/// The vote is recorded before the finished transition is evaluated.
pub fn submit_vote(
    state: &mut GameState,
    voter_name: &str,
    voted_for_name: &str,
) -> Result<VoteOutcome, DomainError> {
    if state.phase != Phase::Voting {
        return Err(DomainError::validation(
            ValidationKind::PhaseMismatch,
            "Votes are only accepted during voting",
        ));
    }

    let order = require_voting_order(state, "submit_vote")?;
    let expected = order.get(state.current_voter_index).ok_or_else(|| {
        DomainError::conflict(ConflictKind::VotingClosed, "All votes are already in")
    })?;
    if expected != voter_name {
        return Err(DomainError::validation(
            ValidationKind::OutOfTurn,
            format!("Not {voter_name}'s turn to vote, expected {expected}"),
        ));
    }
    if voter_name == voted_for_name {
        return Err(DomainError::validation(
            ValidationKind::SelfVote,
            "Players cannot vote for themselves",
        ));
    }

    let (_, voter) = state.find_player(voter_name)?;
    let is_bot = voter.is_bot;
    state.find_player(voted_for_name)?;

    state.votes.push(Vote {
        voter_name: voter_name.to_string(),
        voted_for_name: voted_for_name.to_string(),
        is_bot,
    });
    state.current_voter_index += 1;

    let order_len = require_voting_order(state, "submit_vote")?.len();
    if state.current_voter_index >= order_len {
        state.phase = Phase::Finished;
        return Ok(VoteOutcome::Finished);
    }
    Ok(VoteOutcome::Recorded)
}

/// Vote counts per target, sorted by count descending.
///
/// Ties break by first-encountered order over the vote log: deterministic,
/// but not a fairness guarantee.
pub fn tally(votes: &[Vote]) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for vote in votes {
        match counts.iter_mut().find(|(name, _)| name == &vote.voted_for_name) {
            Some((_, count)) => *count += 1,
            None => counts.push((vote.voted_for_name.clone(), 1)),
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// The player with the most votes, if any votes were cast.
pub fn accused(state: &GameState) -> Option<&GamePlayer> {
    let (name, _) = tally(&state.votes).into_iter().next()?;
    state.players.iter().find(|p| p.name == name)
}

/// Final result of a voted-out game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameOutcome {
    /// The accused was an impostor: the innocents win.
    InnocentsWin { accused: String },
    /// The accused was innocent: the impostor(s) win.
    ImpostorsWin { accused: String },
}

/// Evaluate the outcome once voting has finished.
pub fn determine_outcome(state: &GameState) -> Option<GameOutcome> {
    let accused = accused(state)?;
    if accused.is_impostor {
        Some(GameOutcome::InnocentsWin {
            accused: accused.name.clone(),
        })
    } else {
        Some(GameOutcome::ImpostorsWin {
            accused: accused.name.clone(),
        })
    }
}

/// Fuzzy-match a collaborator vote reply against candidate player names.
///
/// Case-insensitive substring match in both directions (the reply may wrap
/// the name in extra words, or abbreviate it). Returns the canonical name.
pub fn fuzzy_match_name(candidates: &[&GamePlayer], reply: &str) -> Option<String> {
    let reply = reply.trim().to_lowercase();
    if reply.is_empty() {
        return None;
    }
    candidates
        .iter()
        .find(|p| {
            let name = p.name.to_lowercase();
            reply.contains(&name) || name.contains(&reply)
        })
        .map(|p| p.name.clone())
}
