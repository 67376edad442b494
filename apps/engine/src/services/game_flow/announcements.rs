//! Narration wording for lifecycle events and results.

use crate::domain::transition::GameEvent;
use crate::domain::voting::GameOutcome;

/// The spoken line for a lifecycle event.
pub fn narration_line(event: &GameEvent) -> String {
    match event {
        GameEvent::GameStarted => "All set! Starting the game".to_string(),
        GameEvent::RoundBegan { round } => format!("Round {round} begins"),
        GameEvent::TurnBecame { player } => format!("It is {player}'s turn"),
        GameEvent::VotingStarted => "Time to vote! Who is the impostor?".to_string(),
        GameEvent::VotingFinished => "Voting finished!".to_string(),
        GameEvent::ImpostorWon { player } => {
            format!("{player} said the secret word! The impostor wins!")
        }
    }
}

/// The spoken line for a voted-out result.
pub fn result_line(outcome: &GameOutcome) -> String {
    match outcome {
        GameOutcome::InnocentsWin { accused } => {
            format!("{accused} was discovered! They were the impostor. The innocents win!")
        }
        GameOutcome::ImpostorsWin { accused } => {
            format!("{accused} was innocent! The impostor wins the game.")
        }
    }
}
