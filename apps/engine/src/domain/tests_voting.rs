use crate::domain::describe::{advance_turn, submit_description};
use crate::domain::state::Phase;
use crate::domain::test_state_helpers::{make_game_state, MakeGameStateArgs};
use crate::domain::voting::{
    compute_voting_order, determine_outcome, fuzzy_match_name, start_voting, submit_vote, tally,
    GameOutcome, VoteOutcome,
};

const MIXED: &[(&str, bool)] = &[
    ("Ana", false),
    ("BotOne", true),
    ("Bruno", false),
    ("BotTwo", true),
];

fn played_out_state() -> crate::domain::state::GameState {
    let mut state = make_game_state(MIXED, MakeGameStateArgs::default());
    for name in ["Ana", "BotOne", "Bruno", "BotTwo"] {
        submit_description(&mut state, name, format!("w-{name}").as_str()).unwrap();
        advance_turn(&mut state);
    }
    state
}

#[test]
fn humans_vote_first_in_roster_order_then_bots() {
    let state = played_out_state();
    let order = compute_voting_order(&state.players);
    assert_eq!(order, vec!["Ana", "Bruno", "BotOne", "BotTwo"]);
}

#[test]
fn start_voting_is_gated_on_round_completion() {
    let mut state = make_game_state(MIXED, MakeGameStateArgs::default());
    submit_description(&mut state, "Ana", "w").unwrap();
    advance_turn(&mut state);

    assert!(start_voting(&mut state).is_err());
    assert_eq!(state.phase, Phase::Playing);

    let mut complete = played_out_state();
    start_voting(&mut complete).unwrap();
    assert_eq!(complete.phase, Phase::Voting);
    assert_eq!(complete.current_voter_index, 0);
}

#[test]
fn votes_follow_the_cursor_and_close_the_phase() {
    let mut state = played_out_state();
    start_voting(&mut state).unwrap();

    // Out of order: Bruno cannot vote before Ana.
    assert!(submit_vote(&mut state, "Bruno", "Ana").is_err());
    // Self-votes rejected.
    assert!(submit_vote(&mut state, "Ana", "Ana").is_err());

    assert_eq!(
        submit_vote(&mut state, "Ana", "BotOne").unwrap(),
        VoteOutcome::Recorded
    );
    assert_eq!(
        submit_vote(&mut state, "Bruno", "BotOne").unwrap(),
        VoteOutcome::Recorded
    );
    assert_eq!(
        submit_vote(&mut state, "BotOne", "Bruno").unwrap(),
        VoteOutcome::Recorded
    );
    assert_eq!(
        submit_vote(&mut state, "BotTwo", "Bruno").unwrap(),
        VoteOutcome::Finished
    );
    assert_eq!(state.phase, Phase::Finished);

    // No further votes accepted once finished.
    assert!(submit_vote(&mut state, "Ana", "Bruno").is_err());
    assert_eq!(state.votes.len(), 4);
}

#[test]
fn tally_counts_and_orders_deterministically() {
    let mut state = played_out_state();
    start_voting(&mut state).unwrap();
    submit_vote(&mut state, "Ana", "BotTwo").unwrap(); // A -> X
    submit_vote(&mut state, "Bruno", "BotOne").unwrap(); // B -> Y
    submit_vote(&mut state, "BotOne", "BotTwo").unwrap(); // C -> X
    submit_vote(&mut state, "BotTwo", "Ana").unwrap();

    let counts = tally(&state.votes);
    assert_eq!(counts[0], ("BotTwo".to_string(), 2));
    // Tie between BotOne and Ana breaks by first-encountered order.
    assert_eq!(counts[1], ("BotOne".to_string(), 1));
    assert_eq!(counts[2], ("Ana".to_string(), 1));
}

#[test]
fn accused_impostor_means_innocents_win() {
    // Impostor is roster index 0 (Ana).
    let mut state = played_out_state();
    start_voting(&mut state).unwrap();
    submit_vote(&mut state, "Ana", "Bruno").unwrap();
    submit_vote(&mut state, "Bruno", "Ana").unwrap();
    submit_vote(&mut state, "BotOne", "Ana").unwrap();
    submit_vote(&mut state, "BotTwo", "Ana").unwrap();

    assert_eq!(
        determine_outcome(&state),
        Some(GameOutcome::InnocentsWin {
            accused: "Ana".to_string()
        })
    );
}

#[test]
fn accused_innocent_means_impostors_win() {
    let mut state = played_out_state();
    start_voting(&mut state).unwrap();
    submit_vote(&mut state, "Ana", "Bruno").unwrap();
    submit_vote(&mut state, "Bruno", "BotOne").unwrap();
    submit_vote(&mut state, "BotOne", "Bruno").unwrap();
    submit_vote(&mut state, "BotTwo", "Bruno").unwrap();

    assert_eq!(
        determine_outcome(&state),
        Some(GameOutcome::ImpostorsWin {
            accused: "Bruno".to_string()
        })
    );
}

#[test]
fn fuzzy_matching_recovers_wrapped_or_partial_names() {
    let state = played_out_state();
    let candidates: Vec<_> = state.players.iter().filter(|p| p.name != "Ana").collect();

    assert_eq!(
        fuzzy_match_name(&candidates, "I vote for bruno"),
        Some("Bruno".to_string())
    );
    assert_eq!(
        fuzzy_match_name(&candidates, "BRUN"),
        Some("Bruno".to_string())
    );
    assert_eq!(fuzzy_match_name(&candidates, "nobody here"), None);
    assert_eq!(fuzzy_match_name(&candidates, "   "), None);
}
