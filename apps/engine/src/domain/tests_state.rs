use crate::domain::state::{current_turn, derived_round};
use crate::domain::test_state_helpers::{make_game_state, MakeGameStateArgs};

#[test]
fn round_derivation_for_roster_of_four() {
    for count in 0..=3 {
        assert_eq!(derived_round(count, 4), 1, "descriptions={count}");
    }
    for count in 4..=7 {
        assert_eq!(derived_round(count, 4), 2, "descriptions={count}");
    }
    assert_eq!(derived_round(8, 4), 3);
}

#[test]
fn turn_cursor_wraps_around_the_order() {
    let order = vec![2usize, 0, 1];
    assert_eq!(current_turn(&order, 0), 2);
    assert_eq!(current_turn(&order, 1), 0);
    assert_eq!(current_turn(&order, 2), 1);
    assert_eq!(current_turn(&order, 3), 2);
    assert_eq!(current_turn(&order, 7), 0);
}

#[test]
fn derived_round_runs_ahead_of_stored_round() {
    let mut state = make_game_state(
        &[("Ana", false), ("Bruno", false), ("Carla", false)],
        MakeGameStateArgs::default(),
    );
    assert_eq!(state.derived_round(), 1);

    for name in ["Ana", "Bruno", "Carla"] {
        state.descriptions.push(crate::domain::state::Description {
            player_name: name.to_string(),
            text: format!("w-{name}"),
            round: 1,
        });
    }

    // Transcript says round 2, stored round still 1 until announced.
    assert_eq!(state.derived_round(), 2);
    assert_eq!(state.current_round, 1);
    assert!(state.round_complete());
}

#[test]
fn current_voter_tracks_the_cursor() {
    let mut state = make_game_state(
        &[("Ana", false), ("Bruno", true), ("Carla", false)],
        MakeGameStateArgs::default(),
    );
    assert!(state.current_voter_name().is_none());

    state.voting_order = Some(vec![
        "Ana".to_string(),
        "Carla".to_string(),
        "Bruno".to_string(),
    ]);
    assert_eq!(state.current_voter_name(), Some("Ana"));

    state.current_voter_index = 2;
    assert_eq!(state.current_voter_name(), Some("Bruno"));

    state.current_voter_index = 3;
    assert!(state.current_voter_name().is_none());
}
