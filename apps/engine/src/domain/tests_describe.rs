use crate::domain::describe::{
    advance_turn, is_duplicate, leaks_secret_word, normalize, skip_turn, submit_description,
    DescribeOutcome,
};
use crate::domain::state::{Phase, SKIPPED_TEXT};
use crate::domain::test_state_helpers::{make_game_state, MakeGameStateArgs};

const ROSTER: &[(&str, bool)] = &[("Ana", false), ("Bruno", false), ("Carla", true)];

#[test]
fn normalization_strips_diacritics_case_and_whitespace() {
    assert_eq!(normalize("  Canción  "), "cancion");
    assert_eq!(normalize("GUITARRA"), "guitarra");
    assert_eq!(normalize("pingüino"), "pinguino");
}

#[test]
fn records_description_and_stamps_round() {
    let mut state = make_game_state(ROSTER, MakeGameStateArgs::default());

    let outcome = submit_description(&mut state, "Ana", "strings").unwrap();
    assert_eq!(outcome, DescribeOutcome::Recorded);
    assert_eq!(state.descriptions.len(), 1);
    assert_eq!(state.descriptions[0].player_name, "Ana");
    assert_eq!(state.descriptions[0].round, 1);

    // Caller advances after narration.
    advance_turn(&mut state);
    assert_eq!(state.current_player().name, "Bruno");
}

#[test]
fn rejects_out_of_turn_and_wrong_phase() {
    let mut state = make_game_state(ROSTER, MakeGameStateArgs::default());
    assert!(submit_description(&mut state, "Bruno", "strings").is_err());

    state.phase = Phase::Voting;
    assert!(submit_description(&mut state, "Ana", "strings").is_err());
    assert!(state.descriptions.is_empty());
}

#[test]
fn rejects_empty_submission() {
    let mut state = make_game_state(ROSTER, MakeGameStateArgs::default());
    assert!(submit_description(&mut state, "Ana", "   ").is_err());
    assert!(state.descriptions.is_empty());
}

#[test]
fn duplicate_rejection_spans_the_whole_game() {
    let mut state = make_game_state(ROSTER, MakeGameStateArgs::default());

    submit_description(&mut state, "Ana", "Canción").unwrap();
    advance_turn(&mut state);

    // Same word, different casing/accents, later player: rejected, transcript
    // unchanged, turn not advanced.
    let before = state.descriptions.len();
    let err = submit_description(&mut state, "Bruno", "  cancion ").unwrap_err();
    assert!(err.is_precondition());
    assert_eq!(state.descriptions.len(), before);
    assert_eq!(state.current_player().name, "Bruno");

    assert!(is_duplicate(&state, "CANCIÓN"));
    assert!(!is_duplicate(&state, "otra"));
}

#[test]
fn impostor_leak_is_substring_based() {
    assert!(leaks_secret_word("GUITARRA", "mi guitarra es roja"));
    assert!(!leaks_secret_word("GUITARRA", "instrumento"));
    // Deliberately generous: compound words containing the secret still leak.
    assert!(leaks_secret_word("SOL", "parasol"));
}

#[test]
fn impostor_leak_ends_the_game_and_keeps_the_description() {
    let mut state = make_game_state(
        ROSTER,
        MakeGameStateArgs {
            word: "GUITARRA",
            impostor_index: 0,
            ..Default::default()
        },
    );

    let outcome = submit_description(&mut state, "Ana", "mi guitarra es roja").unwrap();
    assert_eq!(outcome, DescribeOutcome::ImpostorWon);
    assert_eq!(state.phase, Phase::ImpostorWins);
    // Recorded first, for the transcript.
    assert_eq!(state.descriptions.len(), 1);
    // Turn did not advance.
    assert_eq!(state.current_turn_position, 0);
}

#[test]
fn innocent_saying_the_word_is_not_a_leak() {
    let mut state = make_game_state(
        ROSTER,
        MakeGameStateArgs {
            word: "GUITARRA",
            impostor_index: 2,
            ..Default::default()
        },
    );

    let outcome = submit_description(&mut state, "Ana", "guitarra").unwrap();
    assert_eq!(outcome, DescribeOutcome::Recorded);
    assert_eq!(state.phase, Phase::Playing);
}

#[test]
fn skip_records_marker_and_consumes_turn() {
    let mut state = make_game_state(ROSTER, MakeGameStateArgs::default());

    skip_turn(&mut state, "Ana").unwrap();
    advance_turn(&mut state);
    assert_eq!(state.descriptions[0].text, SKIPPED_TEXT);
    assert_eq!(state.current_player().name, "Bruno");

    // Repeated skips are allowed even though the marker text repeats.
    skip_turn(&mut state, "Bruno").unwrap();
    advance_turn(&mut state);
    assert_eq!(state.descriptions.len(), 2);
}

#[test]
fn votability_gate_requires_full_round() {
    let mut state = make_game_state(ROSTER, MakeGameStateArgs::default());
    assert!(!state.round_complete());

    for name in ["Ana", "Bruno", "Carla"] {
        submit_description(&mut state, name, format!("word-{name}").as_str()).unwrap();
        advance_turn(&mut state);
    }
    assert!(state.round_complete());
}
