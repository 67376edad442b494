use rand::SeedableRng;
use rand_chacha::ChaCha12Rng;

use crate::domain::roles::{confirm_seen, new_game_state, pick_impostors, shuffle_turn_order};
use crate::domain::state::Phase;
use crate::domain::test_state_helpers::{make_game_state, make_setup, MakeGameStateArgs};
use crate::domain::words::WordPair;

fn pair() -> WordPair {
    WordPair {
        word: "GUITAR".to_string(),
        hint: "Music".to_string(),
    }
}

#[test]
fn exactly_impostor_count_impostors_for_every_legal_count() {
    for player_count in 3..=8usize {
        for impostor_count in 1..player_count {
            let mut rng = ChaCha12Rng::seed_from_u64(99);
            let picked = pick_impostors(&mut rng, player_count, impostor_count).unwrap();
            assert_eq!(picked.len(), impostor_count);
            assert!(picked.iter().all(|&i| i < player_count));
        }
    }
}

#[test]
fn turn_order_is_a_permutation() {
    let mut rng = ChaCha12Rng::seed_from_u64(7);
    let order = shuffle_turn_order(&mut rng, 6);
    let mut sorted = order.clone();
    sorted.sort_unstable();
    assert_eq!(sorted, vec![0, 1, 2, 3, 4, 5]);
}

#[test]
fn bots_start_seen_humans_do_not() {
    let setup = make_setup(&[("Ana", false), ("Bruno", true), ("Carla", true)], 1, None);
    let mut role_rng = ChaCha12Rng::seed_from_u64(1);
    let mut order_rng = ChaCha12Rng::seed_from_u64(2);
    let state = new_game_state(&setup, pair(), &mut role_rng, &mut order_rng).unwrap();

    assert!(!state.players[0].has_seen_word);
    assert!(state.players[1].has_seen_word);
    assert!(state.players[2].has_seen_word);
    assert_eq!(state.phase, Phase::Reveal);
}

#[test]
fn all_bot_roster_skips_reveal() {
    let setup = make_setup(&[("B1", true), ("B2", true), ("B3", true)], 1, None);
    let mut role_rng = ChaCha12Rng::seed_from_u64(1);
    let mut order_rng = ChaCha12Rng::seed_from_u64(2);
    let state = new_game_state(&setup, pair(), &mut role_rng, &mut order_rng).unwrap();
    assert_eq!(state.phase, Phase::Playing);
}

#[test]
fn word_and_hint_are_shared_by_all_players() {
    let setup = make_setup(&[("Ana", false), ("Bruno", false), ("Carla", true)], 2, None);
    let mut role_rng = ChaCha12Rng::seed_from_u64(3);
    let mut order_rng = ChaCha12Rng::seed_from_u64(4);
    let state = new_game_state(&setup, pair(), &mut role_rng, &mut order_rng).unwrap();

    assert_eq!(state.players.iter().filter(|p| p.is_impostor).count(), 2);
    for p in &state.players {
        assert_eq!(p.word, "GUITAR");
        assert_eq!(p.hint, "Music");
    }
}

#[test]
fn reveal_completes_when_last_human_confirms() {
    let mut state = make_game_state(
        &[("Ana", false), ("Bruno", false), ("Carla", true)],
        MakeGameStateArgs {
            phase: Phase::Reveal,
            ..Default::default()
        },
    );
    state.players[0].has_seen_word = false;
    state.players[1].has_seen_word = false;

    assert!(!confirm_seen(&mut state, 0).unwrap());
    assert_eq!(state.phase, Phase::Reveal);

    assert!(confirm_seen(&mut state, 1).unwrap());
    assert_eq!(state.phase, Phase::Playing);
}

#[test]
fn confirm_seen_rejected_outside_reveal() {
    let mut state = make_game_state(
        &[("Ana", false), ("Bruno", false), ("Carla", false)],
        MakeGameStateArgs::default(),
    );
    assert!(confirm_seen(&mut state, 0).is_err());
}
