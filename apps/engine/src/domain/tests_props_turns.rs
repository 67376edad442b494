//! Property tests for rotation fairness, role invariants, and round math.

use std::collections::HashSet;

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha12Rng;

use crate::domain::roles::{pick_impostors, shuffle_turn_order};
use crate::domain::state::{current_turn, derived_round};

proptest! {
    #[test]
    fn shuffled_order_is_always_a_permutation(
        player_count in 3usize..12,
        seed in any::<u64>(),
    ) {
        let mut rng = ChaCha12Rng::seed_from_u64(seed);
        let order = shuffle_turn_order(&mut rng, player_count);

        prop_assert_eq!(order.len(), player_count);
        let unique: HashSet<_> = order.iter().copied().collect();
        prop_assert_eq!(unique.len(), player_count);
        prop_assert!(order.iter().all(|&i| i < player_count));
    }

    #[test]
    fn every_window_of_roster_size_visits_each_player_once(
        player_count in 3usize..10,
        seed in any::<u64>(),
        start in 0u64..1000,
    ) {
        let mut rng = ChaCha12Rng::seed_from_u64(seed);
        let order = shuffle_turn_order(&mut rng, player_count);

        let visited: HashSet<_> = (start..start + player_count as u64)
            .map(|pos| current_turn(&order, pos))
            .collect();
        prop_assert_eq!(visited.len(), player_count);
    }

    #[test]
    fn role_invariant_holds_for_every_legal_impostor_count(
        player_count in 3usize..10,
        seed in any::<u64>(),
    ) {
        for impostor_count in 1..player_count {
            let mut rng = ChaCha12Rng::seed_from_u64(seed);
            let picked = pick_impostors(&mut rng, player_count, impostor_count).unwrap();
            prop_assert_eq!(picked.len(), impostor_count);
            prop_assert!(picked.iter().all(|&i| i < player_count));
        }
    }

    #[test]
    fn round_is_monotonic_in_description_count(
        roster in 3usize..10,
        count in 0usize..60,
    ) {
        let here = derived_round(count, roster);
        let next = derived_round(count + 1, roster);
        prop_assert!(next == here || next == here + 1);
        prop_assert_eq!(derived_round(roster * 2, roster), 3);
    }
}
