//! RNG seed derivation utilities for deterministic game behavior.
//!
//! Derives unique-but-deterministic seeds for the independent random draws a
//! game makes (word selection, role assignment, turn-order shuffle, fallback
//! phrasing) from one base seed. Each draw gets its own stream so a reset
//! re-rolls every one of them independently.

/// Derive the seed for the word draw of game number `game_no`.
///
/// `game_no` increments on every reset so a new game draws fresh even when
/// the base seed is pinned for reproducibility.
pub fn derive_word_seed(base_seed: u64, game_no: u64) -> u64 {
    base_seed
        .wrapping_add(game_no.wrapping_mul(1_000_000))
        .wrapping_add(1)
}

/// Derive the seed for impostor selection of game number `game_no`.
pub fn derive_role_seed(base_seed: u64, game_no: u64) -> u64 {
    base_seed
        .wrapping_add(game_no.wrapping_mul(1_000_000))
        .wrapping_add(2)
}

/// Derive the seed for the turn-order shuffle of game number `game_no`.
pub fn derive_order_seed(base_seed: u64, game_no: u64) -> u64 {
    base_seed
        .wrapping_add(game_no.wrapping_mul(1_000_000))
        .wrapping_add(3)
}

/// Derive the seed for the deterministic fallback phrase/vote stream.
pub fn derive_fallback_seed(base_seed: u64, game_no: u64) -> u64 {
    base_seed
        .wrapping_add(game_no.wrapping_mul(1_000_000))
        .wrapping_add(4)
}
