//! Domain layer: pure game logic types and helpers.

pub mod describe;
pub mod player_view;
pub mod roles;
pub mod seed_derivation;
pub mod state;
pub mod transition;
pub mod voting;
pub mod words;

#[cfg(test)]
mod test_state_helpers;

#[cfg(test)]
mod tests_describe;
#[cfg(test)]
mod tests_props_turns;
#[cfg(test)]
mod tests_roles;
#[cfg(test)]
mod tests_state;
#[cfg(test)]
mod tests_voting;

// Re-exports for ergonomics
pub use describe::{normalize, DescribeOutcome};
pub use player_view::{DescribeView, VoteView};
pub use seed_derivation::{
    derive_fallback_seed, derive_order_seed, derive_role_seed, derive_word_seed,
};
pub use state::{Description, GamePlayer, GameState, Phase, PlayerIndex, Vote};
pub use transition::{derive_events, GameEvent, LifecycleView};
pub use voting::{GameOutcome, VoteOutcome};
pub use words::{draw_word, WordPair};
