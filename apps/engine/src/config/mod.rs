//! Engine configuration: the setup→play handoff.

pub mod setup;

pub use setup::{Difficulty, GameSetup, SetupPlayer};
