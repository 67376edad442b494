//! Test support utilities for the impostor game engine
//!
//! Provides unified logging initialization shared by unit tests and
//! integration tests.

pub mod test_logging;
