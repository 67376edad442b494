//! Error handling for the impostor game engine.

pub mod domain;

pub use domain::DomainError;
