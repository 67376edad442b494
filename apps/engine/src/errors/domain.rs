//! Domain-level error type used across the pure game logic and the
//! orchestration service.
//!
//! This error type is transport-agnostic. Service entry points return
//! `Result<T, crate::error::AppError>` and convert from `DomainError`
//! using the provided `From<DomainError> for AppError` implementation.
//!
//! Per the engine's failure policy, every `Validation` and `Conflict`
//! value is a rejected precondition: state has not been mutated and the
//! game continues. `Infra` values are recovered internally (fallbacks)
//! and at most logged.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Validation kinds: rejected player actions and bad setup input.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    /// Acting player is not the player the turn/voting cursor points at.
    OutOfTurn,
    /// Action is not legal in the current phase.
    PhaseMismatch,
    /// Submitted description is empty after trimming.
    EmptyDescription,
    /// Normalized description equals one already in the transcript.
    DuplicateDescription,
    /// A voter tried to vote for themselves.
    SelfVote,
    /// Vote-start requested before every player spoke this round.
    RoundIncomplete,
    /// Configuration handed in from setup is unusable.
    InvalidConfig,
    Other(String),
}

/// Infra error kinds to distinguish operational failures
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InfraErrorKind {
    Timeout,
    CollaboratorUnavailable,
    Other(String),
}

/// Domain-level not found entities (minimal set; extend as needed)
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NotFoundKind {
    Player,
    Word,
    Other(String),
}

/// Domain-level conflict kinds (extend as needed)
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConflictKind {
    /// Voting cursor already ran past the end; no further votes accepted.
    VotingClosed,
    /// An async result arrived for a game generation that no longer exists.
    StaleGeneration,
    /// The current turn already has a recorded entry awaiting its narration
    /// and advance; a second entry for the same position is rejected.
    TurnInFlight,
    Other(String),
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Input/user validation or business rule violation
    Validation(ValidationKind, String),
    /// Semantic conflict
    Conflict(ConflictKind, String),
    /// Missing resource in domain terms
    NotFound(NotFoundKind, String),
    /// Infrastructure/operational failures
    Infra(InfraErrorKind, String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Validation(kind, d) => write!(f, "validation {kind:?}: {d}"),
            DomainError::Conflict(kind, d) => write!(f, "conflict {kind:?}: {d}"),
            DomainError::NotFound(kind, d) => write!(f, "not found {kind:?}: {d}"),
            DomainError::Infra(kind, d) => write!(f, "infra {kind:?}: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }
    pub fn validation_other(detail: impl Into<String>) -> Self {
        let detail = detail.into();
        Self::Validation(ValidationKind::Other(detail.clone()), detail)
    }
    pub fn conflict(kind: ConflictKind, detail: impl Into<String>) -> Self {
        Self::Conflict(kind, detail.into())
    }
    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound(kind, detail.into())
    }
    pub fn infra(kind: InfraErrorKind, detail: impl Into<String>) -> Self {
        Self::Infra(kind, detail.into())
    }

    /// Whether this error is a rejected precondition (no state mutated).
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            DomainError::Validation(_, _) | DomainError::Conflict(_, _)
        )
    }
}
