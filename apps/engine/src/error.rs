use thiserror::Error;

use crate::errors::domain::{ConflictKind, DomainError, ValidationKind};

/// Application-level error for service entry points and the binary.
///
/// Domain code reports [`DomainError`]; the service layer converts via the
/// `From` impl below so callers see one error surface with stable codes.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {detail}")]
    Validation { code: &'static str, detail: String },
    #[error("Not found: {detail}")]
    NotFound { code: &'static str, detail: String },
    #[error("Conflict: {detail}")]
    Conflict { code: &'static str, detail: String },
    #[error("Internal error: {detail}")]
    Internal { detail: String },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
}

impl AppError {
    /// Stable machine-readable code for logging and UI notices.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation { code, .. } => code,
            AppError::NotFound { code, .. } => code,
            AppError::Conflict { code, .. } => code,
            AppError::Internal { .. } => "INTERNAL",
            AppError::Config { .. } => "CONFIG_ERROR",
        }
    }

    /// Rejected preconditions are user-visible transient notices, never fatal.
    pub fn is_transient_notice(&self) -> bool {
        matches!(
            self,
            AppError::Validation { .. } | AppError::Conflict { .. }
        )
    }

    pub fn invalid(code: &'static str, detail: String) -> Self {
        Self::Validation { code, detail }
    }

    pub fn not_found(code: &'static str, detail: String) -> Self {
        Self::NotFound { code, detail }
    }

    pub fn conflict(code: &'static str, detail: String) -> Self {
        Self::Conflict { code, detail }
    }

    pub fn internal(detail: String) -> Self {
        Self::Internal { detail }
    }

    pub fn config(detail: String) -> Self {
        Self::Config { detail }
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match &err {
            DomainError::Validation(kind, detail) => {
                let code = match kind {
                    ValidationKind::OutOfTurn => "OUT_OF_TURN",
                    ValidationKind::PhaseMismatch => "PHASE_MISMATCH",
                    ValidationKind::EmptyDescription => "EMPTY_DESCRIPTION",
                    ValidationKind::DuplicateDescription => "DUPLICATE_DESCRIPTION",
                    ValidationKind::SelfVote => "SELF_VOTE",
                    ValidationKind::RoundIncomplete => "ROUND_INCOMPLETE",
                    ValidationKind::InvalidConfig => "INVALID_CONFIG",
                    ValidationKind::Other(_) => "VALIDATION",
                };
                AppError::invalid(code, detail.clone())
            }
            DomainError::Conflict(kind, detail) => {
                let code = match kind {
                    ConflictKind::VotingClosed => "VOTING_CLOSED",
                    ConflictKind::StaleGeneration => "STALE_GENERATION",
                    ConflictKind::TurnInFlight => "TURN_IN_FLIGHT",
                    ConflictKind::Other(_) => "CONFLICT",
                };
                AppError::conflict(code, detail.clone())
            }
            DomainError::NotFound(_, detail) => AppError::not_found("NOT_FOUND", detail.clone()),
            DomainError::Infra(_, detail) => AppError::internal(detail.clone()),
        }
    }
}
