//! Domain-level error type used across the session controller, the game
//! rules and the Hall of Fame repository.
//!
//! This error type is storage- and presentation-agnostic. Binaries return
//! `Result<T, crate::error::AppError>` and convert from `DomainError`
//! using the provided `From<DomainError> for AppError` implementation.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::errors::ErrorCode;

/// Validation kinds: input or rule violations the caller can recover from.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    /// `start_game` with a missing host or fewer than two named players.
    NotReady,
    /// Points outside `0..=max_points_per_task`.
    InvalidScore,
    /// Operation not legal in the current phase.
    PhaseMismatch,
    /// Roster index outside the session roster.
    UnknownPlayer,
    /// Empty prompt catalog and similar construction errors.
    Other(String),
}

/// Conflict kinds
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConflictKind {
    /// Another transition is still in flight.
    Busy,
    Other(String),
}

/// Infra error kinds to distinguish operational failures
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InfraErrorKind {
    /// Key-value store read or write failed.
    Persistence,
    /// Stored payload could not be decoded.
    DataCorruption,
    Other(String),
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Input/user validation or game rule violation
    Validation(ValidationKind, String),
    /// Overlapping or otherwise conflicting request
    Conflict(ConflictKind, String),
    /// Infrastructure/operational failures
    Infra(InfraErrorKind, String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Validation(kind, d) => write!(f, "validation {kind:?}: {d}"),
            DomainError::Conflict(kind, d) => write!(f, "conflict {kind:?}: {d}"),
            DomainError::Infra(kind, d) => write!(f, "infra {kind:?}: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }
    pub fn conflict(kind: ConflictKind, detail: impl Into<String>) -> Self {
        Self::Conflict(kind, detail.into())
    }
    pub fn infra(kind: InfraErrorKind, detail: impl Into<String>) -> Self {
        Self::Infra(kind, detail.into())
    }

    pub fn not_ready(detail: impl Into<String>) -> Self {
        Self::validation(ValidationKind::NotReady, detail)
    }
    pub fn invalid_score(detail: impl Into<String>) -> Self {
        Self::validation(ValidationKind::InvalidScore, detail)
    }
    pub fn phase_mismatch(detail: impl Into<String>) -> Self {
        Self::validation(ValidationKind::PhaseMismatch, detail)
    }
    pub fn busy(detail: impl Into<String>) -> Self {
        Self::conflict(ConflictKind::Busy, detail)
    }
    pub fn persistence(detail: impl Into<String>) -> Self {
        Self::infra(InfraErrorKind::Persistence, detail)
    }

    /// Stable code for this error, suitable for display and logs.
    pub fn code(&self) -> ErrorCode {
        match self {
            DomainError::Validation(kind, _) => match kind {
                ValidationKind::NotReady => ErrorCode::NotReady,
                ValidationKind::InvalidScore => ErrorCode::InvalidScore,
                ValidationKind::PhaseMismatch => ErrorCode::PhaseMismatch,
                ValidationKind::UnknownPlayer => ErrorCode::UnknownPlayer,
                ValidationKind::Other(_) => ErrorCode::ValidationError,
            },
            DomainError::Conflict(kind, _) => match kind {
                ConflictKind::Busy => ErrorCode::SessionBusy,
                ConflictKind::Other(_) => ErrorCode::Conflict,
            },
            DomainError::Infra(kind, _) => match kind {
                InfraErrorKind::Persistence => ErrorCode::PersistenceFailure,
                InfraErrorKind::DataCorruption => ErrorCode::DataCorruption,
                InfraErrorKind::Other(_) => ErrorCode::Internal,
            },
        }
    }

    /// True for errors the controller degrades instead of rejecting.
    pub fn is_persistence(&self) -> bool {
        matches!(self, DomainError::Infra(_, _))
    }
}
