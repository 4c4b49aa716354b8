//! Error codes for the Spotlight game core.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings the
//! presentation layer shows or logs.

use core::fmt;

/// Centralized error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Setup and scoring validation
    /// Host name missing or fewer than two named players
    NotReady,
    /// Points outside the allowed range
    InvalidScore,
    /// Operation not allowed in the current phase
    PhaseMismatch,
    /// Roster index does not exist
    UnknownPlayer,
    /// General validation error
    ValidationError,

    // Concurrency
    /// A previous call is still being processed
    SessionBusy,
    /// Generic conflict
    Conflict,

    // Persistence
    /// Hall of Fame could not be read or written
    PersistenceFailure,
    /// Stored Hall of Fame payload is unreadable
    DataCorruption,

    // System
    /// Configuration error
    ConfigError,
    /// Local I/O error outside the game store
    IoError,
    /// Internal error
    Internal,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NotReady => "NOT_READY",
            Self::InvalidScore => "INVALID_SCORE",
            Self::PhaseMismatch => "PHASE_MISMATCH",
            Self::UnknownPlayer => "UNKNOWN_PLAYER",
            Self::ValidationError => "VALIDATION_ERROR",

            Self::SessionBusy => "SESSION_BUSY",
            Self::Conflict => "CONFLICT",

            Self::PersistenceFailure => "PERSISTENCE_FAILURE",
            Self::DataCorruption => "DATA_CORRUPTION",

            Self::ConfigError => "CONFIG_ERROR",
            Self::IoError => "IO_ERROR",
            Self::Internal => "INTERNAL",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
