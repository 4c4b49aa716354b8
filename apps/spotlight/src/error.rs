use thiserror::Error;

use crate::errors::{DomainError, ErrorCode};
use crate::store::StoreError;

/// Application-level error returned by binaries and startup code.
///
/// Game operations return `DomainError`; this type wraps it together with the
/// failures that only exist outside a session (configuration, terminal I/O,
/// opening the data directory).
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {detail}")]
    Config { detail: String },
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    /// Stable error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Config { .. } => ErrorCode::ConfigError,
            AppError::Domain(err) => err.code(),
            AppError::Store(_) => ErrorCode::PersistenceFailure,
            AppError::Io(_) => ErrorCode::IoError,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_keep_their_code() {
        let err: AppError = DomainError::not_ready("host missing").into();
        assert_eq!(err.code(), ErrorCode::NotReady);
        assert_eq!(err.to_string(), "validation NotReady: host missing");
    }

    #[test]
    fn config_error_message() {
        let err = AppError::config("SPOTLIGHT_ROUNDS_PER_PLAYER must be > 0");
        assert_eq!(err.code(), ErrorCode::ConfigError);
        assert_eq!(
            err.to_string(),
            "Configuration error: SPOTLIGHT_ROUNDS_PER_PLAYER must be > 0"
        );
    }

    #[test]
    fn io_errors_map_to_io_code() {
        let err: AppError = std::io::Error::other("broken pipe").into();
        assert_eq!(err.code(), ErrorCode::IoError);
    }
}
