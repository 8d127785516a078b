//! Shared error type across prizefund crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Invalid input / malformed config or form.
    BadRequest,
    /// Operation not permitted in the current session state.
    NotAllowed,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Internal server error.
    Internal,
}

impl ErrorCode {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::BadRequest => "BAD_REQUEST",
            ErrorCode::NotAllowed => "NOT_ALLOWED",
            ErrorCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, FundError>;

/// Unified error type used by core and dashboard.
#[derive(Debug, Error)]
pub enum FundError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("not allowed: {0}")]
    NotAllowed(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl FundError {
    /// Map internal error to a stable client-facing code.
    pub fn code(&self) -> ErrorCode {
        match self {
            FundError::BadRequest(_) => ErrorCode::BadRequest,
            FundError::NotAllowed(_) => ErrorCode::NotAllowed,
            FundError::UnsupportedVersion => ErrorCode::UnsupportedVersion,
            FundError::Internal(_) => ErrorCode::Internal,
        }
    }
}
