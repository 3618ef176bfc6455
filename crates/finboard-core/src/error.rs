//! Error types for finboard-core
//!
//! List operations treat an unknown record id as a no-op. Single-record
//! lookups report `NotFound` so callers can tell a stale id apart.

use thiserror::Error;
use serde::{Deserialize, Serialize};

/// Error codes for programmatic error handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Record not found
    NotFound,
    /// Invalid value
    InvalidValue,
    /// Blank chat message
    EmptyMessage,
    /// Preference storage failure
    StorageError,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCode::NotFound => write!(f, "NOT_FOUND"),
            ErrorCode::InvalidValue => write!(f, "INVALID_VALUE"),
            ErrorCode::EmptyMessage => write!(f, "EMPTY_MESSAGE"),
            ErrorCode::StorageError => write!(f, "STORAGE_ERROR"),
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorSeverity {
    /// Informational
    Info,
    /// Warning - operation may be affected
    Warning,
    /// Error - operation failed
    Error,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "info"),
            ErrorSeverity::Warning => write!(f, "warning"),
            ErrorSeverity::Error => write!(f, "error"),
        }
    }
}

/// Main error type for finboard-core
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("{resource} not found: {id}")]
    NotFound { resource: String, id: String },

    #[error("Invalid value: {message}")]
    InvalidValue { message: String },

    #[error("Message is empty")]
    EmptyMessage,

    #[error("Preference storage error: {message}")]
    Storage { message: String },
}

impl CoreError {
    pub fn not_found(resource: impl Into<String>, id: impl ToString) -> Self {
        CoreError::NotFound {
            resource: resource.into(),
            id: id.to_string(),
        }
    }

    /// Get the error code
    pub fn code(&self) -> ErrorCode {
        match self {
            CoreError::NotFound { .. } => ErrorCode::NotFound,
            CoreError::InvalidValue { .. } => ErrorCode::InvalidValue,
            CoreError::EmptyMessage => ErrorCode::EmptyMessage,
            CoreError::Storage { .. } => ErrorCode::StorageError,
        }
    }

    /// Get the severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            CoreError::NotFound { .. } => ErrorSeverity::Info,
            CoreError::InvalidValue { .. } => ErrorSeverity::Warning,
            CoreError::EmptyMessage => ErrorSeverity::Info,
            CoreError::Storage { .. } => ErrorSeverity::Error,
        }
    }
}

impl From<std::io::Error> for CoreError {
    fn from(err: std::io::Error) -> Self {
        CoreError::Storage {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        CoreError::Storage {
            message: format!("malformed preferences file: {}", err),
        }
    }
}

/// Result type with CoreError
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_and_severity() {
        let err = CoreError::not_found("Transaction", 42);
        assert_eq!(err.code(), ErrorCode::NotFound);
        assert_eq!(err.severity(), ErrorSeverity::Info);
        assert_eq!(err.to_string(), "Transaction not found: 42");

        assert_eq!(CoreError::EmptyMessage.code().to_string(), "EMPTY_MESSAGE");
    }

    #[test]
    fn test_io_error_becomes_storage() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: CoreError = io.into();
        assert_eq!(err.code(), ErrorCode::StorageError);
        assert_eq!(err.severity(), ErrorSeverity::Error);
    }
}
