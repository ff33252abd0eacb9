// Rust guideline compliant 2026-10-16

//! Error handling for Quorum application services.

use quorum_core::Error as CoreError;
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for application-level operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Stable error codes for command and API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The referenced question or answer does not exist.
    NotFound,
    /// The requester does not own the record.
    Forbidden,
    /// The request included invalid inputs.
    InvalidInput,
    /// The provided identifier matched multiple entities.
    AmbiguousId,
    /// The store lock could not be acquired in time.
    LockTimeout,
    /// IO failure while reading or writing repository data.
    IoError,
    /// JSON serialization or parsing failed.
    JsonError,
    /// Configuration is invalid.
    ConfigError,
    /// The repository has not been initialized.
    RepoNotInitialized,
}

impl ErrorCode {
    /// Conventional HTTP status for this code.
    #[must_use]
    pub fn http_status(self) -> u16 {
        match self {
            ErrorCode::NotFound => 404,
            ErrorCode::Forbidden => 403,
            ErrorCode::InvalidInput | ErrorCode::AmbiguousId => 400,
            ErrorCode::LockTimeout => 503,
            ErrorCode::IoError
            | ErrorCode::JsonError
            | ErrorCode::ConfigError
            | ErrorCode::RepoNotInitialized => 500,
        }
    }
}

/// Application-level errors with stable mapping to error codes.
#[derive(Debug, Error)]
pub enum AppError {
    /// Repository is missing or not initialized.
    #[error("Quorum repository not initialized at {path}. Run 'qrm init' first.")]
    RepoNotInitialized {
        /// Path where `.quorum` was expected.
        path: PathBuf,
    },

    /// Invalid input was provided by the caller.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Error from core library operations.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// IO error not represented by core errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Returns a stable error code for the error.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::RepoNotInitialized { .. } => ErrorCode::RepoNotInitialized,
            AppError::InvalidInput(_) => ErrorCode::InvalidInput,
            AppError::Io(_) => ErrorCode::IoError,
            AppError::Core(core) => match core {
                CoreError::NotFound(..) => ErrorCode::NotFound,
                CoreError::Forbidden(_) => ErrorCode::Forbidden,
                CoreError::InvalidInput(_) => ErrorCode::InvalidInput,
                CoreError::AmbiguousId(_, _) => ErrorCode::AmbiguousId,
                CoreError::Lock(_) => ErrorCode::LockTimeout,
                CoreError::Io(_) => ErrorCode::IoError,
                CoreError::Json(_) => ErrorCode::JsonError,
                CoreError::Config(_) => ErrorCode::ConfigError,
            },
        }
    }

    /// Returns structured details for errors that benefit from extra context.
    #[must_use]
    pub fn details(&self) -> Option<serde_json::Value> {
        match self {
            AppError::RepoNotInitialized { path } => Some(serde_json::json!({
                "path": path,
            })),
            AppError::Core(CoreError::NotFound(kind, id)) => Some(serde_json::json!({
                "kind": kind,
                "id": id,
            })),
            AppError::Core(CoreError::AmbiguousId(partial, matches)) => Some(serde_json::json!({
                "partial": partial,
                "matches": matches,
            })),
            _ => None,
        }
    }
}
