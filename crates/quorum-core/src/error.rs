// Rust guideline compliant 2026-10-16

//! Error types for the Quorum core library.

use crate::models::EntityKind;
use thiserror::Error;

/// Result type alias for Quorum operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Quorum operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Referenced entity does not exist.
    #[error("{0} not found: {1}")]
    NotFound(EntityKind, String),

    /// Requester failed an ownership check.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Malformed or missing input.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Ambiguous partial ID.
    #[error("Ambiguous ID: {0} matches {1:?}")]
    AmbiguousId(String, Vec<String>),

    /// The store lock could not be acquired.
    #[error("Lock error: {0}")]
    Lock(String),

    /// Configuration could not be loaded or failed validation.
    #[error("Invalid config: {0}")]
    Config(String),
}

impl Error {
    /// Returns true for the `NotFound` variant.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(..))
    }

    /// Returns true for the `Forbidden` variant.
    #[must_use]
    pub fn is_forbidden(&self) -> bool {
        matches!(self, Error::Forbidden(_))
    }
}
