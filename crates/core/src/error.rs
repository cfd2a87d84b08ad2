//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, recoverable request failures
/// (bad input, missing item). Store failures belong to the store layer.
///
/// The `Display` output is the user-facing reason, rendered verbatim as a
/// flash notice.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A submitted field failed validation; no mutation is performed.
    #[error("{0}")]
    Validation(String),

    /// The requested item does not exist.
    #[error("Item not found.")]
    NotFound,
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }
}
