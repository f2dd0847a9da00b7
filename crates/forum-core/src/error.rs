//! Domain-level error types.

use thiserror::Error;

/// Domain errors - business rule failures raised before anything is written.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Repository-level errors.
///
/// `Connection`, `Query` and `Internal` are store failures; they are fatal to
/// the current operation and never retried here.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Duplicate value: {0}")]
    Uniqueness(String),

    #[error("{entity_type} with id {id} not found")]
    NotFound { entity_type: &'static str, id: i32 },

    /// A foreign key rejected by the store itself.
    #[error("Dangling reference: {0}")]
    DanglingReference(String),

    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl RepoError {
    pub fn not_found(entity_type: &'static str, id: i32) -> Self {
        Self::NotFound { entity_type, id }
    }

    /// True for both a missing row and a dangling foreign key.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::DanglingReference(_))
    }
}

impl From<DomainError> for RepoError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => RepoError::Validation(msg),
            DomainError::Internal(msg) => RepoError::Internal(msg),
        }
    }
}
