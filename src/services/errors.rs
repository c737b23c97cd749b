use thiserror::Error;

use crate::repository::RepositoryError;

/// Error type returned by the content service layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// Requested record was not found.
    #[error("{0}")]
    NotFound(String),
    /// The write would break category name uniqueness.
    #[error("{0}")]
    Conflict(String),
    /// The record store failed; passed through untouched.
    #[error(transparent)]
    Repository(RepositoryError),
}

/// Convenient alias for results returned from service functions.
pub type ServiceResult<T> = Result<T, ServiceError>;
