//! Error conversion glue between the domain, repository and service layers.
//!
//! The domain layer must not depend on repository or service error types, so
//! the conversions live here.

use crate::domain::types::TypeConstraintError;
use crate::repository::RepositoryError;
use crate::services::ServiceError;
use crate::services::contents::CATEGORY_NAME_EXISTS;

impl From<TypeConstraintError> for RepositoryError {
    fn from(val: TypeConstraintError) -> Self {
        RepositoryError::ValidationError(val.to_string())
    }
}

impl From<RepositoryError> for ServiceError {
    fn from(val: RepositoryError) -> Self {
        match val {
            RepositoryError::ConstraintViolation(detail) => {
                log::warn!("Store rejected duplicate category name: {detail}");
                ServiceError::Conflict(CATEGORY_NAME_EXISTS.to_string())
            }
            other => ServiceError::Repository(other),
        }
    }
}
