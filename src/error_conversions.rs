//! Error conversion glue between layers.
//!
//! The domain layer must not depend on repository or service error types, so
//! the cross-layer `From` impls live here instead.

use crate::domain::types::TypeConstraintError;
use crate::forms::videos::AddVideoFormError;
use crate::repository::errors::RepositoryError;
use crate::services::ServiceError;

impl From<TypeConstraintError> for RepositoryError {
    fn from(val: TypeConstraintError) -> Self {
        RepositoryError::Validation(val.to_string())
    }
}

impl From<AddVideoFormError> for ServiceError {
    fn from(val: AddVideoFormError) -> Self {
        ServiceError::Form(val.to_string())
    }
}
