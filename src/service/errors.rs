//! Record service error taxonomy

use thiserror::Error;

use crate::store::StoreError;
use crate::validator::FieldError;

/// Result type for record service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Errors surfaced by the record service
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Candidate record failed a field-type rule
    #[error("{0}")]
    Validation(#[from] FieldError),

    /// Required identifier omitted from the request
    #[error("ID is required")]
    MissingId,

    /// Identifier not present in the collection
    #[error("You should enter a valid ID")]
    NotFound,

    /// Durable write failed; the mutation is not acknowledged
    #[error("Persistence failure: {0}")]
    Persistence(#[from] StoreError),

    /// Shared state unavailable (poisoned lock)
    #[error("Internal error: {0}")]
    Internal(String),
}
