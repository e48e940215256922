use crate::validation::ValidationError;
use shared::errors::{HttpError, RepositoryError};
use std::fmt;
use thiserror::Error;

/// The lookup key a `NotFound` refers to.
#[derive(Debug, Clone, PartialEq)]
pub enum NotFoundKey {
    Id(String),
    Name(String),
    Color(String),
    PriceRange { min: f64, max: f64 },
}

impl fmt::Display for NotFoundKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotFoundKey::Id(id) => write!(f, "Product not found with id: {id}"),
            NotFoundKey::Name(name) => write!(f, "No products found with name: {name}"),
            NotFoundKey::Color(color) => write!(f, "No products found with color: {color}"),
            NotFoundKey::PriceRange { min, max } => {
                write!(f, "No products found within price range: {min} - {max}")
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{reason}")]
    InvalidInput {
        field: &'static str,
        reason: ValidationError,
    },

    #[error("{0}")]
    NotFound(NotFoundKey),

    #[error("Failed to retrieve products.")]
    RetrievalFailed(#[source] RepositoryError),

    #[error("Repository error: {0}")]
    Repo(#[from] RepositoryError),
}

impl From<ValidationError> for ServiceError {
    fn from(reason: ValidationError) -> Self {
        ServiceError::InvalidInput {
            field: reason.field(),
            reason,
        }
    }
}

impl ServiceError {
    /// The validation reason, if this is an `InvalidInput`.
    pub fn reason(&self) -> Option<ValidationError> {
        match self {
            ServiceError::InvalidInput { reason, .. } => Some(*reason),
            _ => None,
        }
    }
}

impl From<ServiceError> for HttpError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::InvalidInput { reason, .. } => HttpError::BadRequest(reason.to_string()),
            ServiceError::NotFound(key) => HttpError::NotFound(key.to_string()),
            err @ ServiceError::RetrievalFailed(_) => HttpError::Internal(err.to_string()),
            ServiceError::Repo(_) => HttpError::Internal("Repository error".into()),
        }
    }
}
