//! Stateful search services built on top of the repository seams.

use thiserror::Error;
use validator::ValidationErrors;

use crate::repository::errors::RepositoryError;

pub mod engine;
pub mod view;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Invalid postal input; blocks the submit without touching any state.
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("query string error: {0}")]
    Query(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
