use thiserror::Error;

use crate::shared::infrastructure::document_store::StoreError;

/// Failure of a use case, independent of the transport that triggered it.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("unexpected: {0}")]
    Unexpected(String),
}

impl ApplicationError {
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            ApplicationError::Unexpected(_) | ApplicationError::Store(StoreError::Backend(_))
        )
    }
}
