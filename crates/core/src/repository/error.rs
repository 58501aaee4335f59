use thiserror::Error;

use crate::cache::CacheError;
use crate::storage::StoreError;

/// Coarse classification of a [`LocalityError`], stable across adapters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    BadRequest,
    NotFound,
    Unavailable,
    Internal,
}

/// Errors surfaced by locality repository operations.
///
/// Adapter errors are classified into one of these kinds at the repository
/// boundary; callers never see store- or cache-specific detail beyond the
/// message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LocalityError {
    #[error("Bad request: {0}")]
    BadRequest(String),
    #[error("Locality not found: {code}")]
    NotFound { code: i64 },
    #[error("Cache unavailable: {0}")]
    Unavailable(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl LocalityError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LocalityError::BadRequest(_) => ErrorKind::BadRequest,
            LocalityError::NotFound { .. } => ErrorKind::NotFound,
            LocalityError::Unavailable(_) => ErrorKind::Unavailable,
            LocalityError::Internal(_) => ErrorKind::Internal,
        }
    }
}

impl From<StoreError> for LocalityError {
    fn from(err: StoreError) -> Self {
        LocalityError::Internal(err.to_string())
    }
}

impl From<CacheError> for LocalityError {
    fn from(err: CacheError) -> Self {
        LocalityError::Unavailable(err.to_string())
    }
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, LocalityError>;
