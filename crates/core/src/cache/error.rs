use thiserror::Error;

use crate::context::ContextError;

/// Errors that can occur during cache operations.
///
/// A cache miss is not an error: `Cache::get` reports it as `Ok(None)`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CacheError {
    #[error("Cache connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Cache operation failed: {0}")]
    OperationFailed(String),
}

impl From<ContextError> for CacheError {
    fn from(err: ContextError) -> Self {
        CacheError::ConnectionFailed(err.to_string())
    }
}

/// Result type for cache operations.
pub type Result<T> = std::result::Result<T, CacheError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_failed_display() {
        let error = CacheError::ConnectionFailed("timeout".to_string());
        assert_eq!(error.to_string(), "Cache connection failed: timeout");
    }

    #[test]
    fn test_operation_failed_display() {
        let error = CacheError::OperationFailed("WRONGTYPE".to_string());
        assert_eq!(error.to_string(), "Cache operation failed: WRONGTYPE");
    }

    #[test]
    fn test_context_errors_are_connection_failures() {
        assert_eq!(
            CacheError::from(ContextError::DeadlineExceeded),
            CacheError::ConnectionFailed("Request deadline exceeded".to_string())
        );
        assert!(matches!(
            CacheError::from(ContextError::Cancelled),
            CacheError::ConnectionFailed(_)
        ));
    }
}
