use thiserror::Error;

/// Reasons a request-scoped operation was cut short.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ContextError {
    #[error("Request cancelled")]
    Cancelled,
    #[error("Request deadline exceeded")]
    DeadlineExceeded,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancelled_display() {
        assert_eq!(ContextError::Cancelled.to_string(), "Request cancelled");
    }

    #[test]
    fn test_deadline_exceeded_display() {
        assert_eq!(
            ContextError::DeadlineExceeded.to_string(),
            "Request deadline exceeded"
        );
    }
}
