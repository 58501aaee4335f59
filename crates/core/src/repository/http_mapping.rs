//! Pure functions for mapping repository errors to HTTP status codes.

use super::LocalityError;

/// Maps a [`LocalityError`] to an HTTP status code.
///
/// - `BadRequest` -> 400 (Bad Request)
/// - `NotFound` -> 404 (Not Found)
/// - `Unavailable` -> 500 (Internal Server Error)
/// - `Internal` -> 500 (Internal Server Error)
///
/// `Unavailable` keeps its own kind for logging but shares the 500 status.
///
/// # Examples
///
/// ```
/// use localities_core::repository::{locality_error_to_status_code, LocalityError};
///
/// let error = LocalityError::NotFound { code: 7 };
/// assert_eq!(locality_error_to_status_code(&error), 404);
/// ```
pub fn locality_error_to_status_code(error: &LocalityError) -> u16 {
    match error {
        LocalityError::BadRequest(_) => 400,
        LocalityError::NotFound { .. } => 404,
        LocalityError::Unavailable(_) | LocalityError::Internal(_) => 500,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_request_maps_to_400() {
        let error = LocalityError::BadRequest("invalid digit found in string".to_string());
        assert_eq!(locality_error_to_status_code(&error), 400);
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let error = LocalityError::NotFound { code: 99 };
        assert_eq!(locality_error_to_status_code(&error), 404);
    }

    #[test]
    fn test_unavailable_maps_to_500() {
        let error = LocalityError::Unavailable("connection refused".to_string());
        assert_eq!(locality_error_to_status_code(&error), 500);
    }

    #[test]
    fn test_internal_maps_to_500() {
        let error = LocalityError::Internal("query failed".to_string());
        assert_eq!(locality_error_to_status_code(&error), 500);
    }
}
