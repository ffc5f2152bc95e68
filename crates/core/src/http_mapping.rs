//! Pure functions for mapping service errors to HTTP status codes.
//!
//! This module provides HTTP status code mappings for [`ServiceError`] variants,
//! following the Functional Core pattern - pure functions with no side effects.

use crate::error::ServiceError;

/// Maps a [`ServiceError`] to an HTTP status code.
///
/// - `BadRequest` -> 400 (Bad Request)
/// - `NotFound` -> 404 (Not Found)
/// - `MethodNotAllowed` -> 405 (Method Not Allowed)
/// - `StorageFailure` -> 500 (Internal Server Error), whatever the store error
///
/// # Examples
///
/// ```
/// use newsdesk_core::{service_error_to_status_code, ServiceError};
///
/// let error = ServiceError::not_found("Not found");
/// assert_eq!(service_error_to_status_code(&error), 404);
/// ```
pub fn service_error_to_status_code(error: &ServiceError) -> u16 {
    match error {
        ServiceError::BadRequest(_) => 400,
        ServiceError::NotFound(_) => 404,
        ServiceError::MethodNotAllowed => 405,
        ServiceError::StorageFailure { .. } => 500,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::StoreError;

    #[test]
    fn test_bad_request_maps_to_400() {
        let error = ServiceError::bad_request("ID required");
        assert_eq!(service_error_to_status_code(&error), 400);
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let error = ServiceError::not_found("Article not found");
        assert_eq!(service_error_to_status_code(&error), 404);
    }

    #[test]
    fn test_method_not_allowed_maps_to_405() {
        assert_eq!(
            service_error_to_status_code(&ServiceError::MethodNotAllowed),
            405
        );
    }

    #[test]
    fn test_storage_query_failure_maps_to_500() {
        let error = ServiceError::storage(
            "Failed to save content",
            StoreError::QueryFailed("disk full".to_string()),
        );
        assert_eq!(service_error_to_status_code(&error), 500);
    }

    #[test]
    fn test_storage_connection_failure_maps_to_500() {
        let error = ServiceError::storage(
            "Failed to save article",
            StoreError::ConnectionFailed("refused".to_string()),
        );
        assert_eq!(service_error_to_status_code(&error), 500);
    }
}
