//! Service-level error taxonomy shared by all handlers.

use thiserror::Error;

use crate::content::ContentError;
use crate::storage::StoreError;

/// Errors surfaced to API clients.
///
/// `StorageFailure` displays only its generic message; the underlying
/// [`StoreError`] is kept as the source for logging.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error("Method not allowed")]
    MethodNotAllowed,
    #[error("{message}")]
    StorageFailure {
        message: &'static str,
        #[source]
        source: StoreError,
    },
}

impl ServiceError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// Wraps a store error behind a generic client-facing message.
    pub fn storage(message: &'static str, source: StoreError) -> Self {
        Self::StorageFailure { message, source }
    }
}

impl From<ContentError> for ServiceError {
    fn from(err: ContentError) -> Self {
        match err {
            ContentError::NotFound { .. } => Self::not_found("Not found"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;
    use crate::content::CollectionKind;

    #[test]
    fn test_storage_failure_hides_cause() {
        let error = ServiceError::storage(
            "Failed to save content",
            StoreError::ConnectionFailed("socket closed".to_string()),
        );

        assert_eq!(error.to_string(), "Failed to save content");
        assert_eq!(
            error.source().map(|s| s.to_string()),
            Some("Connection failed: socket closed".to_string())
        );
    }

    #[test]
    fn test_content_not_found_converts_to_generic_message() {
        let error: ServiceError = ContentError::NotFound {
            collection: CollectionKind::News,
            id: "news_x".to_string(),
        }
        .into();

        assert_eq!(error, ServiceError::NotFound("Not found".to_string()));
    }

    #[test]
    fn test_method_not_allowed_display() {
        assert_eq!(
            ServiceError::MethodNotAllowed.to_string(),
            "Method not allowed"
        );
    }
}
