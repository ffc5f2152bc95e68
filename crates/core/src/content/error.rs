use thiserror::Error;

use super::collection::CollectionKind;

/// Errors that can occur when manipulating a collection.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("{collection} item not found: {id}")]
    NotFound {
        collection: CollectionKind,
        id: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_error_not_found_display() {
        let error = ContentError::NotFound {
            collection: CollectionKind::Videos,
            id: "unknown_id".to_string(),
        };
        assert_eq!(error.to_string(), "videos item not found: unknown_id");
    }
}
