//! In-memory blob store implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use newsdesk_core::storage::{BlobStore, Namespace, Result};

/// In-memory storage backend.
///
/// Uses a HashMap wrapped in `Arc<RwLock<_>>` for thread-safe access.
/// Data is not persisted and will be lost when the store is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBlobStore {
    blobs: Arc<RwLock<HashMap<(Namespace, String), String>>>,
}

impl InMemoryBlobStore {
    /// Creates a new empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BlobStore for InMemoryBlobStore {
    async fn get(&self, namespace: Namespace, key: &str) -> Result<Option<String>> {
        let blobs = self.blobs.read().await;
        Ok(blobs.get(&(namespace, key.to_string())).cloned())
    }

    async fn set(&self, namespace: Namespace, key: &str, value: String) -> Result<()> {
        let mut blobs = self.blobs.write().await;
        blobs.insert((namespace, key.to_string()), value);
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "inmemory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_missing_key() {
        let store = InMemoryBlobStore::new();

        let value = store.get(Namespace::Articles, "news.html").await.unwrap();

        assert!(value.is_none());
    }

    #[tokio::test]
    async fn test_set_then_get() {
        let store = InMemoryBlobStore::new();

        store
            .set(Namespace::Articles, "news.html", "<p>hi</p>".to_string())
            .await
            .unwrap();

        let value = store.get(Namespace::Articles, "news.html").await.unwrap();
        assert_eq!(value.as_deref(), Some("<p>hi</p>"));
    }

    #[tokio::test]
    async fn test_set_overwrites() {
        let store = InMemoryBlobStore::new();

        store
            .set(Namespace::Content, "data", "{}".to_string())
            .await
            .unwrap();
        store
            .set(Namespace::Content, "data", r#"{"news":[]}"#.to_string())
            .await
            .unwrap();

        let value = store.get(Namespace::Content, "data").await.unwrap();
        assert_eq!(value.as_deref(), Some(r#"{"news":[]}"#));
    }

    #[tokio::test]
    async fn test_namespaces_are_independent() {
        let store = InMemoryBlobStore::new();

        store
            .set(Namespace::Content, "emails", "content".to_string())
            .await
            .unwrap();

        let value = store.get(Namespace::Subscriptions, "emails").await.unwrap();
        assert!(value.is_none());
    }

    #[tokio::test]
    async fn test_clones_share_data() {
        let store = InMemoryBlobStore::new();
        let other = store.clone();

        store
            .set(Namespace::Articles, "a.html", "A".to_string())
            .await
            .unwrap();

        let value = other.get(Namespace::Articles, "a.html").await.unwrap();
        assert_eq!(value.as_deref(), Some("A"));
    }
}
