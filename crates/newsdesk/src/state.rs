//! Application state shared by all request handlers.

use std::sync::Arc;

use newsdesk_core::storage::BlobStore;

#[cfg(any(test, feature = "inmemory"))]
use crate::storage::inmemory::InMemoryBlobStore;
use crate::stores::{ArticleStore, ContentStore, SubscriptionStore};

/// Shared application state.
///
/// Cloned for each request. The only shared resource is the blob store
/// handle; the adapters hold no cached data.
#[derive(Clone)]
pub struct AppState {
    pub content: ContentStore,
    pub articles: ArticleStore,
    pub subscriptions: SubscriptionStore,
    /// Raw store handle, used by the readiness probe.
    pub store: Arc<dyn BlobStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn BlobStore>) -> Self {
        Self {
            content: ContentStore::new(store.clone()),
            articles: ArticleStore::new(store.clone()),
            subscriptions: SubscriptionStore::new(store.clone()),
            store,
        }
    }
}

#[cfg(any(test, feature = "inmemory"))]
impl Default for AppState {
    /// State backed by a fresh in-memory store.
    fn default() -> Self {
        Self::new(Arc::new(InMemoryBlobStore::new()))
    }
}
