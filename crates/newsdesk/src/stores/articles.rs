//! Article Store Adapter: raw HTML in the `articles` namespace, keyed by filename.

use std::sync::Arc;

use newsdesk_core::articles::resolve_article;
use newsdesk_core::storage::{BlobStore, Namespace, Result};

#[derive(Clone)]
pub struct ArticleStore {
    store: Arc<dyn BlobStore>,
}

impl ArticleStore {
    pub fn new(store: Arc<dyn BlobStore>) -> Self {
        Self { store }
    }

    /// Returns the stored article, falling back to the built-in one.
    ///
    /// Read failures count as a miss.
    pub async fn find(&self, filename: &str) -> Option<String> {
        let stored = match self.store.get(Namespace::Articles, filename).await {
            Ok(stored) => stored,
            Err(err) => {
                tracing::warn!(filename, error = %err, "Article read failed, trying built-in copy");
                None
            }
        };

        resolve_article(stored, filename)
    }

    pub async fn save(&self, filename: &str, html: String) -> Result<()> {
        let bytes = html.len();
        self.store.set(Namespace::Articles, filename, html).await?;
        tracing::info!(filename, bytes, "Saved article");
        Ok(())
    }
}
