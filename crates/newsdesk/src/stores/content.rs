//! Content Store Adapter: the content document in the `content` namespace.

use std::sync::Arc;

use newsdesk_core::content::{seed_content, ContentDocument};
use newsdesk_core::storage::{BlobStore, Namespace, Result, StoreError, CONTENT_KEY};

/// Loads and saves the whole content document.
///
/// There is no version check between [`ContentStore::load_for_update`] and
/// [`ContentStore::save`]: two concurrent writers can lose an update.
#[derive(Clone)]
pub struct ContentStore {
    store: Arc<dyn BlobStore>,
}

impl ContentStore {
    pub fn new(store: Arc<dyn BlobStore>) -> Self {
        Self { store }
    }

    /// Loads the document for reading.
    ///
    /// Never fails: an absent, unreadable or undecodable document yields the
    /// seed content.
    pub async fn load(&self) -> ContentDocument {
        match self.load_for_update().await {
            Ok(doc) => doc,
            Err(err) => {
                tracing::warn!(error = %err, "Content read failed, serving seed content");
                seed_content()
            }
        }
    }

    /// Loads the document ahead of a mutation.
    ///
    /// An absent or undecodable document yields the seed content, but read
    /// failures are returned so a mutation never overwrites stored content
    /// with seed data.
    pub async fn load_for_update(&self) -> Result<ContentDocument> {
        let Some(json) = self.store.get(Namespace::Content, CONTENT_KEY).await? else {
            tracing::debug!("No stored content, using seed content");
            return Ok(seed_content());
        };

        match ContentDocument::from_json(&json) {
            Ok(doc) => Ok(doc),
            Err(err) => {
                tracing::warn!(error = %err, "Stored content is not a valid document, using seed content");
                Ok(seed_content())
            }
        }
    }

    /// Writes the whole document back.
    pub async fn save(&self, doc: &ContentDocument) -> Result<()> {
        let json = doc
            .to_json()
            .map_err(|e| StoreError::Serialization(e.to_string()))?;

        self.store.set(Namespace::Content, CONTENT_KEY, json).await?;

        tracing::debug!(
            news = doc.news.len(),
            videos = doc.videos.len(),
            trending = doc.trending.len(),
            "Saved content document"
        );
        Ok(())
    }
}
