//! Subscription Store Adapter: the subscriber list in the `subscriptions` namespace.

use std::sync::Arc;

use newsdesk_core::storage::{BlobStore, Namespace, Result, StoreError, SUBSCRIPTIONS_KEY};
use newsdesk_core::subscriptions::{add_subscriber, decode_subscribers, encode_subscribers};

#[derive(Clone)]
pub struct SubscriptionStore {
    store: Arc<dyn BlobStore>,
}

impl SubscriptionStore {
    pub fn new(store: Arc<dyn BlobStore>) -> Self {
        Self { store }
    }

    /// Loads the subscriber list. Read failures yield an empty list.
    pub async fn load(&self) -> Vec<String> {
        match self.store.get(Namespace::Subscriptions, SUBSCRIPTIONS_KEY).await {
            Ok(Some(json)) => decode_subscribers(&json),
            Ok(None) => Vec::new(),
            Err(err) => {
                tracing::warn!(error = %err, "Subscriber list read failed, starting empty");
                Vec::new()
            }
        }
    }

    /// Adds `email` to the list. Returns true when it was not already present.
    ///
    /// The list is only written back when it changed.
    pub async fn subscribe(&self, email: &str) -> Result<bool> {
        let mut subscribers = self.load().await;

        if !add_subscriber(&mut subscribers, email) {
            tracing::debug!("Email already subscribed");
            return Ok(false);
        }

        let json = encode_subscribers(&subscribers)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;
        self.store
            .set(Namespace::Subscriptions, SUBSCRIPTIONS_KEY, json)
            .await?;

        tracing::info!(subscribers = subscribers.len(), "Added newsletter subscriber");
        Ok(true)
    }
}
