//! Adapters that give each namespace of the blob store a typed API.

mod articles;
mod content;
mod subscriptions;

pub use articles::ArticleStore;
pub use content::ContentStore;
pub use subscriptions::SubscriptionStore;
