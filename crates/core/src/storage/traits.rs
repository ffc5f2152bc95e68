use async_trait::async_trait;

use super::{Namespace, Result};

/// Key-value blob store partitioned by [`Namespace`].
///
/// Values are opaque text (JSON documents or raw HTML). Implementations give no
/// cross-call isolation: a `get` followed by a `set` is not atomic.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Gets the value stored under `key`, or `None` when absent.
    async fn get(&self, namespace: Namespace, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    async fn set(&self, namespace: Namespace, key: &str, value: String) -> Result<()>;

    /// Short backend name used in logs and health output.
    fn backend_name(&self) -> &'static str;
}
