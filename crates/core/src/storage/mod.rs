mod error;
mod traits;
mod types;

pub use error::{Result, StoreError};
pub use traits::BlobStore;
pub use types::{Namespace, CONTENT_KEY, SUBSCRIPTIONS_KEY};
