//! Storage backend implementations.
//!
//! This module provides concrete implementations of the blob store trait
//! defined in `newsdesk_core::storage`. The implementation is selected at
//! compile time via feature flags.
//!
//! # Feature Flags
//!
//! - `inmemory` (default): process-local HashMap, lost on restart
//! - `sqlite`: SQLite storage backend using `rusqlite` and `tokio-rusqlite`
//! - `dynamodb`: AWS DynamoDB storage backend using `aws-sdk-dynamodb`
//!
//! These features are mutually exclusive - only one storage backend can be
//! enabled at a time.
//!
//! # Examples
//!
//! Build with SQLite:
//! ```bash
//! cargo build -p newsdesk --no-default-features --features sqlite
//! ```
//!
//! Build with DynamoDB:
//! ```bash
//! cargo build -p newsdesk --no-default-features --features dynamodb
//! ```

use std::sync::Arc;

use newsdesk_core::storage::BlobStore;

use crate::config::Config;

// Compile-time checks for mutual exclusivity
#[cfg(all(feature = "sqlite", feature = "dynamodb"))]
compile_error!("Cannot enable both 'sqlite' and 'dynamodb' storage features");

#[cfg(all(feature = "sqlite", feature = "inmemory"))]
compile_error!("Cannot enable both 'sqlite' and 'inmemory' storage features");

#[cfg(all(feature = "dynamodb", feature = "inmemory"))]
compile_error!("Cannot enable both 'dynamodb' and 'inmemory' storage features");

#[cfg(not(any(feature = "inmemory", feature = "sqlite", feature = "dynamodb")))]
compile_error!("Must enable exactly one storage feature: 'inmemory', 'sqlite', or 'dynamodb'");

#[cfg(any(test, feature = "inmemory"))]
pub mod inmemory;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(feature = "dynamodb")]
pub mod dynamodb;

/// Opens the blob store selected at compile time.
#[cfg(feature = "inmemory")]
pub async fn open_store(_config: &Config) -> anyhow::Result<Arc<dyn BlobStore>> {
    tracing::warn!("Using in-memory storage, content is lost on restart");
    Ok(Arc::new(inmemory::InMemoryBlobStore::new()))
}

/// Opens the blob store selected at compile time.
#[cfg(feature = "sqlite")]
pub async fn open_store(config: &Config) -> anyhow::Result<Arc<dyn BlobStore>> {
    tracing::info!(path = %config.sqlite_path, "Opening SQLite storage");
    let store = sqlite::SqliteBlobStore::new(&config.sqlite_path).await?;
    Ok(Arc::new(store))
}

/// Opens the blob store selected at compile time.
#[cfg(feature = "dynamodb")]
pub async fn open_store(config: &Config) -> anyhow::Result<Arc<dyn BlobStore>> {
    tracing::info!(table = %config.dynamodb_table_name, "Connecting to DynamoDB storage");
    let store = dynamodb::DynamoDbBlobStore::from_env(&config.dynamodb_table_name).await?;
    Ok(Arc::new(store))
}
