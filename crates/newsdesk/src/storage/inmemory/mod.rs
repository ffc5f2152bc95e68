//! In-memory storage backend.
//!
//! This module provides an in-memory implementation of the blob store trait
//! that stores all values in a HashMap wrapped in `Arc<RwLock<_>>`. It is the
//! default backend and the one used by tests.
//!
//! # Example
//!
//! ```rust,ignore
//! use newsdesk::storage::inmemory::InMemoryBlobStore;
//!
//! let store = InMemoryBlobStore::new();
//! // Use store for testing...
//! ```

mod store;

pub use store::InMemoryBlobStore;
