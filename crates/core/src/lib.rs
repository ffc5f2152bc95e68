//! Core types and pure functions for the newsdesk content API.
//!
//! Nothing in this crate performs I/O. Storage backends implement
//! [`storage::BlobStore`] in the server crate.

pub mod articles;
pub mod content;
pub mod error;
mod http_mapping;
pub mod storage;
pub mod subscriptions;

pub use error::ServiceError;
pub use http_mapping::service_error_to_status_code;
