//! DynamoDB key generation functions.
//!
//! Pure functions for generating partition and sort keys. The namespace is the
//! partition key and the blob key is the sort key, so every namespace lives in
//! its own item collection of one shared table.

use newsdesk_core::storage::Namespace;

pub const PK: &str = "PK";
pub const SK: &str = "SK";
pub const VALUE: &str = "value";
pub const UPDATED_AT: &str = "updated_at";

pub const NAMESPACE_PREFIX: &str = "NS#";
pub const KEY_PREFIX: &str = "KEY#";

/// Generate the partition key for a namespace.
///
/// Pattern: `NS#<namespace>`
pub fn blob_pk(namespace: Namespace) -> String {
    format!("{NAMESPACE_PREFIX}{namespace}")
}

/// Generate the sort key for a blob key.
///
/// Pattern: `KEY#<key>`
pub fn blob_sk(key: &str) -> String {
    format!("{KEY_PREFIX}{key}")
}
