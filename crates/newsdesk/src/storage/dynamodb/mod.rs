//! DynamoDB storage backend implementation.
//!
//! This module provides a DynamoDB-based implementation of the blob store trait
//! using `aws-sdk-dynamodb`.

mod error;
mod keys;
mod store;

pub use store::DynamoDbBlobStore;
