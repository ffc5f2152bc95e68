//! DynamoDB blob store implementation.
//!
//! Implements `BlobStore` from `newsdesk_core::storage` using DynamoDB.

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;
use chrono::Utc;

use newsdesk_core::storage::{BlobStore, Namespace, Result, StoreError};

use super::error::{map_get_item_error, map_put_item_error};
use super::keys;

/// DynamoDB-based blob store.
///
/// Each blob is one item: `PK` = namespace, `SK` = key, `value` = text.
pub struct DynamoDbBlobStore {
    client: Client,
    table_name: String,
}

impl DynamoDbBlobStore {
    /// Creates a new store with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Creates a new store using the AWS SDK default credential chain.
    pub async fn from_env(table_name: impl Into<String>) -> Result<Self> {
        let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        let client = Client::new(&config);

        Ok(Self::new(client, table_name))
    }
}

#[async_trait]
impl BlobStore for DynamoDbBlobStore {
    async fn get(&self, namespace: Namespace, key: &str) -> Result<Option<String>> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key(keys::PK, AttributeValue::S(keys::blob_pk(namespace)))
            .key(keys::SK, AttributeValue::S(keys::blob_sk(key)))
            .send()
            .await
            .map_err(map_get_item_error)?;

        let Some(item) = result.item else {
            return Ok(None);
        };

        match item.get(keys::VALUE) {
            Some(AttributeValue::S(value)) => Ok(Some(value.clone())),
            Some(_) => Err(StoreError::InvalidData(format!(
                "{namespace}/{key}: value attribute is not a string"
            ))),
            None => Err(StoreError::InvalidData(format!(
                "{namespace}/{key}: value attribute missing"
            ))),
        }
    }

    async fn set(&self, namespace: Namespace, key: &str, value: String) -> Result<()> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .item(keys::PK, AttributeValue::S(keys::blob_pk(namespace)))
            .item(keys::SK, AttributeValue::S(keys::blob_sk(key)))
            .item(keys::VALUE, AttributeValue::S(value))
            .item(keys::UPDATED_AT, AttributeValue::S(Utc::now().to_rfc3339()))
            .send()
            .await
            .map_err(map_put_item_error)?;

        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "dynamodb"
    }
}
