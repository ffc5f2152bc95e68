//! SQLite blob store implementation.
//!
//! Implements `BlobStore` from `newsdesk_core::storage` using SQLite.

use async_trait::async_trait;
use chrono::Utc;
use rusqlite::OptionalExtension;
use tokio_rusqlite::Connection;

use newsdesk_core::storage::{BlobStore, Namespace, Result, StoreError};

use super::error::map_tokio_rusqlite_error;
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-based blob store.
///
/// All namespaces share one `blobs` table keyed by `(namespace, key)`.
pub struct SqliteBlobStore {
    conn: Connection,
}

impl SqliteBlobStore {
    /// Creates a new store with a file-based database.
    ///
    /// The database file will be created if it doesn't exist.
    /// Schema tables are created automatically.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| StoreError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Creates a new store with an in-memory database.
    #[cfg(test)]
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| StoreError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES)
                .map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(map_tokio_rusqlite_error)
    }
}

#[async_trait]
impl BlobStore for SqliteBlobStore {
    async fn get(&self, namespace: Namespace, key: &str) -> Result<Option<String>> {
        let key = key.to_string();

        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(schema::SELECT_BLOB).map_err(wrap_err)?;
                stmt.query_row([namespace.as_str(), key.as_str()], |row| {
                    row.get::<_, String>(0)
                })
                .optional()
                .map_err(wrap_err)
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn set(&self, namespace: Namespace, key: &str, value: String) -> Result<()> {
        let key = key.to_string();
        let updated_at = Utc::now().to_rfc3339();

        self.conn
            .call(move |conn| {
                conn.execute(
                    schema::UPSERT_BLOB,
                    [namespace.as_str(), key.as_str(), value.as_str(), updated_at.as_str()],
                )
                .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    fn backend_name(&self) -> &'static str {
        "sqlite"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_missing_key() {
        let store = SqliteBlobStore::new_in_memory().await.unwrap();

        let value = store.get(Namespace::Content, "data").await.unwrap();

        assert!(value.is_none());
    }

    #[tokio::test]
    async fn test_set_then_get() {
        let store = SqliteBlobStore::new_in_memory().await.unwrap();

        store
            .set(Namespace::Articles, "news.html", "<h1>Hi</h1>".to_string())
            .await
            .unwrap();

        let value = store.get(Namespace::Articles, "news.html").await.unwrap();
        assert_eq!(value.as_deref(), Some("<h1>Hi</h1>"));
    }

    #[tokio::test]
    async fn test_set_upserts_existing_key() {
        let store = SqliteBlobStore::new_in_memory().await.unwrap();

        store
            .set(Namespace::Subscriptions, "emails", "[]".to_string())
            .await
            .unwrap();
        store
            .set(
                Namespace::Subscriptions,
                "emails",
                r#"["a@example.com"]"#.to_string(),
            )
            .await
            .unwrap();

        let value = store.get(Namespace::Subscriptions, "emails").await.unwrap();
        assert_eq!(value.as_deref(), Some(r#"["a@example.com"]"#));
    }

    #[tokio::test]
    async fn test_namespaces_are_independent() {
        let store = SqliteBlobStore::new_in_memory().await.unwrap();

        store
            .set(Namespace::Articles, "data", "article".to_string())
            .await
            .unwrap();

        let value = store.get(Namespace::Content, "data").await.unwrap();
        assert!(value.is_none());
    }
}
