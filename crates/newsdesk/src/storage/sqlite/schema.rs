//! SQLite schema definitions and SQL query constants.
//!
//! This module contains all SQL statements used by the SQLite blob store,
//! following the Functional Core pattern - pure data, no I/O.

/// SQL statement to create all tables.
pub const CREATE_TABLES: &str = r#"
-- One row per (namespace, key) blob
CREATE TABLE IF NOT EXISTS blobs (
    namespace TEXT NOT NULL,
    key TEXT NOT NULL,
    value TEXT NOT NULL,
    updated_at TEXT NOT NULL,
    PRIMARY KEY (namespace, key)
);
"#;

/// Select a single blob value.
pub const SELECT_BLOB: &str = "SELECT value FROM blobs WHERE namespace = ?1 AND key = ?2";

/// Insert a blob or replace the value of an existing one.
pub const UPSERT_BLOB: &str = r#"
INSERT INTO blobs (namespace, key, value, updated_at)
VALUES (?1, ?2, ?3, ?4)
ON CONFLICT (namespace, key) DO UPDATE SET
    value = excluded.value,
    updated_at = excluded.updated_at
"#;
