//! # Key-Value Repository
//!
//! The local key-value store: a single table of `(key, value)` TEXT pairs.
//!
//! This is the persistence surface the order log is built on. Values are
//! opaque strings to this layer; callers own their serialization format.

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;

/// Repository for raw key-value operations.
#[derive(Debug, Clone)]
pub struct KvRepository {
    pool: SqlitePool,
}

impl KvRepository {
    /// Creates a new KvRepository.
    pub fn new(pool: SqlitePool) -> Self {
        KvRepository { pool }
    }

    /// Reads the value stored under `key`, if any.
    pub async fn get(&self, key: &str) -> DbResult<Option<String>> {
        let value: Option<String> =
            sqlx::query_scalar("SELECT value FROM kv_entries WHERE key = ?1")
                .bind(key)
                .fetch_optional(&self.pool)
                .await?;

        Ok(value)
    }

    /// Writes `value` under `key`, replacing any previous value wholesale.
    pub async fn put(&self, key: &str, value: &str) -> DbResult<()> {
        debug!(key = %key, bytes = value.len(), "kv put");

        let now = Utc::now();
        sqlx::query(
            r#"
            INSERT INTO kv_entries (key, value, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(key)
        .bind(value)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Deletes the entry under `key`; no-op if absent.
    pub async fn delete(&self, key: &str) -> DbResult<()> {
        sqlx::query("DELETE FROM kv_entries WHERE key = ?1")
            .bind(key)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    #[tokio::test]
    async fn test_get_missing_key() {
        let db = test_db().await;
        assert_eq!(db.kv().get("nope").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_put_get_roundtrip_and_overwrite() {
        let db = test_db().await;
        let kv = db.kv();

        kv.put("greeting", "hello").await.unwrap();
        assert_eq!(kv.get("greeting").await.unwrap().as_deref(), Some("hello"));

        // Wholesale replacement
        kv.put("greeting", "bonjour").await.unwrap();
        assert_eq!(
            kv.get("greeting").await.unwrap().as_deref(),
            Some("bonjour")
        );
    }

    #[tokio::test]
    async fn test_delete() {
        let db = test_db().await;
        let kv = db.kv();

        kv.put("k", "v").await.unwrap();
        kv.delete("k").await.unwrap();
        assert_eq!(kv.get("k").await.unwrap(), None);

        // Deleting an absent key is a no-op
        kv.delete("k").await.unwrap();
    }
}
