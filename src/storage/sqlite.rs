//! SQLite-backed [`RecordStore`].

use async_trait::async_trait;
use sqlx::{Row, SqlitePool};

use super::RecordStore;
use crate::classify::ClassificationRecord;
use crate::error_handling::DatabaseError;

/// Stores each record as a JSON document in the `classifications` table.
#[derive(Debug, Clone)]
pub struct SqliteRecordStore {
    pool: SqlitePool,
}

impl SqliteRecordStore {
    /// Wraps a pool whose schema is already migrated.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl RecordStore for SqliteRecordStore {
    async fn get(&self, base_domain: &str) -> Result<Option<ClassificationRecord>, DatabaseError> {
        let row = sqlx::query("SELECT record FROM classifications WHERE base_domain = ?")
            .bind(base_domain)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => {
                let json: String = row.try_get("record")?;
                Ok(Some(serde_json::from_str(&json)?))
            }
            None => Ok(None),
        }
    }

    async fn put(&self, record: &ClassificationRecord) -> Result<(), DatabaseError> {
        let json = serde_json::to_string(record)?;
        sqlx::query(
            "INSERT INTO classifications (base_domain, record, updated_at) VALUES (?, ?, ?)
             ON CONFLICT(base_domain) DO UPDATE SET
                 record = excluded.record,
                 updated_at = excluded.updated_at",
        )
        .bind(&record.base_domain)
        .bind(json)
        .bind(chrono::Utc::now().timestamp_millis())
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn delete(&self, base_domain: &str) -> Result<bool, DatabaseError> {
        let result = sqlx::query("DELETE FROM classifications WHERE base_domain = ?")
            .bind(base_domain)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn list_all(&self) -> Result<Vec<ClassificationRecord>, DatabaseError> {
        let rows = sqlx::query("SELECT base_domain, record FROM classifications ORDER BY base_domain")
            .fetch_all(&self.pool)
            .await?;

        let mut records = Vec::with_capacity(rows.len());
        for row in rows {
            let json: String = row.try_get("record")?;
            match serde_json::from_str(&json) {
                Ok(record) => records.push(record),
                Err(e) => {
                    let key: String = row.try_get("base_domain")?;
                    log::warn!("Skipping unreadable record for {key}: {e}");
                }
            }
        }
        Ok(records)
    }
}
