//! Persistence of classification records.
//!
//! Records are keyed by base domain. [`RecordStore`] is the persistence seam;
//! [`SqliteRecordStore`] implements it on SQLite. [`CachedStore`] puts the
//! classifier behind the store so each base domain is classified once.

mod cached;
mod migrations;
mod pool;
mod sqlite;

#[cfg(test)]
pub(crate) mod test_helpers;

use async_trait::async_trait;

use crate::classify::ClassificationRecord;
use crate::error_handling::DatabaseError;

pub use cached::CachedStore;
pub use migrations::run_migrations;
pub use pool::init_db_pool_with_path;
pub use sqlite::SqliteRecordStore;

/// Key-value persistence for records, keyed by `base_domain`.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn get(&self, base_domain: &str) -> Result<Option<ClassificationRecord>, DatabaseError>;

    /// Inserts or replaces the record stored under its base domain.
    async fn put(&self, record: &ClassificationRecord) -> Result<(), DatabaseError>;

    /// Returns whether a record existed.
    async fn delete(&self, base_domain: &str) -> Result<bool, DatabaseError>;

    /// Every record, ordered by base domain.
    async fn list_all(&self) -> Result<Vec<ClassificationRecord>, DatabaseError>;
}
