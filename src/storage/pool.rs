//! Database connection pool management.
//!
//! The pool runs SQLite in WAL mode so readers do not block the writer, and
//! creates the database file (and its directory) on first start.

use std::path::Path;
use std::time::Duration;

use log::{error, info};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;

use crate::error_handling::DatabaseError;

const MAX_CONNECTIONS: u32 = 5;
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Opens (creating if needed) the database at `db_path`.
///
/// # Errors
///
/// Returns `DatabaseError::FileCreationError` if the parent directory cannot
/// be created, or `DatabaseError::SqlError` if SQLite refuses the file.
pub async fn init_db_pool_with_path(db_path: &Path) -> Result<SqlitePool, DatabaseError> {
    if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            error!("Failed to create database directory {}: {e}", parent.display());
            DatabaseError::FileCreationError(e.to_string())
        })?;
    }

    let options = SqliteConnectOptions::new()
        .filename(db_path)
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(BUSY_TIMEOUT);

    let pool = SqlitePoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .connect_with(options)
        .await
        .map_err(|e| {
            error!("Failed to open database {}: {e}", db_path.display());
            DatabaseError::SqlError(e)
        })?;

    info!("Database ready at {}", db_path.display());
    Ok(pool)
}
