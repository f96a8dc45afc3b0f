//! Schema migrations.

use sqlx::migrate::Migrator;
use sqlx::SqlitePool;

use crate::error_handling::DatabaseError;

/// Migrations from `migrations/`, embedded at compile time.
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Brings the schema up to date. Safe to call on every start.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), DatabaseError> {
    MIGRATOR.run(pool).await?;
    log::debug!("Database migrations applied");
    Ok(())
}
