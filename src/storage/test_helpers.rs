//! Shared test helpers for storage and server tests.

use std::collections::BTreeSet;

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

use crate::classify::{ClassificationRecord, Meta, Source};
use crate::data::Region;
use crate::storage::run_migrations;

/// In-memory database with migrations applied.
///
/// A single connection, since every `sqlite::memory:` connection is its own
/// database.
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create test database pool");
    run_migrations(&pool)
        .await
        .expect("Failed to run migrations");
    pool
}

/// A record with the given base domain and category.
pub fn sample_record(base_domain: &str, category: &str) -> ClassificationRecord {
    ClassificationRecord {
        domain: format!("www.{base_domain}"),
        base_domain: base_domain.to_string(),
        country: "United Kingdom".to_string(),
        region: Region::WesternEurope,
        categories: BTreeSet::from([category.to_string()]),
        meta: Meta {
            time_classified: 1_700_000_000_000,
            source: Source::Human,
            base_domain: base_domain.to_string(),
        },
    }
}
