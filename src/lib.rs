//! catsite library: domain classification service
//!
//! This library classifies domains into industry categories, a country and a
//! world region, caches the result per base domain, and serves it over an
//! authenticated HTTP API.
//!
//! Structural signal (ccTLDs and well-known second-level labels such as
//! `gov.uk` or `nhs.uk`) is combined with a language model prompted with
//! search-engine context.
//!
//! # Example
//!
//! ```no_run
//! use catsite::{run_server, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     auth_secret: Some("s3cret".to_string()),
//!     listen: "127.0.0.1:8787".to_string(),
//!     ..Default::default()
//! };
//!
//! run_server(config).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

pub mod classify;
pub mod config;
pub mod data;
pub mod domain;
pub mod enrich;
pub mod error_handling;
pub mod initialization;
pub mod llm;
pub mod server;
pub mod storage;

// Re-export public API
pub use classify::{ClassificationRecord, Classifier, Source, Submission};
pub use config::{Config, LogFormat, LogLevel};
pub use data::{ReferenceTables, Region};
pub use domain::{normalize_domain, resolve, Hostname, Resolution};
pub use run::run_server;

// Internal run module (wires the service together)
mod run {
    use std::sync::Arc;

    use anyhow::{Context, Result};
    use log::{info, warn};

    use crate::classify::Classifier;
    use crate::config::Config;
    use crate::data::{ReferenceTables, BUILTIN_DATA};
    use crate::enrich::DuckDuckGoEnricher;
    use crate::error_handling::{ErrorType, InfoType, ProcessingStats};
    use crate::initialization::init_client;
    use crate::llm::ChatModel;
    use crate::server::{bind, start_server, AppState};
    use crate::storage::{init_db_pool_with_path, run_migrations, CachedStore, SqliteRecordStore};

    /// Runs the API service with the provided configuration until Ctrl-C.
    ///
    /// Opens (and migrates) the database, builds the enrichment and model
    /// clients, and serves the HTTP API.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The configuration is invalid
    /// - The database cannot be opened or migrated
    /// - The listen address cannot be bound
    pub async fn run_server(config: Config) -> Result<()> {
        config.validate().context("Invalid configuration")?;
        let addr = config.listen_addr()?;
        let secret = config
            .auth_secret
            .clone()
            .context("An auth secret is required")?;

        let pool = init_db_pool_with_path(&config.db_path)
            .await
            .context("Failed to initialize database")?;
        run_migrations(&pool)
            .await
            .context("Failed to run database migrations")?;

        let client = init_client(&config).context("Failed to initialize HTTP client")?;
        let tables = Arc::new(ReferenceTables::from_data(&BUILTIN_DATA));
        let stats = Arc::new(ProcessingStats::new());

        let enricher = Arc::new(DuckDuckGoEnricher::from_config(client.clone(), &config));
        let model = Arc::new(ChatModel::from_config(client, &config, &tables));
        info!(
            "Using model {} at {}",
            config.model_name, config.model_url
        );

        let classifier = Arc::new(Classifier::new(tables, enricher, model, stats.clone()));
        let store = Arc::new(CachedStore::new(
            Arc::new(SqliteRecordStore::new(pool.clone())),
            classifier,
        ));

        let listener = bind(addr).await?;
        start_server(listener, AppState::new(store, &secret), shutdown_signal()).await?;

        pool.close().await;
        log_final_statistics(&stats);
        Ok(())
    }

    async fn shutdown_signal() {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl-C: {e}");
            std::future::pending::<()>().await;
        }
        info!("Shutdown requested");
    }

    fn log_final_statistics(stats: &ProcessingStats) {
        info!(
            "Served {} cache hits, {} misses, {} overrides, {} human submissions",
            stats.get_info_count(InfoType::CacheHit),
            stats.get_info_count(InfoType::CacheMiss),
            stats.get_info_count(InfoType::CacheOverride),
            stats.get_info_count(InfoType::HumanSubmission),
        );
        if stats.total_errors() > 0 {
            warn!(
                "{} external failures ({} model, {} enrichment, {} storage)",
                stats.total_errors(),
                stats.get_error_count(ErrorType::ModelClassifyError)
                    + stats.get_error_count(ErrorType::ModelGeolocateError),
                stats.get_error_count(ErrorType::EnrichmentAbstractError)
                    + stats.get_error_count(ErrorType::EnrichmentScrapeError),
                stats.get_error_count(ErrorType::StoreError),
            );
        }
    }
}
