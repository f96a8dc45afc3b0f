// Shared test helpers: scripted capabilities and a running API server.
//
// The server is real (bound to a loopback port, backed by a SQLite file in a
// temporary directory); only enrichment and the language model are faked.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tempfile::TempDir;

use catsite::enrich::Enricher;
use catsite::error_handling::{CapabilityError, ProcessingStats};
use catsite::llm::LanguageModel;
use catsite::server::{bind, start_server, AppState};
use catsite::storage::{init_db_pool_with_path, run_migrations, CachedStore, SqliteRecordStore};
use catsite::data::BUILTIN_DATA;
use catsite::{Classifier, ReferenceTables};

pub const SECRET: &str = "test-secret";

/// Always answers with the same abstract.
pub struct StaticEnricher(pub &'static str);

#[async_trait]
impl Enricher for StaticEnricher {
    async fn fetch_abstract(&self, _query: &str) -> Result<String, CapabilityError> {
        Ok(self.0.to_string())
    }

    async fn scrape_search_results(&self, _query: &str) -> Result<String, CapabilityError> {
        Ok(String::new())
    }
}

/// Fixed replies; counts classification calls.
pub struct ScriptedModel {
    pub categories: &'static str,
    pub country: &'static str,
    pub classify_calls: AtomicUsize,
}

impl ScriptedModel {
    pub fn new(categories: &'static str, country: &'static str) -> Arc<Self> {
        Arc::new(Self {
            categories,
            country,
            classify_calls: AtomicUsize::new(0),
        })
    }

    #[allow(dead_code)] // Used by other test files
    pub fn calls(&self) -> usize {
        self.classify_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LanguageModel for ScriptedModel {
    async fn classify(&self, _prompt: &str) -> Result<String, CapabilityError> {
        self.classify_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.categories.to_string())
    }

    async fn geolocate(&self, _prompt: &str) -> Result<String, CapabilityError> {
        Ok(self.country.to_string())
    }
}

/// A running API server.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: reqwest::Client,
    pub model: Arc<ScriptedModel>,
    _dir: TempDir,
}

#[allow(dead_code)] // Used by other test files
impl TestApp {
    pub async fn spawn(model: Arc<ScriptedModel>) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let pool = init_db_pool_with_path(&dir.path().join("catsite.db"))
            .await
            .expect("Failed to open database");
        run_migrations(&pool)
            .await
            .expect("Failed to run migrations");

        let classifier = Classifier::new(
            Arc::new(ReferenceTables::from_data(&BUILTIN_DATA)),
            Arc::new(StaticEnricher("A description of the site.")),
            model.clone(),
            Arc::new(ProcessingStats::new()),
        );
        let store = CachedStore::new(
            Arc::new(SqliteRecordStore::new(pool)),
            Arc::new(classifier),
        );
        let state = AppState::new(Arc::new(store), SECRET);

        let listener = bind("127.0.0.1:0".parse().unwrap())
            .await
            .expect("Failed to bind");
        let addr = listener.local_addr().unwrap();
        tokio::spawn(start_server(listener, state, std::future::pending()));

        Self {
            addr,
            client: reqwest::Client::new(),
            model,
            _dir: dir,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(self.url(path))
            .header("x-catsite-auth", SECRET)
            .send()
            .await
            .expect("Request failed")
    }

    pub async fn post_json(&self, path: &str, body: &serde_json::Value) -> reqwest::Response {
        self.client
            .post(self.url(path))
            .header("x-catsite-auth", SECRET)
            .json(body)
            .send()
            .await
            .expect("Request failed")
    }

    pub async fn delete(&self, path: &str) -> reqwest::Response {
        self.client
            .delete(self.url(path))
            .header("x-catsite-auth", SECRET)
            .send()
            .await
            .expect("Request failed")
    }
}
