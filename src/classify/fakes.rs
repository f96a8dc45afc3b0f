//! In-process stand-ins for enrichment and the language model.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::Classifier;
use crate::data::{ReferenceTables, BUILTIN_DATA};
use crate::enrich::Enricher;
use crate::error_handling::{CapabilityError, ProcessingStats};
use crate::llm::LanguageModel;

/// `None` makes the corresponding call fail.
#[derive(Default)]
pub(crate) struct FakeEnricher {
    pub abstract_text: Option<String>,
    pub snippets: Option<String>,
    pub scrape_calls: AtomicUsize,
}

impl FakeEnricher {
    pub fn new(abstract_text: &str, snippets: &str) -> Arc<Self> {
        Arc::new(Self {
            abstract_text: Some(abstract_text.to_string()),
            snippets: Some(snippets.to_string()),
            ..Default::default()
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self::default())
    }
}

#[async_trait]
impl Enricher for FakeEnricher {
    async fn fetch_abstract(&self, _query: &str) -> Result<String, CapabilityError> {
        self.abstract_text.clone().ok_or(CapabilityError::Status(503))
    }

    async fn scrape_search_results(&self, _query: &str) -> Result<String, CapabilityError> {
        self.scrape_calls.fetch_add(1, Ordering::SeqCst);
        self.snippets.clone().ok_or(CapabilityError::Status(503))
    }
}

/// `None` replies simulate a failing model.
#[derive(Default)]
pub(crate) struct FakeModel {
    pub categories: Option<String>,
    pub country: Option<String>,
    pub classify_calls: AtomicUsize,
    pub geolocate_calls: AtomicUsize,
    pub prompts: Mutex<Vec<String>>,
}

impl FakeModel {
    pub fn new(categories: Option<&str>, country: Option<&str>) -> Arc<Self> {
        Arc::new(Self {
            categories: categories.map(str::to_string),
            country: country.map(str::to_string),
            ..Default::default()
        })
    }
}

#[async_trait]
impl LanguageModel for FakeModel {
    async fn classify(&self, prompt: &str) -> Result<String, CapabilityError> {
        self.classify_calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.categories
            .clone()
            .ok_or_else(|| CapabilityError::Decode("down".to_string()))
    }

    async fn geolocate(&self, prompt: &str) -> Result<String, CapabilityError> {
        self.geolocate_calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.country
            .clone()
            .ok_or_else(|| CapabilityError::Decode("down".to_string()))
    }
}

pub(crate) fn fake_classifier(enricher: Arc<FakeEnricher>, model: Arc<FakeModel>) -> Classifier {
    Classifier::new(
        Arc::new(ReferenceTables::from_data(&BUILTIN_DATA)),
        enricher,
        model,
        Arc::new(ProcessingStats::new()),
    )
}
