//! Read-through cache in front of the classifier.

use std::sync::Arc;

use log::{debug, warn};

use super::RecordStore;
use crate::classify::{ClassificationRecord, Classifier, Submission};
use crate::domain::Hostname;
use crate::error_handling::{DatabaseError, ErrorType, InfoType, InsertError};

/// The classifier behind a [`RecordStore`].
///
/// A base domain is classified at most once unless the caller overrides the
/// cache; every later lookup for any hostname with that base is served from
/// the store.
#[derive(Clone)]
pub struct CachedStore {
    store: Arc<dyn RecordStore>,
    classifier: Arc<Classifier>,
}

impl CachedStore {
    pub fn new(store: Arc<dyn RecordStore>, classifier: Arc<Classifier>) -> Self {
        Self { store, classifier }
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    /// The cache key for a hostname.
    pub fn base_domain(&self, host: &Hostname) -> String {
        self.classifier.resolve(host).base_domain
    }

    /// Returns the stored record for the host's base domain, classifying and
    /// storing it first on a miss (or always, with `cache_override`).
    ///
    /// A failure to store a fresh classification is logged and the record is
    /// still returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub async fn lookup(
        &self,
        host: &Hostname,
        cache_override: bool,
    ) -> Result<ClassificationRecord, DatabaseError> {
        let stats = self.classifier.stats();
        let base = self.base_domain(host);

        if cache_override {
            debug!("Cache override for {base}");
            stats.increment_info(InfoType::CacheOverride);
        } else {
            match self.store.get(&base).await {
                Ok(Some(record)) => {
                    debug!("Cache hit for {base}");
                    stats.increment_info(InfoType::CacheHit);
                    return Ok(record);
                }
                Ok(None) => stats.increment_info(InfoType::CacheMiss),
                Err(e) => {
                    stats.increment_error(ErrorType::StoreError);
                    return Err(e);
                }
            }
        }

        let record = self.classifier.classify(host).await;
        if let Err(e) = self.store.put(&record).await {
            warn!("Failed to store classification for {base}: {e}");
            stats.increment_error(ErrorType::StoreError);
        }
        Ok(record)
    }

    /// Validates and stores a human classification, replacing any record
    /// for the same base domain.
    pub async fn insert(
        &self,
        host: &Hostname,
        submission: &Submission,
    ) -> Result<ClassificationRecord, InsertError> {
        let record = self.classifier.submit(host, submission)?;
        self.store.put(&record).await.map_err(|e| {
            self.classifier.stats().increment_error(ErrorType::StoreError);
            e
        })?;
        Ok(record)
    }

    /// Deletes the record for the host's base domain; returns whether one
    /// existed.
    pub async fn remove(&self, host: &Hostname) -> Result<bool, DatabaseError> {
        self.store.delete(&self.base_domain(host)).await
    }

    pub async fn list_all(&self) -> Result<Vec<ClassificationRecord>, DatabaseError> {
        self.store.list_all().await
    }
}
