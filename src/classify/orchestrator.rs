//! Classification of a single hostname.
//!
//! Structural signal from the resolver is combined with the language model:
//! categories are the union of both, and the model is only asked for a
//! country when the hostname did not already decide it.
//!
//! External failures never fail a classification. They are logged, counted,
//! and treated as "no signal".

use std::collections::BTreeSet;
use std::sync::Arc;

use log::{debug, info, warn};

use super::record::{ClassificationRecord, Meta, Source, Submission};
use super::terms::TermMatcher;
use crate::data::{ReferenceTables, Region, OTHER};
use crate::domain::{resolve, Hostname, Resolution};
use crate::enrich::Enricher;
use crate::error_handling::{ErrorType, InfoType, ProcessingStats, SubmissionError};
use crate::llm::LanguageModel;

/// Produces classification records from hostnames.
pub struct Classifier {
    tables: Arc<ReferenceTables>,
    enricher: Arc<dyn Enricher>,
    model: Arc<dyn LanguageModel>,
    industries: TermMatcher,
    countries: TermMatcher,
    stats: Arc<ProcessingStats>,
}

/// Geography decided for a record and whether the model supplied it.
struct Geo {
    country: String,
    region: Region,
    from_model: bool,
}

impl Classifier {
    pub fn new(
        tables: Arc<ReferenceTables>,
        enricher: Arc<dyn Enricher>,
        model: Arc<dyn LanguageModel>,
        stats: Arc<ProcessingStats>,
    ) -> Self {
        let industries = TermMatcher::new(&tables.industry_names());
        let countries = TermMatcher::new(tables.country_names());
        Self {
            tables,
            enricher,
            model,
            industries,
            countries,
            stats,
        }
    }

    pub fn tables(&self) -> &ReferenceTables {
        &self.tables
    }

    pub fn stats(&self) -> &Arc<ProcessingStats> {
        &self.stats
    }

    /// Structural resolution only; no external calls.
    pub fn resolve(&self, host: &Hostname) -> Resolution {
        resolve(host, &self.tables)
    }

    /// Classifies a hostname, calling out to enrichment and the model.
    pub async fn classify(&self, host: &Hostname) -> ClassificationRecord {
        let resolution = self.resolve(host);
        let base = resolution.base_domain.as_str();

        let context = self.gather_context(base).await;
        let prompt = format!("{}:\n{}", base, context);

        let structural: BTreeSet<String> =
            resolution.categories.iter().map(|c| c.to_string()).collect();
        let inferred = self.infer_categories(&prompt).await;
        let model_contributed = inferred.iter().any(|c| !structural.contains(c));

        let mut categories = structural;
        if inferred.is_empty() {
            categories.insert(OTHER.to_string());
        } else {
            categories.extend(inferred);
        }

        let geo = self.geolocate(&resolution, &prompt).await;
        let source = if model_contributed || geo.from_model {
            Source::Model
        } else {
            Source::StructuralData
        };

        let record = ClassificationRecord {
            domain: host.as_str().to_string(),
            base_domain: resolution.base_domain.clone(),
            country: geo.country,
            region: geo.region,
            categories,
            meta: Meta {
                time_classified: chrono::Utc::now().timestamp_millis(),
                source,
                base_domain: resolution.base_domain.clone(),
            },
        };
        info!(
            "Classified {} as {:?} ({}, {})",
            record.base_domain, record.categories, record.country, record.region
        );
        record
    }

    /// Builds a record from a human submission.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first country or category that is not in
    /// the taxonomy.
    pub fn submit(
        &self,
        host: &Hostname,
        submission: &Submission,
    ) -> Result<ClassificationRecord, SubmissionError> {
        let region = self
            .tables
            .region_for_country(&submission.country)
            .ok_or_else(|| SubmissionError::UnknownCountry(submission.country.clone()))?;
        if let Some(unknown) = submission
            .categories
            .iter()
            .find(|c| !self.tables.is_industry(c))
        {
            return Err(SubmissionError::UnknownCategory(unknown.clone()));
        }

        let base_domain = self.resolve(host).base_domain;
        let mut categories: BTreeSet<String> = submission.categories.iter().cloned().collect();
        if categories.is_empty() {
            categories.insert(OTHER.to_string());
        }

        self.stats.increment_info(InfoType::HumanSubmission);
        Ok(ClassificationRecord {
            domain: host.as_str().to_string(),
            base_domain: base_domain.clone(),
            country: submission.country.clone(),
            region,
            categories,
            meta: Meta {
                time_classified: chrono::Utc::now().timestamp_millis(),
                source: Source::Human,
                base_domain,
            },
        })
    }

    /// The abstract if there is one, otherwise scraped search snippets.
    async fn gather_context(&self, base: &str) -> String {
        match self.enricher.fetch_abstract(base).await {
            Ok(text) if !text.trim().is_empty() => return text,
            Ok(_) => debug!("No abstract for {base}, falling back to search results"),
            Err(e) => {
                warn!("Abstract lookup failed for {base}: {e}");
                self.stats.increment_error(ErrorType::EnrichmentAbstractError);
            }
        }

        match self.enricher.scrape_search_results(base).await {
            Ok(text) => text,
            Err(e) => {
                warn!("Search scrape failed for {base}: {e}");
                self.stats.increment_error(ErrorType::EnrichmentScrapeError);
                String::new()
            }
        }
    }

    /// Known industries named in the model's reply.
    async fn infer_categories(&self, prompt: &str) -> Vec<String> {
        let reply = match self.model.classify(prompt).await {
            Ok(reply) => reply,
            Err(e) => {
                warn!("Model classification failed: {e}");
                self.stats.increment_error(ErrorType::ModelClassifyError);
                return Vec::new();
            }
        };

        let found: Vec<String> = self
            .industries
            .find_all(&reply)
            .into_iter()
            .map(str::to_string)
            .collect();
        if found.is_empty() {
            debug!("No known industry in model reply {:?}", reply);
            self.stats.increment_info(InfoType::UnrecognisedCategories);
        }
        found
    }

    async fn geolocate(&self, resolution: &Resolution, prompt: &str) -> Geo {
        if resolution.has_full_geo() {
            self.stats.increment_info(InfoType::StructuralGeolocation);
            return Geo {
                country: resolution.country.unwrap_or(OTHER).to_string(),
                region: resolution.region.unwrap_or_default(),
                from_model: false,
            };
        }

        if let Some(country) = self.infer_country(prompt).await {
            let region = self.tables.region_for_country(&country).unwrap_or_default();
            return Geo {
                country,
                region,
                from_model: true,
            };
        }

        // Keep whatever the hostname told us; a known country decides the region
        match resolution.country {
            Some(country) => Geo {
                country: country.to_string(),
                region: self.tables.region_for_country(country).unwrap_or_default(),
                from_model: false,
            },
            None => Geo {
                country: OTHER.to_string(),
                region: resolution.region.unwrap_or_default(),
                from_model: false,
            },
        }
    }

    /// First known country named in the model's reply.
    async fn infer_country(&self, prompt: &str) -> Option<String> {
        let reply = match self.model.geolocate(prompt).await {
            Ok(reply) => reply,
            Err(e) => {
                warn!("Model geolocation failed: {e}");
                self.stats.increment_error(ErrorType::ModelGeolocateError);
                return None;
            }
        };

        let found = self.countries.find_first(&reply).map(str::to_string);
        if found.is_none() {
            debug!("No known country in model reply {:?}", reply);
            self.stats.increment_info(InfoType::UnrecognisedCountry);
        }
        found
    }
}
