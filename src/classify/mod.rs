//! Domain classification.
//!
//! This module provides:
//! - The record returned by the API and persisted by the store (`record`)
//! - Known-term extraction from model replies (`terms`)
//! - The classifier combining structural resolution, enrichment and the
//!   language model (`orchestrator`)

mod orchestrator;
mod record;
mod terms;

#[cfg(test)]
pub(crate) mod fakes;

pub use orchestrator::Classifier;
pub use record::{ClassificationRecord, Meta, Source, Submission};
pub use terms::{extract_known_term, extract_known_terms, TermMatcher};
