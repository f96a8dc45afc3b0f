//! Stored classification records and human submissions.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::data::Region;

/// Who produced a record's categories and geography.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Source {
    /// Submitted through the API
    Human,
    /// The language model contributed a category or the country
    Model,
    /// Only the hostname structure was needed
    StructuralData,
}

/// Bookkeeping attached to every record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    /// Milliseconds since the Unix epoch.
    pub time_classified: i64,
    pub source: Source,
    pub base_domain: String,
}

/// The classification of one base domain.
///
/// This is what the API returns and what the store persists, as JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationRecord {
    /// Hostname as requested.
    pub domain: String,
    pub base_domain: String,
    pub country: String,
    pub region: Region,
    /// Never empty; `"Other"` when nothing was recognised.
    pub categories: BTreeSet<String>,
    pub meta: Meta,
}

impl ClassificationRecord {
    pub fn source(&self) -> Source {
        self.meta.source
    }
}

/// A human-provided classification for `POST /api/v2/domain/:domain`.
///
/// Any `region` in the payload is ignored; it is derived from the country.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Submission {
    pub country: String,
    pub categories: Vec<String>,
}

impl Submission {
    /// A valid payload, returned alongside validation errors.
    pub fn example_payload() -> serde_json::Value {
        serde_json::json!({
            "country": "United Kingdom",
            "categories": ["Financial Services", "Information Technology and Internet"],
        })
    }
}
