//! Context gathering for the language model.
//!
//! Before asking the model about a domain, a short piece of descriptive text
//! is gathered from a search provider: the instant-answer abstract when there
//! is one, otherwise snippets from the top search results.

mod duckduckgo;

use async_trait::async_trait;

use crate::error_handling::CapabilityError;

pub use duckduckgo::{format_snippets, DuckDuckGoEnricher};

/// A source of descriptive text about a domain.
///
/// Both methods return an empty string when the provider has nothing to say.
#[async_trait]
pub trait Enricher: Send + Sync {
    /// Short summary paragraph about `query`.
    async fn fetch_abstract(&self, query: &str) -> Result<String, CapabilityError>;

    /// Bulleted snippets from the top search results for `query`.
    async fn scrape_search_results(&self, query: &str) -> Result<String, CapabilityError>;
}
