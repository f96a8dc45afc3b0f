//! HTTP client initialization.
//!
//! One `reqwest::Client` is shared by the enrichment and model adapters.
//! `reqwest::Client` is reference-counted internally, so clones are cheap.

use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::{Config, DEFAULT_USER_AGENT, TCP_CONNECT_TIMEOUT_SECS};
use crate::error_handling::InitializationError;

/// Initializes the outbound HTTP client.
///
/// Creates a `reqwest::Client` configured with:
/// - A browser-like User-Agent (required by the HTML search endpoint)
/// - The per-request timeout from the configuration
/// - A shorter TCP connect timeout so unreachable hosts fail fast
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_client(config: &Config) -> Result<reqwest::Client, InitializationError> {
    let client = ClientBuilder::new()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .connect_timeout(Duration::from_secs(
            TCP_CONNECT_TIMEOUT_SECS.min(config.timeout_seconds),
        ))
        .user_agent(DEFAULT_USER_AGENT)
        .build()?;
    Ok(client)
}
