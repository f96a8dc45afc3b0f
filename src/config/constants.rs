//! Configuration constants.
//!
//! This module defines the defaults and fixed limits used throughout the
//! application: network endpoints, timeouts, and validation bounds.

/// Default address the HTTP API binds to.
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8787";
/// Default SQLite database path.
pub const DEFAULT_DB_PATH: &str = "./catsite.db";

// Authentication
/// Request header carrying the shared secret.
pub const AUTH_HEADER: &str = "x-catsite-auth";
/// Cookie carrying the shared secret for browser sessions.
pub const AUTH_COOKIE: &str = "catsite";

// Domain validation
/// Shortest domain accepted by the API (`a.io`).
pub const MIN_DOMAIN_LENGTH: usize = 4;
/// Longest domain accepted by the API (RFC 1035 limit).
pub const MAX_DOMAIN_LENGTH: usize = 253;

// External requests
/// Per-request timeout for enrichment and model calls in seconds.
/// The HTTP API itself imposes no deadline, so this bounds a cache miss.
pub const EXTERNAL_REQUEST_TIMEOUT_SECS: u64 = 10;
/// TCP connection timeout in seconds
pub const TCP_CONNECT_TIMEOUT_SECS: u64 = 5;

/// User-Agent for enrichment requests. The HTML search endpoint rejects
/// requests without a browser-like agent.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

// Enrichment
/// DuckDuckGo instant-answer API.
pub const DUCKDUCKGO_API_URL: &str = "https://api.duckduckgo.com/";
/// DuckDuckGo HTML search results page.
pub const DUCKDUCKGO_HTML_URL: &str = "https://html.duckduckgo.com/html/";
/// CSS selector for one search result on the HTML page.
pub const SEARCH_RESULT_SELECTOR: &str = ".result__body";
/// Only the top results are used; lower-ranked results are low confidence.
pub const MAX_SEARCH_SNIPPETS: usize = 5;
/// Prefix placed before the bullet list of scraped snippets.
pub const ENRICHMENT_PREFIX: &str = "Enrichment details:\n\n* ";

// Language model
/// OpenAI-compatible chat API base URL (a local Ollama server by default).
pub const DEFAULT_MODEL_URL: &str = "http://127.0.0.1:11434/v1";
/// Default chat model.
pub const DEFAULT_MODEL_NAME: &str = "hermes-2-pro-mistral-7b";
/// Replies are a short list of names; cap generation accordingly.
pub const MODEL_MAX_TOKENS: u32 = 128;
