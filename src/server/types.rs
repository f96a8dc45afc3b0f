//! Server state, query parameters and error responses.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Instant;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::classify::Submission;
use crate::error_handling::{DatabaseError, InsertError, SubmissionError};
use crate::storage::CachedStore;

/// Shared state for every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<CachedStore>,
    pub auth_secret: Arc<str>,
    pub start_time: Arc<Instant>,
}

impl AppState {
    pub fn new(store: Arc<CachedStore>, auth_secret: &str) -> Self {
        Self {
            store,
            auth_secret: Arc::from(auth_secret),
            start_time: Arc::new(Instant::now()),
        }
    }
}

/// `?cacheoverride=true` forces a fresh classification.
#[derive(Debug, Default, Deserialize)]
pub struct LookupQuery {
    pub cacheoverride: Option<String>,
}

impl LookupQuery {
    pub fn cache_override(&self) -> bool {
        self.cacheoverride.as_deref() == Some("true")
    }
}

/// Query string of the `GET /api?domain=` alias.
#[derive(Debug, Default, Deserialize)]
pub struct LegacyQuery {
    pub domain: Option<String>,
    pub cacheoverride: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub auth: String,
}

/// JSON response for `/api/status`.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub uptime_seconds: f64,
    pub errors: CounterGroup,
    pub info: CounterGroup,
}

#[derive(Debug, Serialize)]
pub struct CounterGroup {
    pub total: usize,
    pub counts: BTreeMap<&'static str, usize>,
}

/// Every way a request can fail, with its HTTP rendering.
#[derive(Debug)]
pub enum ApiError {
    InvalidDomain(String),
    MissingDomain,
    Rejected(SubmissionError),
    MalformedBody(String),
    NotFound(String),
    Database(DatabaseError),
}

impl From<DatabaseError> for ApiError {
    fn from(e: DatabaseError) -> Self {
        ApiError::Database(e)
    }
}

impl From<InsertError> for ApiError {
    fn from(e: InsertError) -> Self {
        match e {
            InsertError::Rejected(e) => ApiError::Rejected(e),
            InsertError::Database(e) => ApiError::Database(e),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::InvalidDomain(domain) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "invalid domain", "domain": domain }),
            ),
            ApiError::MissingDomain => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "domain parameter required" }),
            ),
            ApiError::Rejected(e) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": e.to_string(), "example_payload": Submission::example_payload() }),
            ),
            ApiError::MalformedBody(message) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": message, "example_payload": Submission::example_payload() }),
            ),
            ApiError::NotFound(base) => (
                StatusCode::NOT_FOUND,
                json!({ "error": format!("{base} doesn't exist") }),
            ),
            ApiError::Database(e) => {
                log::error!("Storage failure while serving request: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "server error" }),
                )
            }
        };
        (status, Json(body)).into_response()
    }
}
