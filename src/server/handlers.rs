//! API route handlers.

use std::collections::BTreeMap;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;
use strum::IntoEnumIterator;

use super::types::{ApiError, AppState, CounterGroup, LegacyQuery, LookupQuery, StatusResponse};
use crate::classify::{ClassificationRecord, Submission};
use crate::domain::{normalize_domain, Hostname};
use crate::error_handling::{ErrorType, InfoType};

fn parse_host(raw: &str) -> Result<Hostname, ApiError> {
    normalize_domain(raw)
        .and_then(|domain| Hostname::parse(&domain))
        .map_err(|e| {
            log::debug!("Rejected domain {raw:?}: {e}");
            ApiError::InvalidDomain(raw.to_string())
        })
}

/// `GET /api/v2/domain/:domain`
pub async fn get_domain(
    State(state): State<AppState>,
    Path(domain): Path<String>,
    Query(query): Query<LookupQuery>,
) -> Result<Json<ClassificationRecord>, ApiError> {
    let host = parse_host(&domain)?;
    let record = state.store.lookup(&host, query.cache_override()).await?;
    Ok(Json(record))
}

/// `GET /api?domain=`
pub async fn get_domain_by_query(
    State(state): State<AppState>,
    Query(query): Query<LegacyQuery>,
) -> Result<Json<ClassificationRecord>, ApiError> {
    let domain = query.domain.ok_or(ApiError::MissingDomain)?;
    let lookup = LookupQuery {
        cacheoverride: query.cacheoverride,
    };
    get_domain(State(state), Path(domain), Query(lookup)).await
}

/// `POST /api/v2/domain/:domain` with a [`Submission`] body.
pub async fn post_domain(
    State(state): State<AppState>,
    Path(domain): Path<String>,
    payload: Result<Json<Submission>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let host = parse_host(&domain)?;
    let Json(submission) = payload.map_err(|e| ApiError::MalformedBody(e.body_text()))?;

    let record = state.store.insert(&host, &submission).await?;
    log::info!(
        "Stored human classification for {}: {:?}",
        record.base_domain,
        record.categories
    );
    Ok(Json(json!({
        "success": format!("successfully imported {}", record.base_domain)
    })))
}

/// `DELETE /api/v2/domain/:domain`
pub async fn delete_domain(
    State(state): State<AppState>,
    Path(domain): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let host = parse_host(&domain)?;
    let base = state.store.base_domain(&host);
    if !state.store.remove(&host).await? {
        return Err(ApiError::NotFound(base));
    }
    log::info!("Deleted classification for {base}");
    Ok(Json(json!({ "success": format!("successfully deleted {base}") })))
}

/// `GET /api/all`
pub async fn list_all(
    State(state): State<AppState>,
) -> Result<Json<Vec<ClassificationRecord>>, ApiError> {
    Ok(Json(state.store.list_all().await?))
}

/// `GET /api/status`: uptime and event counters.
pub async fn status(State(state): State<AppState>) -> Json<StatusResponse> {
    let stats = state.store.classifier().stats();

    let errors: BTreeMap<&'static str, usize> = ErrorType::iter()
        .map(|t| (t.as_str(), stats.get_error_count(t)))
        .collect();
    let info: BTreeMap<&'static str, usize> = InfoType::iter()
        .map(|t| (t.as_str(), stats.get_info_count(t)))
        .collect();

    Json(StatusResponse {
        uptime_seconds: state.start_time.elapsed().as_secs_f64(),
        errors: CounterGroup {
            total: stats.total_errors(),
            counts: errors,
        },
        info: CounterGroup {
            total: stats.total_info(),
            counts: info,
        },
    })
}

pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "not found" })))
}
