//! HTTP API.
//!
//! Routes (all but `/auth` require the shared secret):
//! - `POST /auth` - Exchange the secret for a session cookie
//! - `GET|POST|DELETE /api/v2/domain/:domain` - Look up, submit or delete a classification
//! - `GET /api?domain=` - Lookup alias for older clients
//! - `GET /api/all` - Every stored record
//! - `GET /api/status` - Uptime and event counters

mod auth;
mod handlers;
mod types;

use std::future::Future;
use std::net::SocketAddr;

use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;

pub use auth::{is_authorized, LOGIN_PAGE};
pub use types::{ApiError, AppState};

/// Builds the router with authentication applied to everything but `/auth`.
pub fn build_router(state: AppState) -> Router {
    let domain_routes = get(handlers::get_domain)
        .post(handlers::post_domain)
        .delete(handlers::delete_domain);

    let protected = Router::new()
        .route("/api/v2/domain/:domain", domain_routes.clone())
        .route("/api/v2/domain/:domain/", domain_routes)
        .route("/api", get(handlers::get_domain_by_query))
        .route("/api/", get(handlers::get_domain_by_query))
        .route("/api/all", get(handlers::list_all))
        .route("/api/status", get(handlers::status))
        .fallback(handlers::not_found)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_auth,
        ));

    Router::new()
        .route("/auth", post(auth::login))
        .merge(protected)
        .with_state(state)
}

/// Binds the API listener.
pub async fn bind(addr: SocketAddr) -> Result<TcpListener, anyhow::Error> {
    TcpListener::bind(addr)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind API server to {}: {}", addr, e))
}

/// Serves the API on `listener` until `shutdown` completes.
pub async fn start_server<F>(
    listener: TcpListener,
    state: AppState,
    shutdown: F,
) -> Result<(), anyhow::Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    log::info!("API listening on http://{}/", addr);
    log::info!("  - Lookup: http://{}/api/v2/domain/<domain>", addr);
    log::info!("  - Status: http://{}/api/status", addr);

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| anyhow::anyhow!("API server error: {}", e))?;

    log::info!("API server stopped");
    Ok(())
}
