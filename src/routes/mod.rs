//! HTTP routing for the service.
//!
//! `build_http_mux` produces an owned routing table with the health check
//! mounted at [`HEALTHCHECK_PATH`]. Each call returns an independent router, so
//! several servers (for example in tests) can run side by side.
//!
//! Request tracing is enabled via middleware that generates a unique request ID
//! for each incoming request, allowing correlation of all logs within a request.

pub mod health;

use axum::{http::Uri, middleware, routing::get, Router};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::{CACHE_CONTROL_HEALTH, HEALTHCHECK_PATH};
use crate::error::AppError;
use crate::middleware::request_id_layer;

/// Creates the router with the health check and the 404 fallback.
pub fn build_http_mux() -> Router {
    build_http_mux_with(Router::new())
}

/// Creates the router, merging in routes owned by the embedding service.
///
/// Panics if `routes` registers [`HEALTHCHECK_PATH`] itself, since axum rejects
/// overlapping routes at construction time.
pub fn build_http_mux_with(routes: Router) -> Router {
    // Health check - no caching, always fresh for liveness probes
    let health_routes = Router::new()
        .route(HEALTHCHECK_PATH, get(health::healthcheck))
        .layer(SetResponseHeaderLayer::overriding(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_HEALTH),
        ));

    Router::new()
        .merge(health_routes)
        .merge(routes)
        .fallback(not_found)
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}

async fn not_found(uri: Uri) -> AppError {
    tracing::debug!(path = %uri.path(), "No route matched");
    AppError::NotFound(uri.path().to_string())
}
