//! Top-level router configuration combining API and web routes.
//!
//! # Route Structure
//!
//! - `GET  /health`      - Health check: storage reachability (public)
//! - `/api/*`            - JSON API (rate limited per IP)
//! - `/`, `/ranking`, `/blog/*` - HTML pages
//! - `/static/*`         - Static assets
//! - anything else       - HTML 404 page
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket on `/api`
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{rate_limit, tracing as trace};
use crate::state::AppState;
use crate::web;
use crate::web::handlers::not_found_handler;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Constructs the application router with trailing slashes trimmed.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `rate_limit_enabled` - applies [`rate_limit::layer`] to `/api`; the
///   limiter keys on the peer address, so the router must then be served
///   with connect info
pub fn app_router(state: AppState, rate_limit_enabled: bool) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(build_router(state, rate_limit_enabled))
}

/// Same routes as [`app_router`] without path normalization.
pub fn build_router(state: AppState, rate_limit_enabled: bool) -> Router {
    let mut api_router = api::routes::routes();
    if rate_limit_enabled {
        api_router = api_router.layer(rate_limit::layer());
    }

    Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api_router)
        .merge(web::routes::routes())
        .nest_service("/static", ServeDir::new("static"))
        .fallback(not_found_handler)
        .with_state(state)
        .layer(trace::layer())
}
