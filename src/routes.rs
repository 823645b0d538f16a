//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health`      - Health check with quote store probe (public)
//! - `/api/*`            - Quote API (Bearer token required)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket on `/api/*`
//! - **Authentication** - Bearer token on `/api/*`
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{auth, rate_limit, tracing};
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Per-IP token bucket settings for `/api/*`.
#[derive(Debug, Clone, Copy)]
pub struct RateLimit {
    pub period_secs: u64,
    pub burst: u32,
}

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `rate_limit` - token bucket for the API; `None` disables limiting, which
///   also removes the need to serve with connect info
pub fn app_router(state: AppState, rate_limit: Option<RateLimit>) -> NormalizePath<Router> {
    let mut api_router = api::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    if let Some(limit) = rate_limit {
        api_router = api_router.layer(rate_limit::layer(limit.period_secs, limit.burst));
    }

    let router = Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api_router)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
