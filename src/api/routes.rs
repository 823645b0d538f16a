//! API route configuration.
//!
//! All API endpoints require Bearer token authentication via
//! [`crate::api::middleware::auth`].

use crate::api::handlers::{quote_list_handler, quote_search_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All API routes, protected by Bearer token authentication.
///
/// # Endpoints
///
/// - `GET  /quotes`         - Paginated quote list from query parameters
/// - `POST /quotes/search`  - Paginated quote list from a JSON query body
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/quotes", get(quote_list_handler))
        .route("/quotes/search", post(quote_search_handler))
}
