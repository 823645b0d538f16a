//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::projection::QuoteProjector;
use crate::application::services::{AuthService, QuoteQueryService};
use crate::domain::repositories::QuoteSource;

/// Application state shared across request handlers.
#[derive(Clone)]
pub struct AppState {
    pub quote_queries: Arc<QuoteQueryService>,
    /// The store behind [`Self::quote_queries`], kept for health probes.
    pub quote_source: QuoteSource,
    pub auth_service: Arc<AuthService>,
}

impl AppState {
    /// Wires the query service and authentication around one quote store.
    pub fn new(source: QuoteSource, projector: QuoteProjector, auth_service: AuthService) -> Self {
        Self {
            quote_queries: Arc::new(QuoteQueryService::new(source.clone(), projector)),
            quote_source: source,
            auth_service: Arc::new(auth_service),
        }
    }
}
