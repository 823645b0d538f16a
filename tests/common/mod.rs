#![allow(dead_code)]

use async_trait::async_trait;
use axum::{Router, middleware, routing::get};
use chrono::{DateTime, Duration, TimeZone, Utc};
use rust_decimal::Decimal;
use std::sync::Arc;

use quote_service::api::handlers::health_handler;
use quote_service::api::middleware::auth;
use quote_service::api::routes::protected_routes;
use quote_service::application::projection::{ConfirmationPolicy, QuoteProjector};
use quote_service::application::services::AuthService;
use quote_service::application::services::auth_service::hash_token;
use quote_service::domain::entities::{
    Email, Phone, Quote, QuoteId, QuotePriority, QuoteStatus, ServiceType,
};
use quote_service::domain::repositories::{
    FilteredQuoteRepository, QuotePage, QuoteQueryFilters, QuoteRepository, QuoteSource,
};
use quote_service::error::AppError;
use quote_service::infrastructure::persistence::InMemoryQuoteRepository;
use quote_service::state::AppState;

pub const SIGNING_SECRET: &str = "test-signing-secret";
pub const TOKEN: &str = "admin-token";

pub fn bearer() -> String {
    format!("Bearer {TOKEN}")
}

pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap()
}

pub fn create_quote(n: u32) -> Quote {
    const SERVICES: [&str; 3] = ["snow-ice-removal", "landscaping", "demolition"];

    Quote::submitted(
        QuoteId::new(format!("{n:08}-quote")).unwrap(),
        format!("Customer {n:02}"),
        Email::parse(&format!("customer{n}@example.com")).unwrap(),
        Phone::parse("616-555-0100").unwrap(),
        ServiceType::from_catalog(SERVICES[n as usize % SERVICES.len()]).unwrap(),
        "Seasonal service request",
        Decimal::new(i64::from(n) * 10_000, 2),
        base_time() + Duration::days(i64::from(n)),
    )
}

/// Forty-five quotes submitted one day apart; every fifth is approved and
/// every ninth has already expired.
pub fn sample_quotes() -> Vec<Quote> {
    (1..=45)
        .map(|n| {
            let mut quote = create_quote(n);
            if n % 5 == 0 {
                quote = quote
                    .with_status(QuoteStatus::Approved)
                    .with_priority(QuotePriority::High);
            }
            if n % 9 == 0 {
                quote = quote.with_expiry(Some(Utc::now() - Duration::days(1)));
            }
            quote
        })
        .collect()
}

pub fn seeded_repository() -> Arc<InMemoryQuoteRepository> {
    Arc::new(InMemoryQuoteRepository::with_quotes(sample_quotes()))
}

/// Quote store that fails every read.
pub struct FailingQuoteRepository;

#[async_trait]
impl FilteredQuoteRepository for FailingQuoteRepository {
    async fn find_with_filters(&self, _filters: &QuoteQueryFilters) -> Result<QuotePage, AppError> {
        Err(AppError::internal(
            "connection reset by peer",
            serde_json::json!({}),
        ))
    }
}

#[async_trait]
impl QuoteRepository for FailingQuoteRepository {
    async fn find_recent_quotes(&self, _limit: u32) -> Result<Vec<Quote>, AppError> {
        Err(AppError::internal(
            "connection reset by peer",
            serde_json::json!({}),
        ))
    }
}

pub fn create_test_state(source: QuoteSource) -> AppState {
    create_test_state_with_policy(source, ConfirmationPolicy::PerRead)
}

pub fn create_test_state_with_policy(source: QuoteSource, policy: ConfirmationPolicy) -> AppState {
    let auth_service = AuthService::new(SIGNING_SECRET, [hash_token(SIGNING_SECRET, TOKEN)]);

    AppState::new(source, QuoteProjector::new(policy), auth_service)
}

/// Health and authenticated API routes, without rate limiting.
pub fn create_test_router(state: AppState) -> Router {
    let api = protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api)
        .with_state(state)
}
