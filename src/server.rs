//! HTTP server initialization and runtime setup.
//!
//! Handles quote store seeding, service wiring, and Axum server lifecycle.

use crate::application::projection::QuoteProjector;
use crate::application::services::AuthService;
use crate::config::Config;
use crate::domain::repositories::QuoteSource;
use crate::infrastructure::persistence::{InMemoryQuoteRepository, load_seed_file};
use crate::routes::{RateLimit, app_router};
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - In-memory quote store (seeded from `QUOTES_SEED_FILE` when set)
/// - Quote query and authentication services
/// - Axum HTTP server with graceful shutdown on Ctrl+C
///
/// # Errors
///
/// Returns an error if:
/// - The seed file cannot be read or parsed
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let quotes = match &config.seed_file {
        Some(path) => load_seed_file(path)?,
        None => Vec::new(),
    };
    tracing::info!("Quote store ready with {} quotes", quotes.len());

    let repository = Arc::new(InMemoryQuoteRepository::with_quotes(quotes));
    let source = QuoteSource::filtered(repository);

    let auth_service = AuthService::new(
        config.token_signing_secret.clone(),
        config.token_hashes.clone(),
    );
    if !auth_service.has_tokens() {
        tracing::warn!("ADMIN_TOKEN_HASHES is empty; every /api request will be rejected");
    }

    let state = AppState::new(
        source,
        QuoteProjector::new(config.confirmation_policy),
        auth_service,
    );

    let app = app_router(
        state,
        Some(RateLimit {
            period_secs: config.rate_period_secs,
            burst: config.rate_burst,
        }),
    );

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid LISTEN address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
