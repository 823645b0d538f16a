//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: Quote store answered
/// - **503 Service Unavailable**: Quote store probe failed
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "quote_store": {
///       "status": "ok",
///       "message": "Reachable (filtered)"
///     }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let store_check = check_quote_store(&state).await;

    let healthy = store_check.status == "ok";

    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            quote_store: store_check,
        },
    };

    if healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Probes the quote store with a one-row read.
async fn check_quote_store(state: &AppState) -> CheckStatus {
    let source = &state.quote_source;

    match source.probe().await {
        Ok(()) => CheckStatus {
            status: "ok".to_string(),
            message: Some(format!("Reachable ({})", source.capability())),
        },
        Err(e) => {
            tracing::warn!(error = %e, "Quote store probe failed");
            CheckStatus {
                status: "error".to_string(),
                message: Some(format!("Quote store error: {}", e)),
            }
        }
    }
}
