//! Handlers for quote list endpoints.

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::quote_list::QuoteListParams;
use crate::application::queries::{GetQuoteListQuery, GetQuoteListResult, QueryHandler, QueryResult};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::code_generator::generate_query_id;

type QuoteListResponse = (StatusCode, Json<QueryResult<GetQuoteListResult>>);

/// Lists quotes with pagination, sorting and filters from the query string.
///
/// # Endpoint
///
/// `GET /api/quotes`
///
/// # Query Parameters
///
/// - `page` (optional): Page number, from 1 (default: 1)
/// - `limit` (optional): Items per page, 1 to 1000 (default: 20)
/// - `offset` (optional): Row offset; overrides `page` when present
/// - `sort` (optional): `submittedAt`, `updatedAt` or `customerName`
/// - `direction` (optional): `asc` or `desc` (default: `desc`)
/// - `status`, `priority`, `serviceType`, `customerName`, `customerEmail`
/// - `submittedAfter`, `submittedBefore`: RFC 3339 or `YYYY-MM-DD`
/// - `isExpired`: `true` or `false`
///
/// Filter values that cannot be understood are ignored.
///
/// # Response
///
/// ```json
/// {
///   "queryId": "qry_Zk3vT0c9bXq1LmNa",
///   "success": true,
///   "data": {
///     "items": [],
///     "total": 0,
///     "page": 1,
///     "limit": 20,
///     "hasNext": false,
///     "hasPrevious": false,
///     "totalPages": 0
///   },
///   "executionTimeMs": 0
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if pagination parameters are invalid, and 500
/// with `success: false` if the quote store fails.
pub async fn quote_list_handler(
    State(state): State<AppState>,
    Query(params): Query<QuoteListParams>,
) -> Result<QuoteListResponse, AppError> {
    params.validate()?;

    let query = params.into_query(generate_query_id());

    Ok(respond(state.quote_queries.handle(query).await))
}

/// Lists quotes for a JSON query body.
///
/// # Endpoint
///
/// `POST /api/quotes/search`
///
/// # Request Body
///
/// ```json
/// {
///   "queryId": "dashboard-42",
///   "pagination": { "page": 2, "limit": 20 },
///   "sorting": { "field": "customerName", "direction": "asc" },
///   "filters": { "status": "approved", "isExpired": false }
/// }
/// ```
///
/// Every field is optional. A missing `queryId` is generated.
pub async fn quote_search_handler(
    State(state): State<AppState>,
    Json(mut query): Json<GetQuoteListQuery>,
) -> QuoteListResponse {
    if query.query_id.trim().is_empty() {
        query.query_id = generate_query_id();
    }

    respond(state.quote_queries.handle(query).await)
}

fn respond(result: QueryResult<GetQuoteListResult>) -> QuoteListResponse {
    let status = if result.success {
        StatusCode::OK
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };

    (status, Json(result))
}
