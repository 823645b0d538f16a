//! Query-side primitives shared by all read models.
//!
//! A query handler takes a query object and always answers with a
//! [`QueryResult`] envelope; failures are reported inside the envelope and
//! never propagate to the caller.

pub mod get_quote_list;

use async_trait::async_trait;
use serde::Serialize;

pub use get_quote_list::{
    GetQuoteListQuery, GetQuoteListResult, PaginationInput, QuoteListFilterInput, QuoteListItem,
    SortingInput,
};

/// Handles one kind of query.
#[async_trait]
pub trait QueryHandler<Q: Send + 'static>: Send + Sync {
    type Output: Send;

    /// Executes the query. Never fails: errors become a failure envelope.
    async fn handle(&self, query: Q) -> QueryResult<Self::Output>;
}

/// Uniform success/failure envelope with timing metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResult<T> {
    pub query_id: String,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    pub execution_time_ms: u64,
}

impl<T> QueryResult<T> {
    pub fn success(query_id: impl Into<String>, data: T, execution_time_ms: u64) -> Self {
        Self {
            query_id: query_id.into(),
            success: true,
            data: Some(data),
            error_message: None,
            execution_time_ms,
        }
    }

    pub fn failure(
        query_id: impl Into<String>,
        error_message: impl Into<String>,
        execution_time_ms: u64,
    ) -> Self {
        Self {
            query_id: query_id.into(),
            success: false,
            data: None,
            error_message: Some(error_message.into()),
            execution_time_ms,
        }
    }
}
