//! Quote list query: input shape and read model.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::entities::{QuotePriority, QuoteStatus, ServiceType};

/// Request for one page of quote summaries.
///
/// Pagination and sorting are plain optional scalars. Filter values arrive
/// loosely typed and are only trusted after
/// [`crate::application::filters::build_filters`] has checked their shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetQuoteListQuery {
    #[serde(default)]
    pub query_id: String,
    #[serde(default)]
    pub pagination: Option<PaginationInput>,
    #[serde(default)]
    pub sorting: Option<SortingInput>,
    #[serde(default)]
    pub filters: Option<QuoteListFilterInput>,
}

impl GetQuoteListQuery {
    pub fn new(query_id: impl Into<String>) -> Self {
        Self {
            query_id: query_id.into(),
            ..Self::default()
        }
    }

    pub fn with_pagination(mut self, pagination: PaginationInput) -> Self {
        self.pagination = Some(pagination);
        self
    }

    pub fn with_sorting(mut self, sorting: SortingInput) -> Self {
        self.sorting = Some(sorting);
        self
    }

    pub fn with_filters(mut self, filters: QuoteListFilterInput) -> Self {
        self.filters = Some(filters);
        self
    }
}

/// Page- or offset-based pagination. An explicit `offset` wins over `page`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationInput {
    pub limit: Option<u32>,
    pub offset: Option<u64>,
    pub page: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortingInput {
    pub field: Option<String>,
    pub direction: Option<String>,
}

/// Untrusted filter values as received from a caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteListFilterInput {
    pub status: Option<Value>,
    pub priority: Option<Value>,
    pub service_type: Option<Value>,
    pub customer_name: Option<Value>,
    pub customer_email: Option<Value>,
    pub submitted_after: Option<Value>,
    pub submitted_before: Option<Value>,
    pub is_expired: Option<Value>,
}

/// Display-ready summary of one quote.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteListItem {
    pub id: String,
    pub customer_name: String,
    pub email: String,
    pub phone: String,
    pub service_type: ServiceType,
    pub description: String,
    pub status: QuoteStatus,
    pub priority: QuotePriority,
    pub estimated_value: Decimal,
    pub submitted_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
    pub is_expired: bool,
    pub photo_count: usize,
    pub confirmation_number: String,
}

/// One page of quote summaries with pagination metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetQuoteListResult {
    pub items: Vec<QuoteListItem>,
    pub total: u64,
    pub page: u64,
    pub limit: u32,
    pub has_next: bool,
    pub has_previous: bool,
    pub total_pages: u64,
}
