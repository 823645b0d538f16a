//! Query string parameters for the quote list endpoint.

use serde::Deserialize;
use serde_json::Value;
use serde_with::{DisplayFromStr, serde_as};
use validator::Validate;

use crate::application::queries::{
    GetQuoteListQuery, PaginationInput, QuoteListFilterInput, SortingInput,
};

/// Parameters of `GET /api/quotes`.
///
/// Numeric pagination values are parsed strictly, so `limit=ten` is rejected
/// before the handler runs. Filter values are kept as text and checked later
/// by the filter mapper.
#[serde_as]
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct QuoteListParams {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    #[validate(range(min = 1, message = "Page must be greater than 0"))]
    pub page: Option<u64>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    #[validate(range(min = 1, max = 1000, message = "Limit must be between 1 and 1000"))]
    pub limit: Option<u32>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub offset: Option<u64>,

    pub sort: Option<String>,
    pub direction: Option<String>,

    pub status: Option<String>,
    pub priority: Option<String>,
    pub service_type: Option<String>,
    pub customer_name: Option<String>,
    pub customer_email: Option<String>,
    pub submitted_after: Option<String>,
    pub submitted_before: Option<String>,
    pub is_expired: Option<String>,
}

impl QuoteListParams {
    /// Converts the parameters into a quote list query.
    pub fn into_query(self, query_id: impl Into<String>) -> GetQuoteListQuery {
        let pagination = PaginationInput {
            limit: self.limit,
            offset: self.offset,
            page: self.page,
        };

        let sorting = SortingInput {
            field: self.sort,
            direction: self.direction,
        };

        let filters = QuoteListFilterInput {
            status: self.status.map(Value::String),
            priority: self.priority.map(Value::String),
            service_type: self.service_type.map(Value::String),
            customer_name: self.customer_name.map(Value::String),
            customer_email: self.customer_email.map(Value::String),
            submitted_after: self.submitted_after.map(Value::String),
            submitted_before: self.submitted_before.map(Value::String),
            is_expired: self.is_expired.map(|raw| match raw.as_str() {
                "true" => Value::Bool(true),
                "false" => Value::Bool(false),
                _ => Value::String(raw),
            }),
        };

        GetQuoteListQuery::new(query_id)
            .with_pagination(pagination)
            .with_sorting(sorting)
            .with_filters(filters)
    }
}
