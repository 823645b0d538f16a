//! Mapping of untrusted quote list input onto validated repository filters.
//!
//! Malformed values never raise errors; a filter whose value has the wrong
//! shape is simply left out, so the caller gets a wider result instead of a
//! failure.

use chrono::{DateTime, NaiveDate, Utc};
use serde_json::Value;
use std::str::FromStr;

use crate::application::queries::GetQuoteListQuery;
use crate::domain::repositories::{
    DEFAULT_PAGE_SIZE, QuoteOrderField, QuoteQueryFilters, SortDirection,
};

/// Builds repository filters from a quote list query.
///
/// # Defaults
///
/// - `limit`: 20 (a limit of 0 counts as absent)
/// - `offset`: explicit non-zero value, else `(page - 1) * limit` with page 1
/// - `order_by`: `submittedAt` unless the field is in the whitelist
/// - `order_direction`: descending
pub fn build_filters(query: &GetQuoteListQuery) -> QuoteQueryFilters {
    let pagination = query.pagination.as_ref();

    let limit = pagination
        .and_then(|p| p.limit)
        .filter(|limit| *limit > 0)
        .unwrap_or(DEFAULT_PAGE_SIZE);

    let offset = match pagination.and_then(|p| p.offset).filter(|offset| *offset > 0) {
        Some(offset) => offset,
        None => {
            let page = pagination.and_then(|p| p.page).unwrap_or(1).max(1);
            (page - 1).saturating_mul(u64::from(limit))
        }
    };

    let sorting = query.sorting.as_ref();
    let order_by = resolve_order_field(sorting.and_then(|s| s.field.as_deref()));
    let order_direction = sorting
        .and_then(|s| s.direction.as_deref())
        .and_then(SortDirection::parse)
        .unwrap_or_default();

    let mut filters =
        QuoteQueryFilters::new(offset, limit).with_order(order_by, order_direction);

    if let Some(input) = &query.filters {
        filters.status = input.status.as_ref().and_then(enum_member);
        filters.priority = input.priority.as_ref().and_then(enum_member);
        filters.service_type = input.service_type.as_ref().and_then(non_empty_text);
        filters.customer_name = input.customer_name.as_ref().and_then(non_empty_text);
        filters.email = input.customer_email.as_ref().and_then(non_empty_text);
        filters.submitted_after = input.submitted_after.as_ref().and_then(date_like);
        filters.submitted_before = input.submitted_before.as_ref().and_then(date_like);
        filters.is_expired = input.is_expired.as_ref().and_then(Value::as_bool);
    }

    filters
}

/// Resolves a requested sort field against the whitelist.
pub fn resolve_order_field(field: Option<&str>) -> QuoteOrderField {
    field
        .and_then(QuoteOrderField::from_field_name)
        .unwrap_or_default()
}

fn enum_member<T: FromStr>(value: &Value) -> Option<T> {
    value.as_str().and_then(|raw| raw.parse().ok())
}

fn non_empty_text(value: &Value) -> Option<String> {
    value
        .as_str()
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_owned)
}

/// Accepts an RFC 3339 timestamp or a `YYYY-MM-DD` date (midnight UTC).
fn date_like(value: &Value) -> Option<DateTime<Utc>> {
    let raw = value.as_str()?.trim();

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(timestamp.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|midnight| midnight.and_utc())
}
