//! Quote list query handling.

use async_trait::async_trait;
use chrono::Utc;
use std::time::Instant;

use crate::application::filters::build_filters;
use crate::application::pagination::PageInfo;
use crate::application::projection::QuoteProjector;
use crate::application::queries::{
    GetQuoteListQuery, GetQuoteListResult, QueryHandler, QueryResult,
};
use crate::domain::repositories::{QuotePage, QuoteQueryFilters, QuoteSource};
use crate::error::AppError;

/// Message returned to callers whenever a quote list query fails.
pub const QUOTE_LIST_FAILURE_MESSAGE: &str = "Failed to retrieve quote list";

/// Answers [`GetQuoteListQuery`] with a page of quote summaries.
///
/// The flow is filters, repository read, projection, page metadata. Any
/// error along the way is logged with full detail and reported to the caller
/// only as [`QUOTE_LIST_FAILURE_MESSAGE`].
///
/// With a [`QuoteSource::Basic`] store the service can only ask for the
/// `limit` most recent quotes, so `total` is the number of quotes returned
/// rather than the true match count.
pub struct QuoteQueryService {
    source: QuoteSource,
    projector: QuoteProjector,
}

impl QuoteQueryService {
    /// Creates a new quote query service.
    pub fn new(source: QuoteSource, projector: QuoteProjector) -> Self {
        Self { source, projector }
    }

    pub fn source(&self) -> &QuoteSource {
        &self.source
    }

    async fn fetch(&self, filters: &QuoteQueryFilters) -> Result<QuotePage, AppError> {
        match &self.source {
            QuoteSource::Filtered(repository) => repository.find_with_filters(filters).await,
            QuoteSource::Basic(repository) => {
                let quotes = repository.find_recent_quotes(filters.limit).await?;
                let total = quotes.len() as u64;
                Ok(QuotePage { quotes, total })
            }
        }
    }

    async fn execute(&self, query: &GetQuoteListQuery) -> Result<GetQuoteListResult, AppError> {
        let filters = build_filters(query);

        tracing::debug!(
            capability = self.source.capability(),
            limit = filters.limit,
            offset = filters.offset,
            order_by = filters.order_by.as_str(),
            direction = filters.order_direction.as_str(),
            "Querying quote repository"
        );

        let QuotePage { quotes, total } = self.fetch(&filters).await?;

        let now = Utc::now();
        let items = quotes
            .iter()
            .map(|quote| self.projector.project(quote, now))
            .collect();

        let page = PageInfo::compute(filters.offset, filters.limit, total);

        Ok(GetQuoteListResult {
            items,
            total,
            page: page.page,
            limit: page.limit,
            has_next: page.has_next,
            has_previous: page.has_previous,
            total_pages: page.total_pages,
        })
    }
}

#[async_trait]
impl QueryHandler<GetQuoteListQuery> for QuoteQueryService {
    type Output = GetQuoteListResult;

    #[tracing::instrument(name = "get_quote_list", skip_all, fields(query_id = %query.query_id))]
    async fn handle(&self, query: GetQuoteListQuery) -> QueryResult<GetQuoteListResult> {
        let started = Instant::now();
        let outcome = self.execute(&query).await;
        let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

        metrics::histogram!("quote_list_query_duration_ms").record(elapsed_ms as f64);

        match outcome {
            Ok(result) => {
                metrics::counter!("quote_list_queries_total", "outcome" => "success").increment(1);
                tracing::debug!(
                    total = result.total,
                    returned = result.items.len(),
                    elapsed_ms,
                    "Quote list query succeeded"
                );
                QueryResult::success(query.query_id, result, elapsed_ms)
            }
            Err(e) => {
                metrics::counter!("quote_list_queries_total", "outcome" => "failure").increment(1);
                tracing::error!(error = ?e, elapsed_ms, "Quote list query failed");
                QueryResult::failure(query.query_id, QUOTE_LIST_FAILURE_MESSAGE, elapsed_ms)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::projection::ConfirmationPolicy;
    use crate::application::queries::{PaginationInput, QuoteListFilterInput, SortingInput};
    use crate::domain::entities::{Email, Phone, Quote, QuoteId, QuoteStatus, ServiceType};
    use crate::domain::repositories::{
        MockFilteredQuoteRepository, MockQuoteRepository, QuoteOrderField, SortDirection,
    };
    use chrono::{Duration, TimeZone};
    use rust_decimal::Decimal;
    use serde_json::json;
    use std::sync::Arc;

    fn quote(n: u32) -> Quote {
        Quote::submitted(
            QuoteId::new(format!("{n:08x}-quote")).unwrap(),
            format!("Customer {n}"),
            Email::parse(&format!("customer{n}@example.com")).unwrap(),
            Phone::parse("616-555-0100").unwrap(),
            ServiceType::from_catalog("snow-ice-removal").unwrap(),
            "Driveway and walkway clearing",
            Decimal::new(45_000, 2),
            Utc.with_ymd_and_hms(2024, 12, 1, 8, 0, 0).unwrap() + Duration::hours(i64::from(n)),
        )
    }

    fn filtered_service(mock_repo: MockFilteredQuoteRepository) -> QuoteQueryService {
        QuoteQueryService::new(
            QuoteSource::filtered(Arc::new(mock_repo)),
            QuoteProjector::default(),
        )
    }

    #[tokio::test]
    async fn test_max_offset_returns_envelope() {
        let mut mock_repo = MockFilteredQuoteRepository::new();
        mock_repo
            .expect_find_with_filters()
            .withf(|filters| filters.offset == u64::MAX && filters.limit == 1)
            .times(1)
            .returning(|_| {
                Ok(QuotePage {
                    quotes: vec![],
                    total: 0,
                })
            });

        let service = filtered_service(mock_repo);
        let query = GetQuoteListQuery::new("q-far").with_pagination(PaginationInput {
            limit: Some(1),
            offset: Some(u64::MAX),
            page: None,
        });

        let result = service.handle(query).await;

        assert!(result.success);
        let data = result.data.unwrap();
        assert!(data.items.is_empty());
        assert_eq!(data.page, u64::MAX);
        assert!(!data.has_next);
    }

    #[tokio::test]
    async fn test_filtered_source_pagination() {
        let mut mock_repo = MockFilteredQuoteRepository::new();
        mock_repo
            .expect_find_with_filters()
            .withf(|filters| filters.offset == 20 && filters.limit == 20)
            .times(1)
            .returning(|_| {
                Ok(QuotePage {
                    quotes: (20..40).map(quote).collect(),
                    total: 45,
                })
            });

        let service = filtered_service(mock_repo);
        let query = GetQuoteListQuery::new("q-page-2").with_pagination(PaginationInput {
            limit: Some(20),
            offset: None,
            page: Some(2),
        });

        let result = service.handle(query).await;

        assert!(result.success);
        assert_eq!(result.query_id, "q-page-2");
        assert!(result.error_message.is_none());
        let data = result.data.unwrap();
        assert_eq!(data.items.len(), 20);
        assert_eq!(data.total, 45);
        assert_eq!(data.page, 2);
        assert_eq!(data.limit, 20);
        assert_eq!(data.total_pages, 3);
        assert!(data.has_next);
        assert!(data.has_previous);
    }

    #[tokio::test]
    async fn test_filters_reach_repository_validated() {
        let mut mock_repo = MockFilteredQuoteRepository::new();
        mock_repo
            .expect_find_with_filters()
            .withf(|filters| {
                filters.order_by == QuoteOrderField::SubmittedAt
                    && filters.order_direction == SortDirection::Asc
                    && filters.status == Some(QuoteStatus::Approved)
                    && filters.is_expired.is_none()
                    && filters.customer_name.as_deref() == Some("Maple")
            })
            .times(1)
            .returning(|_| Ok(QuotePage::default()));

        let service = filtered_service(mock_repo);
        let query = GetQuoteListQuery::new("q-filters")
            .with_sorting(SortingInput {
                field: Some("estimatedValue".to_string()),
                direction: Some("asc".to_string()),
            })
            .with_filters(QuoteListFilterInput {
                status: Some(json!("approved")),
                customer_name: Some(json!("Maple")),
                is_expired: Some(json!("yes")),
                ..Default::default()
            });

        let result = service.handle(query).await;
        assert!(result.success);
    }

    #[tokio::test]
    async fn test_empty_result() {
        let mut mock_repo = MockFilteredQuoteRepository::new();
        mock_repo
            .expect_find_with_filters()
            .times(1)
            .returning(|_| Ok(QuotePage::default()));

        let result = filtered_service(mock_repo)
            .handle(GetQuoteListQuery::new("q-empty"))
            .await;

        let data = result.data.unwrap();
        assert!(data.items.is_empty());
        assert_eq!(data.total, 0);
        assert_eq!(data.page, 1);
        assert_eq!(data.total_pages, 0);
        assert!(!data.has_next);
        assert!(!data.has_previous);
    }

    #[tokio::test]
    async fn test_basic_source_falls_back_to_recent_quotes() {
        let mut mock_repo = MockQuoteRepository::new();
        mock_repo
            .expect_find_recent_quotes()
            .withf(|limit| *limit == 5)
            .times(1)
            .returning(|_| Ok((0..3).map(quote).collect()));

        let service = QuoteQueryService::new(
            QuoteSource::basic(Arc::new(mock_repo)),
            QuoteProjector::default(),
        );
        let query = GetQuoteListQuery::new("q-basic").with_pagination(PaginationInput {
            limit: Some(5),
            ..Default::default()
        });

        let result = service.handle(query).await;

        let data = result.data.unwrap();
        assert_eq!(data.total, 3);
        assert_eq!(data.items.len(), 3);
        assert_eq!(data.total_pages, 1);
        assert!(!data.has_next);
    }

    #[tokio::test]
    async fn test_repository_error_becomes_failure_envelope() {
        let mut mock_repo = MockFilteredQuoteRepository::new();
        mock_repo.expect_find_with_filters().times(1).returning(|_| {
            Err(AppError::internal(
                "connection refused: 10.0.0.5:5432",
                json!({}),
            ))
        });

        let result = filtered_service(mock_repo)
            .handle(GetQuoteListQuery::new("q-fail"))
            .await;

        assert!(!result.success);
        assert_eq!(result.query_id, "q-fail");
        assert!(result.data.is_none());
        assert_eq!(
            result.error_message.as_deref(),
            Some(QUOTE_LIST_FAILURE_MESSAGE)
        );
    }

    #[tokio::test]
    async fn test_basic_source_error_becomes_failure_envelope() {
        let mut mock_repo = MockQuoteRepository::new();
        mock_repo
            .expect_find_recent_quotes()
            .times(1)
            .returning(|_| Err(AppError::internal("timeout", json!({}))));

        let service = QuoteQueryService::new(
            QuoteSource::basic(Arc::new(mock_repo)),
            QuoteProjector::default(),
        );

        let result = service.handle(GetQuoteListQuery::new("q-basic-fail")).await;
        assert!(!result.success);
        assert_eq!(
            result.error_message.as_deref(),
            Some("Failed to retrieve quote list")
        );
    }

    #[tokio::test]
    async fn test_projection_uses_configured_policy() {
        let mut mock_repo = MockFilteredQuoteRepository::new();
        mock_repo.expect_find_with_filters().times(2).returning(|_| {
            Ok(QuotePage {
                quotes: vec![quote(1).with_confirmation_number("QTE-FIXED-00000001")],
                total: 1,
            })
        });

        let service = QuoteQueryService::new(
            QuoteSource::filtered(Arc::new(mock_repo)),
            QuoteProjector::new(ConfirmationPolicy::Stored),
        );

        for _ in 0..2 {
            let data = service
                .handle(GetQuoteListQuery::new("q-stored"))
                .await
                .data
                .unwrap();
            assert_eq!(data.items[0].confirmation_number, "QTE-FIXED-00000001");
        }
    }
}
