//! Repository traits for quote data access.
//!
//! Stores come in two capability levels. A [`FilteredQuoteRepository`] can
//! filter, sort, page and count on its own; a plain [`QuoteRepository`] can
//! only return the most recent quotes. [`QuoteSource`] fixes which one a
//! consumer talks to when it is constructed.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::fmt;
use std::sync::Arc;

use crate::domain::entities::{Quote, QuotePriority, QuoteStatus};
use crate::error::AppError;

/// Page size used when a request does not specify one.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Fields a quote list may be ordered by.
///
/// This is a closed set: nothing outside it ever reaches a repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum QuoteOrderField {
    #[default]
    SubmittedAt,
    UpdatedAt,
    CustomerName,
}

impl QuoteOrderField {
    /// Resolves a wire field name (`submittedAt`, `updatedAt`, `customerName`).
    pub fn from_field_name(name: &str) -> Option<Self> {
        match name {
            "submittedAt" => Some(Self::SubmittedAt),
            "updatedAt" => Some(Self::UpdatedAt),
            "customerName" => Some(Self::CustomerName),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::SubmittedAt => "submittedAt",
            Self::UpdatedAt => "updatedAt",
            Self::CustomerName => "customerName",
        }
    }
}

/// Sort direction for quote lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    /// Accepts `asc`/`ascending` and `desc`/`descending`, ignoring case.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Some(Self::Asc),
            "desc" | "descending" => Some(Self::Desc),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// Validated filter, sort and pagination criteria for quote queries.
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteQueryFilters {
    pub limit: u32,
    pub offset: u64,
    pub order_by: QuoteOrderField,
    pub order_direction: SortDirection,
    pub status: Option<QuoteStatus>,
    pub priority: Option<QuotePriority>,
    /// Service type key.
    pub service_type: Option<String>,
    pub customer_name: Option<String>,
    pub email: Option<String>,
    pub submitted_after: Option<DateTime<Utc>>,
    pub submitted_before: Option<DateTime<Utc>>,
    pub is_expired: Option<bool>,
}

impl QuoteQueryFilters {
    /// Creates unfiltered criteria for one page, newest submissions first.
    pub fn new(offset: u64, limit: u32) -> Self {
        Self {
            limit,
            offset,
            order_by: QuoteOrderField::default(),
            order_direction: SortDirection::default(),
            status: None,
            priority: None,
            service_type: None,
            customer_name: None,
            email: None,
            submitted_after: None,
            submitted_before: None,
            is_expired: None,
        }
    }

    pub fn with_order(mut self, order_by: QuoteOrderField, direction: SortDirection) -> Self {
        self.order_by = order_by;
        self.order_direction = direction;
        self
    }

    pub fn with_status(mut self, status: Option<QuoteStatus>) -> Self {
        self.status = status;
        self
    }

    pub fn with_submitted_range(
        mut self,
        after: Option<DateTime<Utc>>,
        before: Option<DateTime<Utc>>,
    ) -> Self {
        self.submitted_after = after;
        self.submitted_before = before;
        self
    }
}

impl Default for QuoteQueryFilters {
    fn default() -> Self {
        Self::new(0, DEFAULT_PAGE_SIZE)
    }
}

/// One page of quotes plus the number of quotes matching the filters overall.
#[derive(Debug, Clone, Default)]
pub struct QuotePage {
    pub quotes: Vec<Quote>,
    pub total: u64,
}

/// Basic quote store that can only list recent submissions.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryQuoteRepository`]
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuoteRepository: Send + Sync {
    /// Returns at most `limit` quotes, newest submission first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] when the store cannot be read.
    async fn find_recent_quotes(&self, limit: u32) -> Result<Vec<Quote>, AppError>;
}

/// Quote store that filters, orders, pages and counts on its own.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FilteredQuoteRepository: Send + Sync {
    /// Returns the page selected by `filters` and the total number of matches.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] when the store cannot be read.
    async fn find_with_filters(&self, filters: &QuoteQueryFilters) -> Result<QuotePage, AppError>;
}

/// The quote store a query service reads from, fixed at construction.
#[derive(Clone)]
pub enum QuoteSource {
    Filtered(Arc<dyn FilteredQuoteRepository>),
    /// Only recent quotes; totals are limited to what one call returns.
    Basic(Arc<dyn QuoteRepository>),
}

impl QuoteSource {
    pub fn filtered<R: FilteredQuoteRepository + 'static>(repository: Arc<R>) -> Self {
        Self::Filtered(repository)
    }

    pub fn basic<R: QuoteRepository + 'static>(repository: Arc<R>) -> Self {
        Self::Basic(repository)
    }

    /// Short name of the capability level, for logs and health output.
    pub fn capability(&self) -> &'static str {
        match self {
            Self::Filtered(_) => "filtered",
            Self::Basic(_) => "recent-only",
        }
    }

    /// Performs the cheapest possible read to check that the store answers.
    ///
    /// # Errors
    ///
    /// Propagates the repository error.
    pub async fn probe(&self) -> Result<(), AppError> {
        match self {
            Self::Filtered(repository) => repository
                .find_with_filters(&QuoteQueryFilters::new(0, 1))
                .await
                .map(|_| ()),
            Self::Basic(repository) => repository.find_recent_quotes(1).await.map(|_| ()),
        }
    }
}

impl fmt::Debug for QuoteSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("QuoteSource").field(&self.capability()).finish()
    }
}
