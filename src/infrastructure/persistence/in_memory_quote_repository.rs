//! In-memory implementation of the quote repositories.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::cmp::Ordering;
use tokio::sync::RwLock;

use crate::domain::entities::Quote;
use crate::domain::repositories::{
    FilteredQuoteRepository, QuoteOrderField, QuotePage, QuoteQueryFilters, QuoteRepository,
    SortDirection,
};
use crate::error::AppError;

/// Quote store held in process memory.
///
/// Implements both [`FilteredQuoteRepository`] and [`QuoteRepository`], so it
/// can back either kind of [`crate::domain::repositories::QuoteSource`].
#[derive(Default)]
pub struct InMemoryQuoteRepository {
    quotes: RwLock<Vec<Quote>>,
}

impl InMemoryQuoteRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-filled with `quotes`.
    pub fn with_quotes(quotes: Vec<Quote>) -> Self {
        Self {
            quotes: RwLock::new(quotes),
        }
    }

    pub async fn insert(&self, quote: Quote) {
        self.quotes.write().await.push(quote);
    }

    pub async fn len(&self) -> usize {
        self.quotes.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.quotes.read().await.is_empty()
    }
}

fn matches(quote: &Quote, filters: &QuoteQueryFilters, now: DateTime<Utc>) -> bool {
    if filters.status.is_some_and(|status| quote.status != status) {
        return false;
    }
    if filters.priority.is_some_and(|priority| quote.priority != priority) {
        return false;
    }
    if let Some(key) = &filters.service_type
        && quote.service_type.key != *key
    {
        return false;
    }
    if let Some(name) = &filters.customer_name
        && !quote
            .customer_name
            .to_lowercase()
            .contains(&name.to_lowercase())
    {
        return false;
    }
    if let Some(email) = &filters.email
        && !quote.email.as_str().eq_ignore_ascii_case(email)
    {
        return false;
    }
    if filters
        .submitted_after
        .is_some_and(|after| quote.submitted_at < after)
    {
        return false;
    }
    if filters
        .submitted_before
        .is_some_and(|before| quote.submitted_at > before)
    {
        return false;
    }
    if filters
        .is_expired
        .is_some_and(|expired| quote.is_expired_at(now) != expired)
    {
        return false;
    }
    true
}

fn compare(a: &Quote, b: &Quote, order_by: QuoteOrderField) -> Ordering {
    let primary = match order_by {
        QuoteOrderField::SubmittedAt => a.submitted_at.cmp(&b.submitted_at),
        QuoteOrderField::UpdatedAt => a.updated_at.cmp(&b.updated_at),
        QuoteOrderField::CustomerName => a
            .customer_name
            .to_lowercase()
            .cmp(&b.customer_name.to_lowercase()),
    };
    primary.then_with(|| a.id.as_str().cmp(b.id.as_str()))
}

#[async_trait]
impl FilteredQuoteRepository for InMemoryQuoteRepository {
    async fn find_with_filters(&self, filters: &QuoteQueryFilters) -> Result<QuotePage, AppError> {
        let now = Utc::now();
        let quotes = self.quotes.read().await;

        let mut matched: Vec<&Quote> = quotes
            .iter()
            .filter(|quote| matches(quote, filters, now))
            .collect();

        matched.sort_by(|a, b| {
            let ordering = compare(a, b, filters.order_by);
            match filters.order_direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });

        let total = matched.len() as u64;
        let offset = usize::try_from(filters.offset).unwrap_or(usize::MAX);

        let page = matched
            .into_iter()
            .skip(offset)
            .take(filters.limit as usize)
            .cloned()
            .collect();

        Ok(QuotePage {
            quotes: page,
            total,
        })
    }
}

#[async_trait]
impl QuoteRepository for InMemoryQuoteRepository {
    async fn find_recent_quotes(&self, limit: u32) -> Result<Vec<Quote>, AppError> {
        let quotes = self.quotes.read().await;

        let mut recent: Vec<&Quote> = quotes.iter().collect();
        recent.sort_by(|a, b| compare(b, a, QuoteOrderField::SubmittedAt));

        Ok(recent.into_iter().take(limit as usize).cloned().collect())
    }
}
