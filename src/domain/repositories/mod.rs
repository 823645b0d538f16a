//! Repository trait definitions for the domain layer.
//!
//! These traits abstract quote persistence following the Repository pattern.
//! Concrete stores live in `crate::infrastructure::persistence`; mock
//! implementations are generated via `mockall` for unit tests.
//!
//! # Available Repositories
//!
//! - [`QuoteRepository`] - Recent quotes only
//! - [`FilteredQuoteRepository`] - Filtered, ordered and counted pages
//!
//! [`QuoteSource`] wraps exactly one of the two.

pub mod quote_repository;

pub use quote_repository::{
    DEFAULT_PAGE_SIZE, FilteredQuoteRepository, QuoteOrderField, QuotePage, QuoteQueryFilters,
    QuoteRepository, QuoteSource, SortDirection,
};

#[cfg(test)]
pub use quote_repository::{MockFilteredQuoteRepository, MockQuoteRepository};
