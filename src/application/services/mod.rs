//! Services for the application layer.

pub mod auth_service;
pub mod quote_query_service;

pub use auth_service::AuthService;
pub use quote_query_service::{QUOTE_LIST_FAILURE_MESSAGE, QuoteQueryService};
