//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod quotes;

pub use health::health_handler;
pub use quotes::{quote_list_handler, quote_search_handler};
