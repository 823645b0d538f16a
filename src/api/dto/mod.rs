//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization and validator
//! for input validation. The quote list response body is the
//! [`crate::application::queries::QueryResult`] envelope itself.

pub mod health;
pub mod quote_list;
