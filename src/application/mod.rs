//! Application layer: quote list queries and the services answering them.
//!
//! Input mapping ([`filters`]), page metadata ([`pagination`]) and read model
//! projection ([`projection`]) are pure functions. [`services`] wires them to
//! the repositories.
//!
//! # Available Services
//!
//! - [`services::quote_query_service::QuoteQueryService`] - Quote list queries
//! - [`services::auth_service::AuthService`] - API token authentication

pub mod filters;
pub mod pagination;
pub mod projection;
pub mod queries;
pub mod services;
