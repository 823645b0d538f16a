//! # Quote Service
//!
//! Read side of a quote management system for a construction and
//! snow-removal business: paginated, filtered and sorted quote lists for an
//! admin dashboard, served over an authenticated JSON API.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Quote entities, value objects and repository traits
//! - **Application Layer** ([`application`]) - Filter mapping, pagination, projection and the query handler
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory quote store and seed loading
//! - **API Layer** ([`api`]) - REST API handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Untrusted list input softened into validated repository filters
//! - Whitelisted sort fields and consistent page metadata
//! - Uniform success/failure envelope with timing
//! - Bearer token authentication, rate limiting and observability
//!
//! ## Quick Start
//!
//! ```bash
//! export TOKEN_SIGNING_SECRET="change-me"
//! export QUOTES_SEED_FILE="data/quotes.seed.json"
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::projection::{ConfirmationPolicy, QuoteProjector};
    pub use crate::application::queries::{
        GetQuoteListQuery, GetQuoteListResult, QueryHandler, QueryResult,
    };
    pub use crate::application::services::{AuthService, QuoteQueryService};
    pub use crate::domain::entities::{Quote, QuotePriority, QuoteStatus, ServiceType};
    pub use crate::domain::repositories::QuoteSource;
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
