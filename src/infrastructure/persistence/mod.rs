//! Quote repository implementations.
//!
//! # Repositories
//!
//! - [`InMemoryQuoteRepository`] - Process-local store, optionally seeded from JSON

pub mod in_memory_quote_repository;
pub mod seed;

pub use in_memory_quote_repository::InMemoryQuoteRepository;
pub use seed::{load_seed_file, parse_seed};
