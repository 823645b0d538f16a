//! Domain layer containing quote entities and repository contracts.
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Query orchestration lives in [`crate::application`].
//!
//! # Architecture
//!
//! - [`entities`] - Quotes and their value objects
//! - [`repositories`] - Data access trait definitions

pub mod entities;
pub mod repositories;
