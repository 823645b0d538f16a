//! Core domain entities representing the quote data model.
//!
//! # Entity Types
//!
//! - [`Quote`] - A customer's service request with status and priority
//! - [`ServiceType`] - The requested service (key, display name, category)
//! - [`Email`], [`Phone`] - Validated customer contact value objects
//!
//! Value objects validate on construction and on deserialization, so a
//! [`Quote`] read from any source always carries well-formed contact data.

pub mod contact;
pub mod quote;
pub mod service_type;

pub use contact::{Email, EmailError, Phone, PhoneError};
pub use quote::{
    ParseEnumError, PhotoAttachment, Quote, QuoteId, QuoteIdError, QuotePriority, QuoteStatus,
};
pub use service_type::ServiceType;
