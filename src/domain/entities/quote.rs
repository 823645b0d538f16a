//! Quote entity representing a customer's service request.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::contact::{Email, Phone};
use super::service_type::ServiceType;

/// Error returned when a string does not name a member of a quote enum.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} '{value}'")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
}

/// Errors raised when constructing a [`QuoteId`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuoteIdError {
    #[error("quote id cannot be empty")]
    Empty,
}

/// Opaque quote identifier assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct QuoteId(String);

impl QuoteId {
    /// # Errors
    ///
    /// Returns [`QuoteIdError::Empty`] for blank ids.
    pub fn new(id: impl Into<String>) -> Result<Self, QuoteIdError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(QuoteIdError::Empty);
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for QuoteId {
    type Error = QuoteIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<QuoteId> for String {
    fn from(id: QuoteId) -> Self {
        id.0
    }
}

impl fmt::Display for QuoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lifecycle status of a quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum QuoteStatus {
    #[default]
    Submitted,
    Reviewed,
    Approved,
    Rejected,
    Expired,
}

impl QuoteStatus {
    pub const ALL: [Self; 5] = [
        Self::Submitted,
        Self::Reviewed,
        Self::Approved,
        Self::Rejected,
        Self::Expired,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Submitted => "submitted",
            Self::Reviewed => "reviewed",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::Expired => "expired",
        }
    }
}

impl fmt::Display for QuoteStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuoteStatus {
    type Err = ParseEnumError;

    /// Case-insensitive match on the wire name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseEnumError {
                kind: "quote status",
                value: s.to_string(),
            })
    }
}

/// Handling priority of a quote.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum QuotePriority {
    Low,
    #[default]
    Normal,
    High,
    Urgent,
}

impl QuotePriority {
    pub const ALL: [Self; 4] = [Self::Low, Self::Normal, Self::High, Self::Urgent];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Normal => "normal",
            Self::High => "high",
            Self::Urgent => "urgent",
        }
    }
}

impl fmt::Display for QuotePriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuotePriority {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|priority| priority.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseEnumError {
                kind: "quote priority",
                value: s.to_string(),
            })
    }
}

/// A photo uploaded with a quote request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoAttachment {
    pub file_name: String,
    #[serde(default)]
    pub content_type: Option<String>,
}

/// A customer's request for a priced service.
///
/// Read-only to the query side: quotes are loaded from a repository, projected,
/// and discarded. The serde shape matches the seed files consumed by the
/// in-memory repository.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub id: QuoteId,
    pub customer_name: String,
    pub email: Email,
    pub phone: Phone,
    pub service_type: ServiceType,
    pub description: String,
    #[serde(default)]
    pub status: QuoteStatus,
    #[serde(default)]
    pub priority: QuotePriority,
    pub estimated_value: Decimal,
    pub submitted_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub photo_attachments: Vec<PhotoAttachment>,
    /// Confirmation number assigned by the store at submission, if any.
    #[serde(default)]
    pub confirmation_number: Option<String>,
}

impl Quote {
    /// Creates a freshly submitted quote with normal priority and no expiry.
    #[allow(clippy::too_many_arguments)]
    pub fn submitted(
        id: QuoteId,
        customer_name: impl Into<String>,
        email: Email,
        phone: Phone,
        service_type: ServiceType,
        description: impl Into<String>,
        estimated_value: Decimal,
        submitted_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            customer_name: customer_name.into(),
            email,
            phone,
            service_type,
            description: description.into(),
            status: QuoteStatus::Submitted,
            priority: QuotePriority::Normal,
            estimated_value,
            submitted_at,
            updated_at: submitted_at,
            expires_at: None,
            photo_attachments: Vec::new(),
            confirmation_number: None,
        }
    }

    pub fn with_status(mut self, status: QuoteStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_priority(mut self, priority: QuotePriority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_updated_at(mut self, updated_at: DateTime<Utc>) -> Self {
        self.updated_at = updated_at;
        self
    }

    pub fn with_expiry(mut self, expires_at: Option<DateTime<Utc>>) -> Self {
        self.expires_at = expires_at;
        self
    }

    pub fn with_photos(mut self, photos: Vec<PhotoAttachment>) -> Self {
        self.photo_attachments = photos;
        self
    }

    pub fn with_confirmation_number(mut self, number: impl Into<String>) -> Self {
        self.confirmation_number = Some(number.into());
        self
    }

    /// Returns true if the quote is expired as of `now`.
    ///
    /// A quote is expired once its status says so or once `now` is past `expires_at`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.status == QuoteStatus::Expired || self.expires_at.is_some_and(|e| now > e)
    }

    /// Returns true if the quote is expired right now.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }
}
