//! Projection of quote entities onto list items.

use chrono::{DateTime, Utc};
use std::fmt;
use std::str::FromStr;

use crate::application::queries::QuoteListItem;
use crate::domain::entities::Quote;
use crate::utils::base36;

/// Prefix of every confirmation number.
pub const CONFIRMATION_PREFIX: &str = "QTE";

/// How confirmation numbers are produced when quotes are listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfirmationPolicy {
    /// Stamp with the time of each read. The same quote shows a different
    /// number on every listing.
    #[default]
    PerRead,
    /// Use the number stored with the quote, or derive one from its
    /// submission time, so every read shows the same value.
    Stored,
}

impl ConfirmationPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PerRead => "per-read",
            Self::Stored => "stored",
        }
    }
}

impl fmt::Display for ConfirmationPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned for an unrecognised confirmation number mode.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown confirmation number mode '{0}', expected 'per-read' or 'stored'")]
pub struct UnknownPolicyError(pub String);

impl FromStr for ConfirmationPolicy {
    type Err = UnknownPolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "per-read" => Ok(Self::PerRead),
            "stored" => Ok(Self::Stored),
            other => Err(UnknownPolicyError(other.to_string())),
        }
    }
}

/// Formats `QTE-<base36 millis>-<first 8 id chars>`, uppercased.
///
/// Only ASCII letters and digits of the id are used, so separators and
/// non-ASCII characters never leak into the number. An id with none of
/// them falls back to `0`.
pub fn confirmation_number(quote_id: &str, at: DateTime<Utc>) -> String {
    let millis = u64::try_from(at.timestamp_millis()).unwrap_or(0);
    let mut short_id: String = quote_id
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .take(8)
        .map(|c| c.to_ascii_uppercase())
        .collect();
    if short_id.is_empty() {
        short_id.push('0');
    }

    format!("{CONFIRMATION_PREFIX}-{}-{short_id}", base36::encode(millis))
}

/// Maps [`Quote`] entities to [`QuoteListItem`] read models.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuoteProjector {
    policy: ConfirmationPolicy,
}

impl QuoteProjector {
    pub fn new(policy: ConfirmationPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> ConfirmationPolicy {
        self.policy
    }

    /// Projects one quote as seen at `now`.
    pub fn project(&self, quote: &Quote, now: DateTime<Utc>) -> QuoteListItem {
        QuoteListItem {
            id: quote.id.to_string(),
            customer_name: quote.customer_name.clone(),
            email: quote.email.as_str().to_string(),
            phone: quote.phone.formatted(),
            service_type: quote.service_type.clone(),
            description: quote.description.clone(),
            status: quote.status,
            priority: quote.priority,
            estimated_value: quote.estimated_value,
            submitted_at: quote.submitted_at,
            updated_at: quote.updated_at,
            expires_at: quote.expires_at,
            is_expired: quote.is_expired_at(now),
            photo_count: quote.photo_attachments.len(),
            confirmation_number: self.confirmation_for(quote, now),
        }
    }

    fn confirmation_for(&self, quote: &Quote, now: DateTime<Utc>) -> String {
        match self.policy {
            ConfirmationPolicy::PerRead => confirmation_number(quote.id.as_str(), now),
            ConfirmationPolicy::Stored => quote
                .confirmation_number
                .clone()
                .unwrap_or_else(|| confirmation_number(quote.id.as_str(), quote.submitted_at)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{
        Email, Phone, PhotoAttachment, QuoteId, QuotePriority, QuoteStatus, ServiceType,
    };
    use chrono::{Duration, TimeZone};
    use regex::Regex;
    use rust_decimal::Decimal;

    fn quote(id: &str) -> Quote {
        Quote::submitted(
            QuoteId::new(id).unwrap(),
            "Grand River Dental",
            Email::parse("office@grdental.example").unwrap(),
            Phone::parse("6165550177").unwrap(),
            ServiceType::from_catalog("concrete-asphalt").unwrap(),
            "Resurface the rear parking lot",
            Decimal::new(1_850_000, 2),
            Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap(),
        )
        .with_priority(QuotePriority::High)
        .with_photos(vec![
            PhotoAttachment {
                file_name: "lot-1.jpg".to_string(),
                content_type: Some("image/jpeg".to_string()),
            },
            PhotoAttachment {
                file_name: "lot-2.jpg".to_string(),
                content_type: None,
            },
        ])
    }

    #[test]
    fn test_confirmation_number_format() {
        let at = Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();
        assert_eq!(
            confirmation_number("9f86d081-884c-7d65", at),
            "QTE-LRE5S000-9F86D081"
        );
    }

    #[test]
    fn test_confirmation_number_short_id() {
        let at = Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();
        assert_eq!(confirmation_number("ab1", at), "QTE-LRE5S000-AB1");
    }

    #[test]
    fn test_confirmation_number_matches_pattern() {
        let pattern = Regex::new(r"^QTE-[A-Z0-9]+-[A-Z0-9]{1,8}$").unwrap();
        for id in [
            "7f3c9a12e0aa4d1b",
            "q1",
            "ABCDEFGH",
            "0000000000000000",
            "q-a",
            "q_b-c_d-e",
            "straße-7",
            "---",
        ] {
            let number = confirmation_number(id, Utc::now());
            assert!(pattern.is_match(&number), "{number} for id {id}");
        }
    }

    #[test]
    fn test_confirmation_number_skips_separators() {
        let at = Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();
        assert_eq!(confirmation_number("q-a", at), "QTE-LRE5S000-QA");
        assert_eq!(confirmation_number("ab_cd-ef-gh-ij", at), "QTE-LRE5S000-ABCDEFGH");
        assert_eq!(confirmation_number("straße", at), "QTE-LRE5S000-STRAE");
        assert_eq!(confirmation_number("--", at), "QTE-LRE5S000-0");
    }

    #[test]
    fn test_project_copies_fields() {
        let quote = quote("5e8a1c33f0");
        let now = Utc::now();
        let item = QuoteProjector::default().project(&quote, now);

        assert_eq!(item.id, "5e8a1c33f0");
        assert_eq!(item.customer_name, "Grand River Dental");
        assert_eq!(item.email, "office@grdental.example");
        assert_eq!(item.phone, "(616) 555-0177");
        assert_eq!(item.service_type.key, "concrete-asphalt");
        assert_eq!(item.status, QuoteStatus::Submitted);
        assert_eq!(item.priority, QuotePriority::High);
        assert_eq!(item.estimated_value, Decimal::new(1_850_000, 2));
        assert_eq!(item.submitted_at, quote.submitted_at);
        assert_eq!(item.expires_at, None);
        assert!(!item.is_expired);
        assert_eq!(item.photo_count, 2);
    }

    #[test]
    fn test_project_surfaces_expiry() {
        let now = Utc::now();
        let quote = quote("5e8a1c33f0").with_expiry(Some(now - Duration::hours(1)));
        assert!(QuoteProjector::default().project(&quote, now).is_expired);
    }

    #[test]
    fn test_per_read_policy_depends_on_read_time() {
        let projector = QuoteProjector::new(ConfirmationPolicy::PerRead);
        let quote = quote("5e8a1c33f0");
        let first = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let second = first + Duration::milliseconds(1);

        let a = projector.project(&quote, first).confirmation_number;
        let b = projector.project(&quote, second).confirmation_number;
        assert_ne!(a, b);
        assert_eq!(a, confirmation_number("5e8a1c33f0", first));
    }

    #[test]
    fn test_stored_policy_is_stable() {
        let projector = QuoteProjector::new(ConfirmationPolicy::Stored);
        let quote = quote("5e8a1c33f0");
        let first = Utc::now();
        let second = first + Duration::days(3);

        let a = projector.project(&quote, first).confirmation_number;
        let b = projector.project(&quote, second).confirmation_number;
        assert_eq!(a, b);
        assert_eq!(a, "QTE-LRE5S000-5E8A1C33");
    }

    #[test]
    fn test_stored_policy_prefers_persisted_number() {
        let projector = QuoteProjector::new(ConfirmationPolicy::Stored);
        let quote = quote("5e8a1c33f0").with_confirmation_number("QTE-ABC123-5E8A1C33");
        assert_eq!(
            projector.project(&quote, Utc::now()).confirmation_number,
            "QTE-ABC123-5E8A1C33"
        );
    }

    #[test]
    fn test_policy_parse() {
        assert_eq!("per-read".parse::<ConfirmationPolicy>(), Ok(ConfirmationPolicy::PerRead));
        assert_eq!("STORED".parse::<ConfirmationPolicy>(), Ok(ConfirmationPolicy::Stored));
        assert_eq!(
            "sometimes".parse::<ConfirmationPolicy>(),
            Err(UnknownPolicyError("sometimes".to_string()))
        );
    }
}
