//! Customer contact value objects.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;
use validator::ValidateEmail;

/// Matches every character that is not an ASCII digit.
static NON_DIGIT_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^0-9]").unwrap());

/// Errors raised when parsing an [`Email`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EmailError {
    #[error("email cannot be empty")]
    Empty,
    #[error("'{0}' is not a valid email address")]
    Invalid(String),
}

/// A validated customer email address.
///
/// Surrounding whitespace is trimmed; the address is otherwise kept as entered
/// so the admin portal shows exactly what the customer typed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    /// Parses and validates an email address.
    ///
    /// # Errors
    ///
    /// Returns [`EmailError::Empty`] for blank input and [`EmailError::Invalid`]
    /// when the address fails HTML5 email validation.
    pub fn parse(raw: &str) -> Result<Self, EmailError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(EmailError::Empty);
        }
        if !trimmed.validate_email() {
            return Err(EmailError::Invalid(trimmed.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Display value of the address.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Email {
    type Error = EmailError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Errors raised when parsing a [`Phone`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PhoneError {
    #[error("phone number cannot be empty")]
    Empty,
    #[error("phone number must have 10 digits, got {0}")]
    InvalidLength(usize),
}

/// A North American phone number.
///
/// Stored as the ten national digits. An 11-digit input with a leading `1`
/// country code is accepted and normalized.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone {
    digits: String,
}

impl Phone {
    /// Parses a phone number written in any common notation.
    ///
    /// # Errors
    ///
    /// Returns [`PhoneError`] when the input holds no digits or the wrong number of them.
    pub fn parse(raw: &str) -> Result<Self, PhoneError> {
        let digits = NON_DIGIT_REGEX.replace_all(raw, "");
        let digits = match digits.len() {
            0 => return Err(PhoneError::Empty),
            11 if digits.starts_with('1') => digits[1..].to_string(),
            10 => digits.into_owned(),
            n => return Err(PhoneError::InvalidLength(n)),
        };
        Ok(Self { digits })
    }

    /// The ten national digits without punctuation.
    pub fn digits(&self) -> &str {
        &self.digits
    }

    /// Canonical display format, e.g. `(616) 555-0123`.
    pub fn formatted(&self) -> String {
        let (area, rest) = self.digits.split_at(3);
        let (exchange, line) = rest.split_at(3);
        format!("({area}) {exchange}-{line}")
    }
}

impl TryFrom<String> for Phone {
    type Error = PhoneError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Phone> for String {
    fn from(phone: Phone) -> Self {
        phone.formatted()
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_parse_trims_whitespace() {
        let email = Email::parse("  john.manager@abccorp.com ").unwrap();
        assert_eq!(email.as_str(), "john.manager@abccorp.com");
    }

    #[test]
    fn test_email_rejects_invalid_input() {
        assert_eq!(Email::parse("   "), Err(EmailError::Empty));
        assert!(matches!(
            Email::parse("not-an-email"),
            Err(EmailError::Invalid(_))
        ));
        assert!(Email::parse("@example.com").is_err());
    }

    #[test]
    fn test_email_serde_roundtrip_validates() {
        let email: Email = serde_json::from_str(r#""ops@snowline.example""#).unwrap();
        assert_eq!(serde_json::to_string(&email).unwrap(), r#""ops@snowline.example""#);
        assert!(serde_json::from_str::<Email>(r#""nope""#).is_err());
    }

    #[test]
    fn test_phone_formats_ten_digits() {
        let phone = Phone::parse("616.555.0123").unwrap();
        assert_eq!(phone.digits(), "6165550123");
        assert_eq!(phone.formatted(), "(616) 555-0123");
    }

    #[test]
    fn test_phone_strips_country_code() {
        let phone = Phone::parse("+1 (616) 555-0199").unwrap();
        assert_eq!(phone.formatted(), "(616) 555-0199");
    }

    #[test]
    fn test_phone_rejects_wrong_length() {
        assert_eq!(Phone::parse("555-0123"), Err(PhoneError::InvalidLength(7)));
        assert_eq!(Phone::parse("n/a"), Err(PhoneError::Empty));
        assert!(Phone::parse("26165550123").is_err());
    }

    #[test]
    fn test_phone_serializes_formatted() {
        let phone: Phone = serde_json::from_str(r#""6165550123""#).unwrap();
        assert_eq!(serde_json::to_string(&phone).unwrap(), r#""(616) 555-0123""#);
    }
}
