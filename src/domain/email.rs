//! EmailAddress value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Local part, `@`, domain host, `.`, and a top-level label of two or more letters.
/// The local part and the host must start and end with an alphanumeric character.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9](?:[a-zA-Z0-9._+-]*[a-zA-Z0-9])?@[a-zA-Z0-9](?:[a-zA-Z0-9.-]*[a-zA-Z0-9])?\.[a-zA-Z]{2,}$",
    )
    .expect("Failed to compile email regex")
});

/// A validated email address.
///
/// Surrounding whitespace is trimmed before validation and the trimmed value
/// is what gets stored.
///
/// # Example
///
/// ```
/// use email_phone_validator::domain::EmailAddress;
///
/// let email = EmailAddress::parse("  john.doe@company.co.uk ").unwrap();
/// assert_eq!(email.as_str(), "john.doe@company.co.uk");
/// assert_eq!(email.domain(), "company.co.uk");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Parse and validate an email address.
    ///
    /// # Validation Rules
    ///
    /// - Local part of letters, digits, `.`, `_`, `+`, `-`, starting and ending alphanumeric
    /// - Exactly one '@'
    /// - Domain host of letters, digits, `.`, `-`, starting and ending alphanumeric
    /// - Top-level label of at least two letters
    /// - No leading or trailing '.', no ".." anywhere
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::Empty` for blank input and
    /// `ValidationError::InvalidEmail` if the format is invalid.
    pub fn parse(email: &str) -> Result<Self, ValidationError> {
        let email = email.trim();
        if email.is_empty() {
            return Err(ValidationError::Empty);
        }

        if !Self::is_valid(email) {
            tracing::debug!("Email rejected by structural rules");
            return Err(ValidationError::InvalidEmail(email.to_string()));
        }

        Ok(Self(email.to_string()))
    }

    /// Validate an already trimmed email.
    fn is_valid(email: &str) -> bool {
        if !EMAIL_REGEX.is_match(email) {
            return false;
        }

        if email.starts_with('.') || email.ends_with('.') {
            return false;
        }

        if email.contains("..") {
            return false;
        }

        email.matches('@').count() == 1
    }

    /// Get the email address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Get the local part (before '@').
    pub fn local_part(&self) -> &str {
        self.0.split_once('@').map_or("", |(local, _)| local)
    }

    /// Get the domain part (after '@').
    pub fn domain(&self) -> &str {
        self.0.split_once('@').map_or("", |(_, domain)| domain)
    }
}

// Serde support - serialize as string
impl Serialize for EmailAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for EmailAddress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        EmailAddress::parse(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
