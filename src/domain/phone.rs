//! PhoneNumber value object.

use super::errors::ValidationError;
use super::region::RegionCode;
use serde::{Serialize, Serializer};
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

/// A phone number that is valid for the numbering plan it was checked against.
///
/// Parsing and the per-region validity rules are delegated to the
/// `phonenumber` crate. The stored value is the trimmed input; it is not
/// reformatted.
///
/// # Example
///
/// ```
/// use email_phone_validator::domain::{PhoneNumber, RegionCode};
///
/// let region = RegionCode::new("US").unwrap();
/// let phone = PhoneNumber::parse("(202) 555-1234", &region).unwrap();
/// assert_eq!(phone.as_str(), "(202) 555-1234");
/// assert_eq!(phone.region().as_str(), "US");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber {
    raw: String,
    region: RegionCode,
}

impl PhoneNumber {
    /// Parse a phone number against a region's numbering plan.
    ///
    /// The region is only used when the number carries no country calling
    /// code of its own (`+91...`, `0091...`).
    ///
    /// # Errors
    ///
    /// - `ValidationError::Empty` for blank input
    /// - `ValidationError::UnparseablePhone` if the library cannot parse the input
    /// - `ValidationError::LibraryFailure` if the library panicked
    /// - `ValidationError::InvalidPhone` if the number is not valid for its plan
    pub fn parse(phone: &str, region: &RegionCode) -> Result<Self, ValidationError> {
        let phone = phone.trim();
        if phone.is_empty() {
            return Err(ValidationError::Empty);
        }

        let country = region.country_id();
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            phonenumber::parse(Some(country), phone).map(|number| phonenumber::is_valid(&number))
        }));

        match outcome {
            Ok(Ok(true)) => Ok(Self {
                raw: phone.to_string(),
                region: region.clone(),
            }),
            Ok(Ok(false)) => {
                tracing::debug!(region = %region, "Phone number not valid for numbering plan");
                Err(ValidationError::InvalidPhone {
                    input: phone.to_string(),
                    region: region.to_string(),
                })
            }
            Ok(Err(err)) => {
                tracing::debug!(region = %region, error = ?err, "Phone number could not be parsed");
                Err(ValidationError::UnparseablePhone {
                    input: phone.to_string(),
                    reason: format!("{:?}", err),
                })
            }
            Err(_) => {
                tracing::warn!(region = %region, "Phone number library panicked during parsing");
                Err(ValidationError::LibraryFailure(phone.to_string()))
            }
        }
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The region the number was validated against.
    pub fn region(&self) -> &RegionCode {
        &self.region
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.raw
    }
}

// Serialized as the input string only; the region is not part of the wire form.
impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.raw.serialize(serializer)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}
