//! Boolean validation facade.
//!
//! These are the stable entry points of the crate. Every rejection reason
//! (absent or non-string input, blank input, malformed value, unknown region,
//! failure inside the numbering-plan library) collapses to `false`.

use crate::config::Config;
use crate::domain::{EmailAddress, PhoneNumber, RegionCode, DEFAULT_REGION};
use crate::input::Candidate;

/// Check whether the input is a structurally valid email address.
///
/// # Example
///
/// ```
/// use email_phone_validator::validate_email;
///
/// assert!(validate_email("user@example.com"));
/// assert!(!validate_email("invalid-email"));
/// assert!(!validate_email(None::<&str>));
/// ```
pub fn validate_email<C: Candidate>(email: C) -> bool {
    match email.as_candidate() {
        Some(email) => EmailAddress::parse(email).is_ok(),
        None => false,
    }
}

/// Check whether the input is a valid phone number, using "IN" when the
/// number carries no country calling code.
///
/// ```
/// use email_phone_validator::validate_phone;
///
/// assert!(validate_phone("+919876543210"));
/// assert!(!validate_phone("12345"));
/// ```
pub fn validate_phone<C: Candidate>(phone: C) -> bool {
    validate_phone_for_region(phone, DEFAULT_REGION)
}

/// Check whether the input is a valid phone number for `country`.
///
/// `country` is a case-sensitive ISO 3166-1 alpha-2 code; unknown codes make
/// every number invalid.
pub fn validate_phone_for_region<C: Candidate>(phone: C, country: &str) -> bool {
    let Some(phone) = phone.as_candidate() else {
        return false;
    };

    match RegionCode::new(country) {
        Ok(region) => PhoneNumber::parse(phone, &region).is_ok(),
        Err(e) => {
            tracing::debug!("Phone validation skipped: {}", e);
            false
        }
    }
}

/// Validator bound to a configured default region.
///
/// ```
/// use email_phone_validator::{Config, Validator};
/// use email_phone_validator::domain::RegionCode;
///
/// let config = Config {
///     default_region: RegionCode::new("US").unwrap(),
///     ..Config::default()
/// };
/// let validator = Validator::new(&config);
/// assert!(validator.phone("(202) 555-1234"));
/// assert!(validator.email("john.doe@company.co.uk"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Validator {
    default_region: RegionCode,
}

impl Validator {
    /// Create a validator from configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            default_region: config.default_region.clone(),
        }
    }

    /// The region used by [`Validator::phone`].
    pub fn default_region(&self) -> &RegionCode {
        &self.default_region
    }

    /// Same contract as [`validate_email`].
    pub fn email<C: Candidate>(&self, email: C) -> bool {
        validate_email(email)
    }

    /// Same contract as [`validate_phone`], with the configured default region.
    pub fn phone<C: Candidate>(&self, phone: C) -> bool {
        match phone.as_candidate() {
            Some(phone) => PhoneNumber::parse(phone, &self.default_region).is_ok(),
            None => false,
        }
    }

    /// Same contract as [`validate_phone_for_region`].
    pub fn phone_for_region<C: Candidate>(&self, phone: C, country: &str) -> bool {
        validate_phone_for_region(phone, country)
    }
}
