//! Domain validation errors.

use std::fmt;

/// Reasons a candidate email address or phone number was rejected.
///
/// The boolean facade collapses every variant to `false`; the value objects
/// return them so callers can tell "blank" from "malformed" from "not valid
/// for this region".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The input was empty or whitespace only.
    Empty,

    /// The email address failed the structural rules.
    InvalidEmail(String),

    /// The region code is not a known ISO 3166-1 alpha-2 code.
    UnknownRegion(String),

    /// The numbering-plan library could not parse the input.
    UnparseablePhone { input: String, reason: String },

    /// The number parsed but is not valid for its numbering plan.
    InvalidPhone { input: String, region: String },

    /// The numbering-plan library panicked while handling the input.
    LibraryFailure(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Value cannot be empty"),
            Self::InvalidEmail(email) => write!(f, "Invalid email address: {}", email),
            Self::UnknownRegion(region) => write!(f, "Unknown region code: {}", region),
            Self::UnparseablePhone { input, reason } => {
                write!(f, "Cannot parse phone number {}: {}", input, reason)
            }
            Self::InvalidPhone { input, region } => {
                write!(f, "Invalid phone number for region {}: {}", region, input)
            }
            Self::LibraryFailure(input) => {
                write!(f, "Phone number library failed on input: {}", input)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
