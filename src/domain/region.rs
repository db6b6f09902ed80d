//! RegionCode value object.

use super::errors::ValidationError;
use phonenumber::country;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Region used when a phone number is validated without an explicit region.
pub const DEFAULT_REGION: &str = "IN";

/// An ISO 3166-1 alpha-2 region code known to the numbering-plan metadata.
///
/// Codes are case-sensitive: `"US"` is accepted, `"us"` is not.
///
/// # Example
///
/// ```
/// use email_phone_validator::domain::RegionCode;
///
/// let region = RegionCode::new("US").unwrap();
/// assert_eq!(region.as_str(), "US");
/// assert!(RegionCode::new("us").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct RegionCode {
    code: String,
    id: country::Id,
}

impl RegionCode {
    /// Create a RegionCode, checking it against the numbering-plan metadata.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::UnknownRegion` for codes the metadata does not know.
    pub fn new(code: impl Into<String>) -> Result<Self, ValidationError> {
        let code = code.into();

        // Lower-case codes are rejected even if the metadata parser would fold them.
        if code.len() != 2 || !code.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(ValidationError::UnknownRegion(code));
        }

        match code.parse::<country::Id>() {
            Ok(id) => Ok(Self { code, id }),
            Err(_) => Err(ValidationError::UnknownRegion(code)),
        }
    }

    /// Get the region code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.code
    }

    /// The numbering-plan identifier for this region.
    pub fn country_id(&self) -> country::Id {
        self.id
    }
}

impl Default for RegionCode {
    fn default() -> Self {
        Self {
            code: DEFAULT_REGION.to_string(),
            id: country::Id::IN,
        }
    }
}

impl PartialEq for RegionCode {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for RegionCode {}

impl Hash for RegionCode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

impl FromStr for RegionCode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for RegionCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.code.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for RegionCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        RegionCode::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for RegionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code)
    }
}
