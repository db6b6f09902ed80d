//! Loosely-typed validation input.
//!
//! Validation requests frequently arrive from JSON payloads or optional form
//! fields, where the value may be missing or may not be a string at all. The
//! [`Candidate`] trait lets the validators accept all of those shapes and treat
//! anything that is not a string as invalid.

use serde_json::Value;
use std::borrow::Cow;

/// Something that may or may not hold a string to validate.
pub trait Candidate {
    /// The string to validate, or `None` when the input is absent or not a string.
    fn as_candidate(&self) -> Option<&str>;
}

impl Candidate for str {
    fn as_candidate(&self) -> Option<&str> {
        Some(self)
    }
}

impl Candidate for String {
    fn as_candidate(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl Candidate for Cow<'_, str> {
    fn as_candidate(&self) -> Option<&str> {
        Some(self.as_ref())
    }
}

impl Candidate for Value {
    fn as_candidate(&self) -> Option<&str> {
        self.as_str()
    }
}

impl<T: Candidate + ?Sized> Candidate for &T {
    fn as_candidate(&self) -> Option<&str> {
        (**self).as_candidate()
    }
}

impl<T: Candidate> Candidate for Option<T> {
    fn as_candidate(&self) -> Option<&str> {
        self.as_ref().and_then(Candidate::as_candidate)
    }
}
