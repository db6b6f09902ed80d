//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the values this crate
//! validates: email addresses, phone numbers, and the region codes that
//! select a numbering plan. Each value object validates at construction time
//! and reports the reason for a rejection through [`ValidationError`].

pub mod email;
pub mod errors;
pub mod phone;
pub mod region;

pub use email::EmailAddress;
pub use errors::ValidationError;
pub use phone::PhoneNumber;
pub use region::{RegionCode, DEFAULT_REGION};
