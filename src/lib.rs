//! Email Phone Validator - boolean validation of email addresses and phone numbers.
//!
//! Email addresses are checked with a structural regex plus dot and `@`
//! placement rules. Phone numbers are parsed and validated against
//! per-region numbering plans by the `phonenumber` crate.
//!
//! # Architecture
//!
//! - **validator**: The boolean facade (`validate_email`, `validate_phone`)
//! - **domain**: Value objects that carry a validated value or a rejection reason
//! - **input**: Adapter for absent or non-string input
//! - **config**: Configuration management from environment variables
//! - **error**: Configuration error types

pub mod config;
pub mod domain;
pub mod error;
pub mod input;
pub mod validator;

pub use config::Config;
pub use domain::{EmailAddress, PhoneNumber, RegionCode, ValidationError};
pub use error::ConfigError;
pub use input::Candidate;
pub use validator::{validate_email, validate_phone, validate_phone_for_region, Validator};
