//! Tests for email address validation through the public facade.
//!
//! These tests validate the structural email rules, whitespace handling,
//! and rejection of absent or non-string input.

use email_phone_validator::{validate_email, EmailAddress};
use serde_json::json;

/// Test common well-formed addresses are accepted.
#[test]
fn test_valid_emails() {
    let valid_emails = [
        "test@gmail.com",
        "user@example.com",
        "john.doe@company.co.uk",
        "user+tag@example.com",
        "user_name@example-domain.com",
        "123@example.com",
        "a@b.co",
    ];

    for email in valid_emails {
        assert!(validate_email(email), "{} should be valid", email);
    }
}

/// Test malformed addresses are rejected.
///
/// This test validates:
/// - Missing local part or domain
/// - Misplaced or consecutive dots
/// - Blank input
#[test]
fn test_invalid_emails() {
    let invalid_emails = [
        "invalid.email",
        "@example.com",
        "user@",
        "user@.com",
        "user..name@example.com",
        ".user@example.com",
        "user@example.",
        "user@@example.com",
        "us@er@example.com",
        "user@example.c",
        "user name@example.com",
        "",
        " ",
    ];

    for email in invalid_emails {
        assert!(!validate_email(email), "{:?} should be invalid", email);
    }
}

/// Test that leading and trailing whitespace is ignored.
#[test]
fn test_email_with_whitespace() {
    assert!(validate_email("  test@gmail.com  "));
    assert!(validate_email(" test@gmail.com"));
    assert!(validate_email("test@gmail.com "));
    assert!(validate_email("\ttest@gmail.com\n"));
}

/// Test that trimming never changes the verdict.
#[test]
fn test_email_whitespace_insensitive() {
    let samples = [
        " test@gmail.com ",
        "  .user@example.com",
        "user@example.  ",
        "\u{a0}a@b.co",
        "   ",
        " nope ",
    ];

    for sample in samples {
        assert_eq!(validate_email(sample), validate_email(sample.trim()));
    }
}

/// Test that absent and non-string inputs are rejected.
#[test]
fn test_non_string_input() {
    assert!(!validate_email(None::<&str>));
    assert!(!validate_email(json!(null)));
    assert!(!validate_email(json!(123)));
    assert!(!validate_email(json!([])));
    assert!(!validate_email(json!({})));
}

/// Test repeated calls give the same answer.
#[test]
fn test_email_idempotent() {
    for email in ["test@gmail.com", "user..name@example.com"] {
        assert_eq!(validate_email(email), validate_email(email));
    }
}

/// Test the value object and the facade agree.
#[test]
fn test_email_value_object_matches_facade() {
    for email in ["john.doe@company.co.uk", "@example.com", "  a@b.co "] {
        assert_eq!(EmailAddress::parse(email).is_ok(), validate_email(email));
    }
}
