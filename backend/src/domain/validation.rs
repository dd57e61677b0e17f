//! Field validation for school records.

use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;
use validator::ValidateEmail;

use super::school::SchoolRecord;

/// Inclusive lower bound on the total contact-number length, counting the
/// optional leading `+`.
pub const CONTACT_LEN_MIN: usize = 12;
/// Inclusive upper bound on the total contact-number length.
pub const CONTACT_LEN_MAX: usize = 15;

static CONTACT_RE: OnceLock<Regex> = OnceLock::new();

fn contact_regex() -> &'static Regex {
    CONTACT_RE.get_or_init(|| {
        // The 10-15 digit bound here and the 12-15 length bound below are
        // both part of the contract; a 10-digit number without `+` passes
        // the regex but fails the length check.
        let pattern = r"^\+?[0-9]{10,15}$";
        Regex::new(pattern)
            .unwrap_or_else(|error| panic!("contact regex failed to compile: {error}"))
    })
}

/// Field-level contract violation detected before persistence is attempted.
///
/// The display text of each variant is the exact message surfaced to the
/// caller in the bad-request envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// `name` is empty.
    #[error("School name is required")]
    MissingName,
    /// `address` is empty.
    #[error("School address is required")]
    MissingAddress,
    /// `contact` is empty.
    #[error("School contact number is required")]
    MissingContact,
    /// `contact` does not match the phone-number pattern.
    #[error("Invalid contact number format")]
    ContactFormat,
    /// `contact` length falls outside [`CONTACT_LEN_MIN`]..=[`CONTACT_LEN_MAX`].
    #[error("Contact number should be between 12 to 15 characters")]
    ContactLength,
    /// `email` fails the address parse.
    #[error("Invalid email address")]
    InvalidEmail,
}

/// Validate a decoded school record.
///
/// Checks run in a fixed order and stop at the first failure so the surfaced
/// message is deterministic. The `description` field is not checked; see
/// [`DESCRIPTION_MAX`](super::DESCRIPTION_MAX).
pub fn validate_school(record: &SchoolRecord) -> Result<(), ValidationError> {
    if record.name.is_empty() {
        return Err(ValidationError::MissingName);
    }

    if record.address.is_empty() {
        return Err(ValidationError::MissingAddress);
    }

    if record.contact.is_empty() {
        return Err(ValidationError::MissingContact);
    }

    if !contact_regex().is_match(&record.contact) {
        return Err(ValidationError::ContactFormat);
    }

    // The regex has confined the value to ASCII, so byte length equals
    // character count.
    let length = record.contact.len();
    if !(CONTACT_LEN_MIN..=CONTACT_LEN_MAX).contains(&length) {
        return Err(ValidationError::ContactLength);
    }

    if !record.email.validate_email() {
        return Err(ValidationError::InvalidEmail);
    }

    Ok(())
}
