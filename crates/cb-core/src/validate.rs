//! Input validation.
//!
//! The input field carries one comma-separated `Name, City, Email` triple.
//! Rules are applied per part; the first failing rule decides the message
//! shown to the user.

use crate::contact::Contact;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Minimum length of an email address, in UTF-16 code units.
pub const MIN_EMAIL_LEN: usize = 8;

/// Minimum length of a name or city, in UTF-16 code units.
pub const MIN_LABEL_LEN: usize = 2;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[-_A-Za-z0-9]+([._-][A-Za-z0-9]+)*@[A-Za-z0-9]+([.-][A-Za-z0-9]+)*\.[A-Za-z]{2,}$")
        .expect("valid email regex")
});

/// Why a raw input was rejected. `Display` is the user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a valid name!")]
    InvalidName,
    #[error("Please enter a valid city!")]
    InvalidCity,
    #[error("Please enter a valid email")]
    InvalidEmail,
    #[error("Please enter all the specified inputs (Name, City, Email)")]
    FieldCount { found: usize },
}

/// Parse the raw text of the input field into a [`Contact`].
pub fn parse_contact(raw: &str) -> Result<Contact, ValidationError> {
    let parts: Vec<&str> = raw.trim().split(',').map(str::trim).collect();
    let [name, city, email] = parts.as_slice() else {
        return Err(ValidationError::FieldCount { found: parts.len() });
    };

    if !is_valid_label(name) {
        return Err(ValidationError::InvalidName);
    }
    if !is_valid_label(city) {
        return Err(ValidationError::InvalidCity);
    }
    if !is_valid_email(email) {
        return Err(ValidationError::InvalidEmail);
    }

    Ok(Contact::new(*name, *city, *email))
}

/// Length as the browser reports it for an input value.
fn utf16_len(value: &str) -> usize {
    value.encode_utf16().count()
}

/// Names and cities: at least two UTF-16 code units, no ASCII digits.
pub fn is_valid_label(value: &str) -> bool {
    utf16_len(value) >= MIN_LABEL_LEN && !value.chars().any(|c| c.is_ascii_digit())
}

pub fn is_valid_email(value: &str) -> bool {
    utf16_len(value) >= MIN_EMAIL_LEN && EMAIL_RE.is_match(value)
}
