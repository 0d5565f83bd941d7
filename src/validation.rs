//! Request field validation.
//!
//! Length bounds count Unicode scalar values, not bytes, so a 5-character
//! prompt in any script is accepted.

use email_address::EmailAddress;
use std::fmt;
use thiserror::Error;

/// Prompt length bounds for disease chat.
pub const PROMPT_LEN: (usize, usize) = (5, 2000);
/// Requirement length bounds for test case generation.
pub const REQUIREMENT_LEN: (usize, usize) = (10, 1000);
/// System type length bounds for test case generation.
pub const SYSTEM_TYPE_LEN: (usize, usize) = (3, 50);
/// Username length bounds.
pub const USERNAME_LEN: (usize, usize) = (3, 50);
/// Password length bounds.
pub const PASSWORD_LEN: (usize, usize) = (6, 100);
/// Maximum full name length.
pub const FULL_NAME_MAX: usize = 100;

/// Why a field was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reason {
    TooShort { min: usize, actual: usize },
    TooLong { max: usize, actual: usize },
    InvalidEmail,
    /// The request body itself could not be decoded.
    Malformed(String),
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reason::TooShort { min, actual } => {
                write!(f, "must be at least {min} characters (got {actual})")
            }
            Reason::TooLong { max, actual } => {
                write!(f, "must be at most {max} characters (got {actual})")
            }
            Reason::InvalidEmail => f.write_str("is not a valid email address"),
            Reason::Malformed(detail) => f.write_str(detail),
        }
    }
}

/// A rejected request field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field} {reason}")]
pub struct ValidationError {
    pub field: &'static str,
    pub reason: Reason,
}

impl ValidationError {
    pub fn new(field: &'static str, reason: Reason) -> Self {
        ValidationError { field, reason }
    }

    /// A body that failed to decode (bad JSON, unknown priority, missing field).
    pub fn malformed(detail: impl Into<String>) -> Self {
        ValidationError::new("body", Reason::Malformed(detail.into()))
    }
}

/// Checks that `value` has between `min` and `max` characters, inclusive.
pub fn check_len(
    field: &'static str,
    value: &str,
    (min, max): (usize, usize),
) -> Result<(), ValidationError> {
    let actual = value.chars().count();
    if actual < min {
        return Err(ValidationError::new(field, Reason::TooShort { min, actual }));
    }
    if actual > max {
        return Err(ValidationError::new(field, Reason::TooLong { max, actual }));
    }
    Ok(())
}

/// Checks that `value` has at most `max` characters.
pub fn check_max_len(field: &'static str, value: &str, max: usize) -> Result<(), ValidationError> {
    check_len(field, value, (0, max))
}

/// Maximum length of one DNS label.
const MAX_LABEL_LEN: usize = 63;

/// Checks that `value` is a deliverable-looking address.
///
/// The address must parse under RFC 5322 (via `email_address`), its local part
/// must not start or end with a dot, and its domain must be a hostname with at
/// least two labels, each non-empty, made of `[A-Za-z0-9-]` and not starting or
/// ending with a hyphen. Quoted local parts and domain literals are rejected.
pub fn check_email(field: &'static str, value: &str) -> Result<(), ValidationError> {
    let invalid = || ValidationError::new(field, Reason::InvalidEmail);

    if value.chars().any(char::is_whitespace) || !EmailAddress::is_valid(value) {
        return Err(invalid());
    }
    let (local, domain) = value.rsplit_once('@').ok_or_else(invalid)?;
    if local.is_empty() || local.starts_with('.') || local.ends_with('.') || local.contains('"') {
        return Err(invalid());
    }

    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 || !labels.iter().all(|label| is_hostname_label(label)) {
        return Err(invalid());
    }
    Ok(())
}

fn is_hostname_label(label: &str) -> bool {
    !label.is_empty()
        && label.len() <= MAX_LABEL_LEN
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}
