//! Domain validation errors.

use std::fmt;

/// Errors raised when a raw string fails a value field's format rule.
///
/// Each variant carries the offending input so callers can surface it
/// verbatim to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided name is blank or contains illegal characters.
    InvalidName(String),

    /// The provided phone number is not digits-only or is too short.
    InvalidPhone(String),

    /// The provided email address is invalid.
    InvalidEmail(String),

    /// The provided address is blank or starts with whitespace.
    InvalidAddress(String),

    /// The provided tag is not a single alphanumeric word.
    InvalidTag(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidName(name) => write!(
                f,
                "Invalid name: '{}' (names must start with an alphanumeric character \
                 and contain only alphanumeric characters and spaces)",
                name
            ),
            Self::InvalidPhone(phone) => write!(
                f,
                "Invalid phone number: '{}' (phone numbers must contain only digits \
                 and be at least 3 digits long)",
                phone
            ),
            Self::InvalidEmail(email) => write!(
                f,
                "Invalid email address: '{}' (emails must be of the form local@domain)",
                email
            ),
            Self::InvalidAddress(address) => write!(
                f,
                "Invalid address: '{}' (addresses can take any value but must not be \
                 blank or start with whitespace)",
                address
            ),
            Self::InvalidTag(tag) => {
                write!(f, "Invalid tag: '{}' (tags must be a single alphanumeric word)", tag)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
