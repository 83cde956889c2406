//! Email value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A type-safe wrapper for email addresses.
///
/// The accepted shape is `local@domain`. A single-label domain such as
/// `default@email` is legal; a top-level dot is not required.
///
/// # Example
///
/// ```
/// use tutormatch_core::domain::Email;
///
/// let email = Email::new("alice@example.com").unwrap();
/// assert_eq!(email.as_str(), "alice@example.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    /// Create a new Email, validating the format.
    ///
    /// # Validation Rules
    ///
    /// - Must contain exactly one '@' symbol
    /// - Local part: alphanumeric plus `+`, `_`, `.`, `-`; must start and
    ///   end with an alphanumeric character
    /// - Domain part: one or more dot-separated labels of alphanumeric
    ///   characters or hyphens; labels must not start or end with a
    ///   hyphen; the final label must be at least 2 characters long
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidEmail` if the email format is invalid.
    pub fn new(email: impl Into<String>) -> Result<Self, ValidationError> {
        let email = email.into();

        if !Self::is_valid(&email) {
            return Err(ValidationError::InvalidEmail(email));
        }

        Ok(Self(email))
    }

    /// Validate email format.
    fn is_valid(email: &str) -> bool {
        let mut parts = email.split('@');
        let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
            (Some(local), Some(domain), None) => (local, domain),
            _ => return false,
        };

        if !Self::is_valid_local_part(local) {
            return false;
        }

        Self::is_valid_domain(domain)
    }

    fn is_valid_local_part(local: &str) -> bool {
        if local.is_empty() {
            return false;
        }

        if !local
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, '+' | '_' | '.' | '-'))
        {
            return false;
        }

        // Must start and end with an alphanumeric character
        let first = local.chars().next();
        let last = local.chars().last();
        matches!(first, Some(c) if c.is_alphanumeric()) && matches!(last, Some(c) if c.is_alphanumeric())
    }

    fn is_valid_domain(domain: &str) -> bool {
        if domain.is_empty() {
            return false;
        }

        let labels: Vec<&str> = domain.split('.').collect();
        for label in &labels {
            if label.is_empty() {
                return false;
            }
            if !label.chars().all(|c| c.is_alphanumeric() || c == '-') {
                return false;
            }
            if label.starts_with('-') || label.ends_with('-') {
                return false;
            }
        }

        // Final label carries the minimum-length requirement
        labels.last().map(|l| l.len() >= 2).unwrap_or(false)
    }

    /// Get the email address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Get the local part (before '@').
    pub fn local_part(&self) -> &str {
        // SAFETY: Constructor validates exactly one '@' exists
        self.0
            .split('@')
            .next()
            .expect("email validated to contain '@'")
    }

    /// Get the domain part (after '@').
    pub fn domain(&self) -> &str {
        // SAFETY: Constructor validates exactly one '@' exists
        self.0
            .split('@')
            .nth(1)
            .expect("email validated to contain '@'")
    }

    /// Normalized form used for identity comparison: surrounding
    /// whitespace trimmed, lowercased.
    pub fn normalize_for_identity(&self) -> String {
        self.0.trim().to_lowercase()
    }
}

// Serde support - serialize as string
impl Serialize for Email {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Email {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Email::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
