//! Name value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

// First character alphanumeric, the rest alphanumeric or spaces. Trailing
// spaces are legal: the raw value is stored verbatim and only identity
// comparison normalizes it.
static NAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\p{L}\p{N}][\p{L}\p{N} ]*$").expect("Failed to compile name regex"));

/// A type-safe wrapper for person names.
///
/// Names are validated at construction time and stored verbatim: no
/// trimming or case-folding happens here. `"Bob Choo "` and `"Bob Choo"`
/// are distinct values (identity resolution has its own normalization).
///
/// # Example
///
/// ```
/// use tutormatch_core::domain::Name;
///
/// let name = Name::new("Alice Pauline").unwrap();
/// assert_eq!(name.as_str(), "Alice Pauline");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name(String);

impl Name {
    /// Create a new Name, validating the format.
    ///
    /// # Validation Rules
    ///
    /// - Must not be empty
    /// - First character must be alphanumeric
    /// - Remaining characters must be alphanumeric or spaces
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidName` if the name format is invalid.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();

        if !NAME_REGEX.is_match(&name) {
            return Err(ValidationError::InvalidName(name));
        }

        Ok(Self(name))
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Normalized form used for identity comparison: surrounding
    /// whitespace trimmed, lowercased.
    pub fn normalize_for_identity(&self) -> String {
        self.0.trim().to_lowercase()
    }
}

// Serde support - serialize as string
impl Serialize for Name {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Name {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Name::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
