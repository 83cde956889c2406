//! Remark value object.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A free-text remark about a person.
///
/// Unlike the other value fields a remark has no format rule: any string
/// is accepted, including the empty string, which is how "no remark" is
/// represented. Construction is therefore infallible.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Remark(String);

impl Remark {
    /// Create a new Remark. Always succeeds.
    pub fn new(remark: impl Into<String>) -> Self {
        Self(remark.into())
    }

    /// Get the remark as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Whether this remark is the empty "no remark" value.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// Display support
impl fmt::Display for Remark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
