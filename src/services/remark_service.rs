//! Remark editing over a displayed person list.
//!
//! The one edit operation with its own service: replace the remark of the
//! person at a 1-based display index, leaving every identity field
//! untouched. The input list is never mutated; the caller swaps the
//! returned record into its backing store.

use crate::domain::Remark;
use crate::error::{EditError, EditResult};
use crate::models::Person;
use std::fmt;
use tracing::debug;

/// How a successful remark edit should be reported to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemarkOutcome {
    /// A non-empty remark was set.
    Added,
    /// The remark was cleared with an empty value.
    Removed,
}

impl fmt::Display for RemarkOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Added => write!(f, "remark added"),
            Self::Removed => write!(f, "remark removed"),
        }
    }
}

/// The result of a successful remark edit: the replacement record plus
/// the user-facing classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemarkEdit {
    /// The replacement person, identical to the original except for the
    /// remark field.
    pub person: Person,

    /// Whether the edit added or removed a remark. Purely a messaging
    /// distinction, not a data-model one.
    pub outcome: RemarkOutcome,
}

impl RemarkEdit {
    /// User-facing success message for this edit.
    pub fn message(&self) -> String {
        match self.outcome {
            RemarkOutcome::Added => format!("Added remark to person: {}", self.person),
            RemarkOutcome::Removed => format!("Removed remark from person: {}", self.person),
        }
    }
}

/// Replace the remark of the person at `index` (1-based) in the displayed
/// list, producing the replacement record.
///
/// The replacement is built through the person's builder so the
/// copy-then-override pattern applies: every field except the remark is
/// carried over unchanged. The caller is responsible for swapping the old
/// record for the returned one in whatever store it maintains.
///
/// # Errors
///
/// Returns `EditError::IndexOutOfRange` if `index` is outside
/// `[1, people.len()]`.
pub fn set_remark(people: &[Person], index: usize, remark: Remark) -> EditResult<RemarkEdit> {
    if index == 0 || index > people.len() {
        return Err(EditError::IndexOutOfRange {
            index,
            len: people.len(),
        });
    }

    let target = &people[index - 1];
    let outcome = if remark.is_empty() {
        RemarkOutcome::Removed
    } else {
        RemarkOutcome::Added
    };

    let person = target
        .to_builder()
        .with_remark(Some(remark))
        .build()
        // a builder seeded from an existing person always carries a name
        .expect("seeded builder has a name");

    debug!(index, %outcome, name = %person.name(), "remark edited");

    Ok(RemarkEdit { person, outcome })
}
