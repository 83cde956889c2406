//! Error types for the record store core.
//!
//! This module defines custom error types using `thiserror` for precise
//! error handling. Field-level validation errors live in
//! [`crate::domain::errors`]; everything here concerns operations on whole
//! records. All errors are synchronous and surfaced to the immediate
//! caller — nothing is retried or swallowed internally.

use thiserror::Error;

/// Errors that can occur when building a person record.
#[derive(Error, Debug)]
pub enum BuildError {
    /// `build()` was called on a builder that never had a name staged.
    #[error("Cannot build a person without a name")]
    MissingName,
}

/// Errors that can occur when editing a displayed person list.
#[derive(Error, Debug)]
pub enum EditError {
    /// The 1-based index does not address an entry of the displayed list.
    #[error("Index {index} is out of range for a list of {len} person(s)")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Errors that can occur when mutating a person store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The operation would leave two records resolving to the same person.
    #[error("Operation would result in duplicate persons in the store")]
    DuplicatePerson,

    /// The target record is not present in the store.
    #[error("Person not found in the store")]
    PersonNotFound,
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with BuildError
pub type BuildResult<T> = Result<T, BuildError>;

/// Convenience type alias for Results with EditError
pub type EditResult<T> = Result<T, EditError>;

/// Convenience type alias for Results with StoreError
pub type StoreResult<T> = Result<T, StoreError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
