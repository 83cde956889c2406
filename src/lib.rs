//! TutorMatch core - the contact record store for a tutoring-volunteer
//! matching tool.
//!
//! This library holds a mutable collection of immutable person records
//! (Students and Volunteers), decides when two differently-entered records
//! refer to the same real person, and funnels every mutation — including
//! the free-text remark edit — through a copy-then-override builder.
//! Command-line parsing, list display, persistence and GUI are external
//! collaborators calling in through this crate's types.
//!
//! # Architecture
//!
//! - **domain**: validated immutable value fields (name, phone, email,
//!   address, remark, tag)
//! - **models**: the immutable `Person` aggregate and its staging builder
//! - **matching**: the identity-resolution predicate and sentinel defaults
//! - **services**: record operations (remark editing)
//! - **repositories**: the backing-store contract and an in-memory store
//! - **error**: custom error types for precise error handling
//! - **config**: configuration and tracing setup

pub mod config;
pub mod domain;
pub mod error;
pub mod matching;
pub mod models;
pub mod repositories;
pub mod services;

pub use config::{init_tracing, Config};
pub use error::{BuildError, ConfigError, EditError, StoreError};
pub use matching::{is_same_person, DEFAULT_ADDRESS, DEFAULT_EMAIL, DEFAULT_PHONE};
pub use models::{Person, PersonBuilder, Role};
pub use repositories::{InMemoryPersonStore, PersonStore};
pub use services::{set_remark, RemarkEdit, RemarkOutcome};
