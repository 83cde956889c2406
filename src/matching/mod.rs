//! Identity resolution between person records.

pub mod identity;

pub use identity::{is_same_person, DEFAULT_ADDRESS, DEFAULT_EMAIL, DEFAULT_PHONE};
