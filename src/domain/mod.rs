//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the fields of a person
//! record: names, phone numbers, email addresses, addresses, remarks and
//! tags. These value objects validate at construction time, store the raw
//! string verbatim, and prevent invalid data from being represented in
//! the system.

pub mod address;
pub mod email;
pub mod errors;
pub mod name;
pub mod phone;
pub mod remark;
pub mod tag;

pub use address::Address;
pub use email::Email;
pub use errors::ValidationError;
pub use name::Name;
pub use phone::Phone;
pub use remark::Remark;
pub use tag::Tag;
