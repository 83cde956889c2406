//! Mutable staging builder for person records.

use crate::domain::{Address, Email, Name, Phone, Remark, Tag};
use crate::error::{BuildError, BuildResult};
use crate::matching::{DEFAULT_ADDRESS, DEFAULT_EMAIL, DEFAULT_PHONE};
use crate::models::{Person, Role};
use std::collections::BTreeSet;
use tracing::debug;

/// A short-lived staging object that accumulates field edits and produces
/// a new immutable [`Person`].
///
/// This is the only sanctioned way to "mutate" a person: stage changes on
/// a builder (fresh, or seeded from an existing record via
/// [`Person::to_builder`]) and call [`build`](Self::build). The builder is
/// consumed by `build()`; callers wanting two divergent edits from one
/// base must create two builders from the same seed person.
///
/// Every setter takes an `Option`: `Some(value)` replaces the staged
/// value, `None` is a no-op. This gives "edit only what's given"
/// semantics when a caller forwards optional user input.
///
/// # Example
///
/// ```
/// use tutormatch_core::domain::Name;
/// use tutormatch_core::models::{PersonBuilder, Role};
///
/// let person = PersonBuilder::new(Role::Student)
///     .with_name(Some(Name::new("Amy").unwrap()))
///     .build()
///     .unwrap();
/// assert_eq!(person.phone().as_str(), "000");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonBuilder {
    name: Option<Name>,
    phone: Option<Phone>,
    email: Option<Email>,
    address: Option<Address>,
    remark: Option<Remark>,
    tags: Option<BTreeSet<Tag>>,
    role: Role,
}

impl PersonBuilder {
    /// Create an empty builder for the given role.
    pub fn new(role: Role) -> Self {
        Self {
            name: None,
            phone: None,
            email: None,
            address: None,
            remark: None,
            tags: None,
            role,
        }
    }

    /// Create a builder seeded with every field of an existing person,
    /// enabling partial edits.
    pub fn from_person(person: &Person) -> Self {
        Self {
            name: Some(person.name().clone()),
            phone: Some(person.phone().clone()),
            email: Some(person.email().clone()),
            address: Some(person.address().clone()),
            remark: Some(person.remark().clone()),
            tags: Some(person.tags().clone()),
            role: person.role(),
        }
    }

    /// Replace the staged role.
    pub fn role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    /// Stage a name if one is given.
    pub fn with_name(mut self, name: Option<Name>) -> Self {
        if let Some(name) = name {
            self.name = Some(name);
        }
        self
    }

    /// Stage a phone if one is given.
    pub fn with_phone(mut self, phone: Option<Phone>) -> Self {
        if let Some(phone) = phone {
            self.phone = Some(phone);
        }
        self
    }

    /// Stage an email if one is given.
    pub fn with_email(mut self, email: Option<Email>) -> Self {
        if let Some(email) = email {
            self.email = Some(email);
        }
        self
    }

    /// Stage an address if one is given.
    pub fn with_address(mut self, address: Option<Address>) -> Self {
        if let Some(address) = address {
            self.address = Some(address);
        }
        self
    }

    /// Stage a remark if one is given.
    pub fn with_remark(mut self, remark: Option<Remark>) -> Self {
        if let Some(remark) = remark {
            self.remark = Some(remark);
        }
        self
    }

    /// Stage a tag set if one is given. The whole set is replaced.
    pub fn with_tags(mut self, tags: Option<BTreeSet<Tag>>) -> Self {
        if let Some(tags) = tags {
            self.tags = Some(tags);
        }
        self
    }

    /// Fill every unstaged field from the given person; already-staged
    /// values win. The merge counterpart of the replacing setters, used to
    /// complete a partial edit against its base record.
    pub fn fill_absent_from(mut self, person: &Person) -> Self {
        self.name.get_or_insert_with(|| person.name().clone());
        self.phone.get_or_insert_with(|| person.phone().clone());
        self.email.get_or_insert_with(|| person.email().clone());
        self.address.get_or_insert_with(|| person.address().clone());
        self.remark.get_or_insert_with(|| person.remark().clone());
        self.tags.get_or_insert_with(|| person.tags().clone());
        self
    }

    /// Returns true if at least one field has been staged.
    pub fn is_any_field_edited(&self) -> bool {
        self.name.is_some()
            || self.phone.is_some()
            || self.email.is_some()
            || self.address.is_some()
            || self.remark.is_some()
            || self.tags.is_some()
    }

    /// Produce the immutable person, consuming the builder.
    ///
    /// Unstaged fields fall back to the documented sentinel defaults:
    /// phone `000`, email `default@email`, address `Default Address`, an
    /// empty remark and an empty tag set.
    ///
    /// # Errors
    ///
    /// Returns `BuildError::MissingName` if no name was ever staged,
    /// neither directly nor by seeding from an existing person.
    pub fn build(self) -> BuildResult<Person> {
        let name = self.name.ok_or(BuildError::MissingName)?;
        let phone = self.phone.unwrap_or_else(|| DEFAULT_PHONE.clone());
        let email = self.email.unwrap_or_else(|| DEFAULT_EMAIL.clone());
        let address = self.address.unwrap_or_else(|| DEFAULT_ADDRESS.clone());
        let remark = self.remark.unwrap_or_default();
        let tags = self.tags.unwrap_or_default();

        let person = Person::from_parts(name, phone, email, address, remark, tags, self.role);
        debug!(name = %person.name(), role = %person.role(), "built person record");
        Ok(person)
    }
}
