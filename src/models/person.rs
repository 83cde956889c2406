//! Person record: the immutable aggregate at the heart of the store.

use crate::domain::{Address, Email, Name, Phone, Remark, Tag};
use crate::matching;
use crate::models::PersonBuilder;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// The role a person plays in the matching tool.
///
/// A closed discriminant used for display prefixing; Students and
/// Volunteers carry identical fields and identical invariants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Student,
    Volunteer,
}

impl Role {
    /// Get the role label as a string slice.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "Student",
            Role::Volunteer => "Volunteer",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A person in the record store.
///
/// Guarantees: all fields are present and validated, the aggregate is
/// immutable. Construction happens only through [`PersonBuilder::build`];
/// an edit is realized by seeding a new builder from an existing record
/// ([`Person::to_builder`]) and building a replacement.
///
/// Equality (`==`) is the strong, field-for-field notion including role
/// and remark. The weaker identity-resolution notion lives in
/// [`crate::matching::is_same_person`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Person {
    name: Name,
    phone: Phone,
    email: Email,
    address: Address,
    remark: Remark,
    tags: BTreeSet<Tag>,
    role: Role,
}

impl Person {
    /// Assemble a person from already-validated parts. Only the builder
    /// calls this; external construction goes through `PersonBuilder`.
    pub(crate) fn from_parts(
        name: Name,
        phone: Phone,
        email: Email,
        address: Address,
        remark: Remark,
        tags: BTreeSet<Tag>,
        role: Role,
    ) -> Self {
        Self {
            name,
            phone,
            email,
            address,
            remark,
            tags,
            role,
        }
    }

    /// Returns the name.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Returns the phone number.
    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    /// Returns the email.
    pub fn email(&self) -> &Email {
        &self.email
    }

    /// Returns the address.
    pub fn address(&self) -> &Address {
        &self.address
    }

    /// Returns the remark.
    pub fn remark(&self) -> &Remark {
        &self.remark
    }

    /// Returns a read-only view of the tag set. Callers wanting a
    /// different tag set must build a new person.
    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    /// Returns the role.
    pub fn role(&self) -> Role {
        self.role
    }

    /// Convert the person back to builder form, seeded with every field,
    /// so that it can be modified into a replacement record.
    pub fn to_builder(&self) -> PersonBuilder {
        PersonBuilder::from_person(self)
    }

    /// Returns true if this record and `other` resolve to the same real
    /// person. See [`crate::matching::is_same_person`] for the policy.
    pub fn is_same_person(&self, other: &Person) -> bool {
        matching::is_same_person(self, other)
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tags: Vec<&str> = self.tags.iter().map(Tag::as_str).collect();
        write!(
            f,
            "[{}] name={}, phone={}, email={}, address={}, remark={}, tags=[{}]",
            self.role,
            self.name,
            self.phone,
            self.email,
            self.address,
            self.remark,
            tags.join(", ")
        )
    }
}
