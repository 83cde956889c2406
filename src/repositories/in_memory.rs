//! Vec-backed person store.

use crate::error::{StoreError, StoreResult};
use crate::matching::is_same_person;
use crate::models::Person;
use crate::repositories::PersonStore;
use tracing::debug;

/// An in-memory [`PersonStore`] holding records in insertion order.
///
/// Enforces the uniqueness invariant of the backing collection: no two
/// entries may resolve to the same person. Mutations are copy-on-write at
/// the record level — the store only ever swaps whole immutable `Person`
/// values.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPersonStore {
    persons: Vec<Person>,
}

impl InMemoryPersonStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records in the store.
    pub fn len(&self) -> usize {
        self.persons.len()
    }

    /// Returns true if the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }

    fn position_of(&self, target: &Person) -> Option<usize> {
        self.persons.iter().position(|p| p == target)
    }
}

impl PersonStore for InMemoryPersonStore {
    fn persons(&self) -> &[Person] {
        &self.persons
    }

    fn add(&mut self, person: Person) -> StoreResult<()> {
        if self.contains_same_person(&person) {
            return Err(StoreError::DuplicatePerson);
        }
        debug!(name = %person.name(), "person added to store");
        self.persons.push(person);
        Ok(())
    }

    fn replace(&mut self, target: &Person, replacement: Person) -> StoreResult<()> {
        let index = self.position_of(target).ok_or(StoreError::PersonNotFound)?;

        let collides = self
            .persons
            .iter()
            .enumerate()
            .any(|(i, p)| i != index && is_same_person(p, &replacement));
        if collides {
            return Err(StoreError::DuplicatePerson);
        }

        debug!(name = %replacement.name(), "person replaced in store");
        self.persons[index] = replacement;
        Ok(())
    }

    fn remove(&mut self, target: &Person) -> StoreResult<()> {
        let index = self.position_of(target).ok_or(StoreError::PersonNotFound)?;
        let removed = self.persons.remove(index);
        debug!(name = %removed.name(), "person removed from store");
        Ok(())
    }
}
