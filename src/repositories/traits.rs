use crate::error::StoreResult;
use crate::matching::is_same_person;
use crate::models::Person;

/// Storage contract for person records.
///
/// Provides abstraction over the backing collection the surrounding tool
/// maintains, enabling different implementations (in-memory, persisted,
/// mock). Every edit in the system ends with a [`replace`](Self::replace)
/// call swapping the old record for the rebuilt one.
pub trait PersonStore {
    /// The records currently in the store, in insertion order.
    fn persons(&self) -> &[Person];

    /// Add a new record.
    ///
    /// Fails with `StoreError::DuplicatePerson` when the incoming record
    /// resolves to the same person as an existing entry.
    fn add(&mut self, person: Person) -> StoreResult<()>;

    /// Swap `target` (located by strong equality) for `replacement`.
    ///
    /// Fails with `StoreError::PersonNotFound` when `target` is absent,
    /// and with `StoreError::DuplicatePerson` when `replacement` resolves
    /// to the same person as a *different* remaining entry.
    fn replace(&mut self, target: &Person, replacement: Person) -> StoreResult<()>;

    /// Remove `target` (located by strong equality).
    ///
    /// Fails with `StoreError::PersonNotFound` when `target` is absent.
    fn remove(&mut self, target: &Person) -> StoreResult<()>;

    /// Returns true if some entry resolves to the same person as the
    /// given record.
    fn contains_same_person(&self, person: &Person) -> bool {
        self.persons().iter().any(|p| is_same_person(p, person))
    }
}
