//! Integration tests for the remark edit flow: pick a person from a
//! displayed list, rebuild with a new remark, swap into the store.

mod common;

use common::{name_only_student, remark, sample_student};
use tutormatch_core::{set_remark, EditError, InMemoryPersonStore, PersonStore, RemarkOutcome};

#[test]
fn add_remark_to_first_person() {
    let people = vec![
        sample_student("Alice Pauline", "85355255", "alice@example.com"),
        name_only_student("Bob Choo"),
    ];

    let edit = set_remark(&people, 1, remark("Likes to swim.")).unwrap();

    assert_eq!(edit.outcome, RemarkOutcome::Added);
    assert_eq!(edit.person.remark().as_str(), "Likes to swim.");

    // identity fields untouched
    assert_eq!(edit.person.name(), people[0].name());
    assert_eq!(edit.person.phone(), people[0].phone());
    assert_eq!(edit.person.email(), people[0].email());
    assert_eq!(edit.person.address(), people[0].address());
    assert_eq!(edit.person.tags(), people[0].tags());
}

#[test]
fn empty_remark_is_classified_as_removed() {
    let people = vec![sample_student("Alice Pauline", "85355255", "alice@example.com")];

    let edit = set_remark(&people, 1, remark("")).unwrap();
    assert_eq!(edit.outcome, RemarkOutcome::Removed);
    assert!(edit.person.remark().is_empty());
}

#[test]
fn out_of_range_indices_fail() {
    let people = vec![
        sample_student("Alice Pauline", "85355255", "alice@example.com"),
        name_only_student("Bob Choo"),
    ];

    assert!(matches!(
        set_remark(&people, 5, remark("x")),
        Err(EditError::IndexOutOfRange { index: 5, len: 2 })
    ));
    assert!(matches!(
        set_remark(&people, 0, remark("x")),
        Err(EditError::IndexOutOfRange { index: 0, len: 2 })
    ));
}

#[test]
fn error_message_names_index_and_length() {
    let people = vec![name_only_student("Bob Choo")];
    let err = set_remark(&people, 3, remark("x")).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Index 3 is out of range for a list of 1 person(s)"
    );
}

#[test]
fn edit_then_replace_in_store() {
    let mut store = InMemoryPersonStore::new();
    let alice = sample_student("Alice Pauline", "85355255", "alice@example.com");
    let bob = name_only_student("Bob Choo");
    store.add(alice.clone()).unwrap();
    store.add(bob).unwrap();

    // the displayed list is the store's current view
    let displayed: Vec<_> = store.persons().to_vec();
    let edit = set_remark(&displayed, 1, remark("Prefers Tuesdays")).unwrap();

    store.replace(&alice, edit.person.clone()).unwrap();

    assert_eq!(store.persons()[0].remark().as_str(), "Prefers Tuesdays");
    assert_eq!(store.persons()[0].name(), alice.name());
    // the replacement still resolves to the same person as before
    assert!(store.persons()[0].is_same_person(&alice));
}

#[test]
fn remark_edit_does_not_change_identity() {
    let people = vec![sample_student("Alice Pauline", "85355255", "alice@example.com")];
    let edit = set_remark(&people, 1, remark("new remark")).unwrap();
    assert!(edit.person.is_same_person(&people[0]));
}

#[test]
fn success_messages_render_the_person() {
    let people = vec![sample_student("Alice Pauline", "85355255", "alice@example.com")];

    let added = set_remark(&people, 1, remark("Likes to swim.")).unwrap();
    assert!(added.message().contains("Added remark to person:"));
    assert!(added.message().contains("name=Alice Pauline"));
    assert!(added.message().contains("remark=Likes to swim."));

    let removed = set_remark(&people, 1, remark("")).unwrap();
    assert!(removed.message().contains("Removed remark from person:"));
}
