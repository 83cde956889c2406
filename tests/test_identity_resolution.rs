//! Integration tests for the identity-resolution policy.
//!
//! These pin the matching behavior end to end: the name gate, the
//! real-vs-default channel classification, and the deliberate tradeoffs
//! (permissive OR, disjoint channels) that must survive refactoring.

mod common;

use common::{name_only_student, sample_student, sample_volunteer};
use tutormatch_core::domain::{Email, Name, Phone};
use tutormatch_core::models::{PersonBuilder, Role};
use tutormatch_core::{is_same_person, DEFAULT_EMAIL, DEFAULT_PHONE};

#[test]
fn reflexive_for_every_kind_of_record() {
    let full = sample_student("Alice Pauline", "85355255", "alice@example.com");
    let bare = name_only_student("Bob Choo");
    assert!(is_same_person(&full, &full));
    assert!(is_same_person(&bare, &bare));
}

#[test]
fn symmetric_across_asymmetric_field_fills() {
    let a = sample_student("Amy Bee", "85355255", "amy@example.com");
    let b = name_only_student("Amy Bee");
    assert_eq!(is_same_person(&a, &b), is_same_person(&b, &a));

    let c = PersonBuilder::new(Role::Student)
        .with_name(Some(Name::new("Amy Bee").unwrap()))
        .with_phone(Some(Phone::new("85355255").unwrap()))
        .build()
        .unwrap();
    assert_eq!(is_same_person(&a, &c), is_same_person(&c, &a));
}

#[test]
fn shared_real_phone_with_differing_email_matches() {
    let entered_by_amy = PersonBuilder::new(Role::Student)
        .with_name(Some(Name::new("Amy Bee").unwrap()))
        .with_phone(Some(Phone::new("912").unwrap()))
        .build()
        .unwrap();
    let entered_by_staff = sample_student("Amy Bee", "912", "amy.bee@tuition.org");

    assert!(is_same_person(&entered_by_amy, &entered_by_staff));
}

#[test]
fn both_all_default_matches() {
    let first_entry = name_only_student("Amy Bee");
    let second_entry = name_only_student("Amy Bee");
    assert!(is_same_person(&first_entry, &second_entry));
}

#[test]
fn phone_only_versus_email_only_does_not_match() {
    // no overlapping channel type: deliberately not the same person
    let phone_only = PersonBuilder::new(Role::Student)
        .with_name(Some(Name::new("Amy Bee").unwrap()))
        .with_phone(Some(Phone::new("912").unwrap()))
        .build()
        .unwrap();
    let email_only = PersonBuilder::new(Role::Student)
        .with_name(Some(Name::new("Amy Bee").unwrap()))
        .with_email(Some(Email::new("amy@example.com").unwrap()))
        .build()
        .unwrap();

    assert!(!is_same_person(&phone_only, &email_only));
    assert!(!is_same_person(&email_only, &phone_only));
}

#[test]
fn trailing_space_and_case_are_normalized_away() {
    let trailing = name_only_student("Bob Choo ");
    let trimmed = name_only_student("Bob Choo");
    let shouting = name_only_student("BOB CHOO");

    // trimming, not raw comparison, governs identity
    assert!(is_same_person(&trailing, &trimmed));
    assert!(is_same_person(&shouting, &trimmed));

    // while strong equality still tells the raw values apart
    assert_ne!(trailing, trimmed);
}

#[test]
fn name_gate_blocks_everything_else() {
    let amy = sample_student("Amy Bee", "85355255", "amy@example.com");
    let bob_with_amys_contacts = sample_student("Bob Choo", "85355255", "amy@example.com");
    assert!(!is_same_person(&amy, &bob_with_amys_contacts));
}

#[test]
fn permissive_or_policy_same_phone_different_real_emails() {
    let a = sample_student("Amy Bee", "912", "amy@example.com");
    let b = sample_student("Amy Bee", "912", "bee@other.org");
    assert!(is_same_person(&a, &b));
}

#[test]
fn role_does_not_participate_in_identity() {
    let student = sample_student("Amy Bee", "912", "amy@example.com");
    let volunteer = sample_volunteer("Amy Bee", "912", "amy@example.com");
    assert!(is_same_person(&student, &volunteer));
}

#[test]
fn sentinel_values_are_the_documented_ones() {
    assert_eq!(DEFAULT_PHONE.as_str(), "000");
    assert_eq!(DEFAULT_EMAIL.as_str(), "default@email");
}

#[test]
fn real_phone_versus_all_default_does_not_match() {
    let with_phone = PersonBuilder::new(Role::Student)
        .with_name(Some(Name::new("Amy Bee").unwrap()))
        .with_phone(Some(Phone::new("912").unwrap()))
        .build()
        .unwrap();
    let all_default = name_only_student("Amy Bee");
    assert!(!is_same_person(&with_phone, &all_default));
}
