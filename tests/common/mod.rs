//! Shared fixtures for integration tests.

use tutormatch_core::domain::{Address, Email, Name, Phone, Remark, Tag};
use tutormatch_core::models::{Person, PersonBuilder, Role};

/// A student with typical real contact details.
pub fn sample_student(name: &str, phone: &str, email: &str) -> Person {
    PersonBuilder::new(Role::Student)
        .with_name(Some(Name::new(name).unwrap()))
        .with_phone(Some(Phone::new(phone).unwrap()))
        .with_email(Some(Email::new(email).unwrap()))
        .with_address(Some(
            Address::new("123, Jurong West Ave 6, #08-111").unwrap(),
        ))
        .build()
        .unwrap()
}

/// A volunteer with typical real contact details.
pub fn sample_volunteer(name: &str, phone: &str, email: &str) -> Person {
    PersonBuilder::new(Role::Volunteer)
        .with_name(Some(Name::new(name).unwrap()))
        .with_phone(Some(Phone::new(phone).unwrap()))
        .with_email(Some(Email::new(email).unwrap()))
        .with_address(Some(Address::new("Blk 47 Tampines Street 20, #17-35").unwrap()))
        .build()
        .unwrap()
}

/// A student with only a name: phone, email and address stay at the
/// sentinel defaults.
pub fn name_only_student(name: &str) -> Person {
    PersonBuilder::new(Role::Student)
        .with_name(Some(Name::new(name).unwrap()))
        .build()
        .unwrap()
}

/// Build a remark value.
pub fn remark(text: &str) -> Remark {
    Remark::new(text)
}

/// Build a tag value.
pub fn tag(word: &str) -> Tag {
    Tag::new(word).unwrap()
}
