//! Identity resolution: deciding whether two records denote the same
//! real-world person despite differing field values.
//!
//! The policy: names must agree after normalization, and the records must
//! either share at least one *real* contact channel (phone or email whose
//! value differs from the sentinel default) or both carry no real channel
//! at all. Agreement on one channel is sufficient even when the other
//! channel differs on both sides.

use crate::domain::{Address, Email, Phone};
use crate::models::Person;
use once_cell::sync::Lazy;

/// Sentinel phone meaning "no real phone supplied".
pub static DEFAULT_PHONE: Lazy<Phone> =
    Lazy::new(|| Phone::new("000").expect("default phone is a valid phone"));

/// Sentinel email meaning "no real email supplied".
pub static DEFAULT_EMAIL: Lazy<Email> =
    Lazy::new(|| Email::new("default@email").expect("default email is a valid email"));

/// Sentinel address meaning "no real address supplied".
pub static DEFAULT_ADDRESS: Lazy<Address> =
    Lazy::new(|| Address::new("Default Address").expect("default address is a valid address"));

/// Returns true if the two records are considered the same person.
///
/// Pure, symmetric and reflexive. Comparison runs over normalized values
/// (names and emails trimmed and lowercased, phones reduced to digits), so
/// `"Bob Choo "` and `"bob choo"` gate through as the same name even
/// though the raw values are distinct under strong equality.
///
/// A record with a real phone only and a record with a real email only
/// share no channel and are *not* the same person, whatever the values.
pub fn is_same_person(a: &Person, b: &Person) -> bool {
    if std::ptr::eq(a, b) {
        return true;
    }

    // name is a mandatory gate; nothing else can establish sameness
    if a.name().normalize_for_identity() != b.name().normalize_for_identity() {
        return false;
    }

    let a_phone = a.phone().normalize_for_identity();
    let b_phone = b.phone().normalize_for_identity();
    let a_email = a.email().normalize_for_identity();
    let b_email = b.email().normalize_for_identity();

    let default_phone = DEFAULT_PHONE.normalize_for_identity();
    let default_email = DEFAULT_EMAIL.normalize_for_identity();

    // classify channels as real or sentinel-default
    let a_has_real_phone = a_phone != default_phone;
    let b_has_real_phone = b_phone != default_phone;
    let a_has_real_email = a_email != default_email;
    let b_has_real_email = b_email != default_email;

    // compare only when both sides carry real data
    let same_phone = a_has_real_phone && b_has_real_phone && a_phone == b_phone;
    let same_email = a_has_real_email && b_has_real_email && a_email == b_email;

    let both_all_default =
        !a_has_real_phone && !b_has_real_phone && !a_has_real_email && !b_has_real_email;

    same_phone || same_email || both_all_default
}
