//! Test fixtures and sample data.
//!
//! This module provides reusable records and address books for tests.

use super::reference_today;
use contact_book::{AddressBook, Record};

/// Create a record with the given phones.
///
/// # Panics
/// Panics if the name or any phone is invalid.
pub fn sample_record(name: &str, phones: &[&str]) -> Record {
    let mut record = Record::new(name).expect("valid name");
    for phone in phones {
        record.add_phone(phone).expect("valid phone");
    }
    record
}

/// Create a record with one phone and a birthday, validated against the
/// reference date.
pub fn sample_record_with_birthday(name: &str, phone: &str, birthday: &str) -> Record {
    let mut record = sample_record(name, &[phone]);
    record
        .set_birthday_on(birthday, reference_today())
        .expect("valid birthday");
    record
}

/// Build a book from records, in insertion order.
pub fn sample_book(records: Vec<Record>) -> AddressBook {
    let mut book = AddressBook::new();
    for record in records {
        book.add(record).expect("unique contact name");
    }
    book
}

/// A small book with three contacts and mixed phone formats.
pub fn populated_book() -> AddressBook {
    sample_book(vec![
        sample_record("Alice", &["1234567890"]),
        sample_record("bob", &["+0987654321", "0501112233"]),
        sample_record("Charlie", &["(050) 999-88-77"]),
    ])
}
