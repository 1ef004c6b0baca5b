//! Integration tests for contact records and their value objects.

use contact_book::domain::{validate_birthday_on, validate_phone, validate_username};
use contact_book::{BirthdayChange, BookError, FieldKind, Record, ValidationError};

mod common;
use common::fixtures::*;
use common::*;

/// Test that adding the same phone twice fails and keeps the count.
#[test]
fn test_duplicate_phone_rejected() {
    let mut record = sample_record("Alice", &["1234567890"]);

    let err = record.add_phone("1234567890").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Contact 'Alice' already has phone '1234567890'."
    );
    assert_eq!(record.phones().len(), 1);
}

/// Test that validating then formatting a phone reproduces the trimmed input.
#[test]
fn test_phone_keeps_trimmed_input() {
    for raw in [
        "1234567890",
        "  +1234567890 ",
        "(050) 123-45-67",
        "050 123 45 67\t",
    ] {
        let phone = validate_phone(raw).unwrap();
        assert_eq!(phone.to_string(), raw.trim());
    }
}

/// Test the validation messages surfaced to the user.
#[test]
fn test_validation_messages() {
    assert_eq!(
        validate_username(" ").unwrap_err().to_string(),
        "Username cannot be empty or just whitespace."
    );
    assert_eq!(
        validate_username("J").unwrap_err().to_string(),
        "Username 'J' is too short and should have at least 2 symbols."
    );
    assert_eq!(
        validate_phone("12-34").unwrap_err().to_string(),
        "Invalid phone number '12-34'. Expected 10 digits, optionally starting with '+'."
    );
    assert_eq!(
        validate_birthday_on("31.02.2000", reference_today())
            .unwrap_err()
            .to_string(),
        "Invalid provided date format '31.02.2000'. Use DD.MM.YYYY format."
    );
    assert_eq!(
        validate_birthday_on("02.01.2025", reference_today())
            .unwrap_err()
            .to_string(),
        "Given birthday date '02.01.2025' can't be in the future."
    );
}

/// Test that a long name is stored in full but shortened in the error.
#[test]
fn test_long_name_shortened_in_message_only() {
    let fifty = "N".repeat(50);
    assert_eq!(validate_username(&fifty).unwrap().as_str(), fifty);

    let err = validate_username(&"N".repeat(51)).unwrap_err();
    assert_eq!(err, ValidationError::TooLong(format!("{}...", "N".repeat(12))));
}

/// Test the phone editing rules.
///
/// This test validates:
/// - the edited phone keeps its position
/// - an invalid new value leaves the record untouched
/// - a missing old value is reported
#[test]
fn test_edit_phone_rules() {
    let mut record = sample_record("Alice", &["1111111111", "2222222222"]);

    record.edit_phone("1111111111", "3333333333").unwrap();
    assert_eq!(record.phones_line(), "3333333333; 2222222222");

    assert!(matches!(
        record.edit_phone("3333333333", "bad"),
        Err(BookError::Validation(_))
    ));
    assert_eq!(record.phones_line(), "3333333333; 2222222222");

    assert_eq!(
        record.edit_phone("1111111111", "4444444444").unwrap_err(),
        BookError::PhoneNotFound("1111111111".to_string())
    );
}

/// Test birthday set, update and duplicate detection.
#[test]
fn test_birthday_lifecycle() {
    let mut record = sample_record("Alice", &["1234567890"]);
    let today = reference_today();

    assert_eq!(
        record.set_birthday_on("29.02.2000", today).unwrap(),
        BirthdayChange::Added
    );
    assert!(matches!(
        record.set_birthday_on("29.02.2000", today),
        Err(BookError::DuplicateBirthday { .. })
    ));
    assert_eq!(
        record.set_birthday_on("01.03.2000", today).unwrap(),
        BirthdayChange::Updated
    );
    assert_eq!(record.birthday().unwrap().date(), ymd(2000, 3, 1));
}

/// Test the uniform field view of a record.
#[test]
fn test_fields_view() {
    let record = sample_record_with_birthday("Alice", "1234567890", "02.03.2000");

    let rendered: Vec<(FieldKind, String)> = record
        .fields()
        .iter()
        .map(|field| (field.kind(), field.to_string()))
        .collect();

    assert_eq!(
        rendered,
        vec![
            (FieldKind::Name, "Alice".to_string()),
            (FieldKind::Phone, "1234567890".to_string()),
            (FieldKind::Birthday, "02.03.2000".to_string()),
        ]
    );
}

/// Test that records serialize with validated field formats.
#[test]
fn test_record_serialization() {
    let record = sample_record_with_birthday("Alice", "+1234567890", "02.03.2000");
    let json = serde_json::to_value(&record).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "name": "Alice",
            "phones": ["+1234567890"],
            "birthday": "02.03.2000"
        })
    );

    let bare = Record::new("Bob").unwrap();
    assert_eq!(
        serde_json::to_value(&bare).unwrap(),
        serde_json::json!({ "name": "Bob", "phones": [] })
    );
}
