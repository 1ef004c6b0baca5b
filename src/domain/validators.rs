//! Field validators.
//!
//! The public `validate_*` functions turn raw user input into value objects.
//! The value objects themselves funnel construction and replacement through
//! the crate-private `check_*` rules below, so there is exactly one place
//! where each rule lives.

use super::birthday::Birthday;
use super::dates::{format_date, parse_date};
use super::errors::ValidationError;
use super::field::FieldKind;
use super::name::Name;
use super::phone::Phone;
use crate::display::text::truncate;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

pub const NAME_MIN_LENGTH: usize = 2;
pub const NAME_MAX_LENGTH: usize = 50;

/// Longest username shown inside an error message, suffix included.
pub const MAX_DISPLAY_NAME_LENGTH: usize = 15;

pub const PHONE_DIGITS: usize = 10;
pub const PHONE_FORMAT_HINT: &str = "10 digits, optionally starting with '+'";
pub const BIRTHDAY_FORMAT_HINT: &str = "DD.MM.YYYY";

static NON_DIGIT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\D").expect("Failed to compile non-digit regex"));

/// Validate a raw username into a [`Name`].
pub fn validate_username(raw: &str) -> Result<Name, ValidationError> {
    Name::new(raw)
}

/// Validate a raw phone number into a [`Phone`].
pub fn validate_phone(raw: &str) -> Result<Phone, ValidationError> {
    Phone::new(raw)
}

/// Validate a raw `DD.MM.YYYY` string into a [`Birthday`] relative to the
/// local current date.
pub fn validate_birthday(raw: &str) -> Result<Birthday, ValidationError> {
    Birthday::new(raw)
}

/// Validate a raw `DD.MM.YYYY` string into a [`Birthday`] relative to `today`.
pub fn validate_birthday_on(raw: &str, today: NaiveDate) -> Result<Birthday, ValidationError> {
    Birthday::new_on(raw, today)
}

/// Username rule: trimmed, between 2 and 50 characters.
///
/// Returns the trimmed username.
pub(crate) fn check_username(raw: &str) -> Result<String, ValidationError> {
    let username = raw.trim();

    if username.is_empty() {
        return Err(ValidationError::EmptyField(FieldKind::Name));
    }

    let length = username.chars().count();

    if length < NAME_MIN_LENGTH {
        return Err(ValidationError::TooShort(username.to_string()));
    }

    if length > NAME_MAX_LENGTH {
        // Only the message is shortened
        let shown = truncate(username, MAX_DISPLAY_NAME_LENGTH, "...", true);
        return Err(ValidationError::TooLong(shown));
    }

    Ok(username.to_string())
}

/// Phone rule: trimmed, exactly 10 digits once every non-digit is removed.
///
/// Returns the trimmed phone without normalizing its grouping.
pub(crate) fn check_phone(raw: &str) -> Result<String, ValidationError> {
    let phone = raw.trim();

    if phone.is_empty() {
        return Err(ValidationError::EmptyField(FieldKind::Phone));
    }

    let digits = NON_DIGIT_RE.replace_all(phone, "");
    if digits.chars().count() != PHONE_DIGITS {
        return Err(ValidationError::InvalidFormat {
            field: FieldKind::Phone,
            value: phone.to_string(),
        });
    }

    Ok(phone.to_string())
}

/// Birthday rule: parses as `DD.MM.YYYY` and is not after `today`.
pub(crate) fn check_birthday(raw: &str, today: NaiveDate) -> Result<NaiveDate, ValidationError> {
    let value = raw.trim();

    if value.is_empty() {
        return Err(ValidationError::EmptyField(FieldKind::Birthday));
    }

    let date = parse_date(value).ok_or_else(|| ValidationError::InvalidFormat {
        field: FieldKind::Birthday,
        value: value.to_string(),
    })?;

    check_birthday_date(date, today)
}

/// Past-date constraint on an already parsed date.
pub(crate) fn check_birthday_date(
    date: NaiveDate,
    today: NaiveDate,
) -> Result<NaiveDate, ValidationError> {
    if date > today {
        return Err(ValidationError::FutureDate(format_date(date)));
    }
    Ok(date)
}
