//! Domain validation errors.

use super::field::FieldKind;
use super::validators::{BIRTHDAY_FORMAT_HINT, NAME_MAX_LENGTH, NAME_MIN_LENGTH, PHONE_FORMAT_HINT};
use std::fmt;

/// Errors that can occur while validating a raw field value.
///
/// Every variant renders a complete message that can be shown to the user as is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The value is empty or whitespace only.
    EmptyField(FieldKind),

    /// The username is shorter than the minimum length.
    TooShort(String),

    /// The username is longer than the maximum length.
    ///
    /// Holds the display form of the username, already truncated.
    TooLong(String),

    /// The value could not be parsed in the expected format.
    InvalidFormat { field: FieldKind, value: String },

    /// The birthday lies after the reference date. Holds the formatted date.
    FutureDate(String),
}

impl ValidationError {
    /// The field the failed value belonged to.
    pub fn field(&self) -> FieldKind {
        match self {
            Self::EmptyField(field) | Self::InvalidFormat { field, .. } => *field,
            Self::TooShort(_) | Self::TooLong(_) => FieldKind::Name,
            Self::FutureDate(_) => FieldKind::Birthday,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyField(FieldKind::Name) => {
                write!(f, "Username cannot be empty or just whitespace.")
            }
            Self::EmptyField(FieldKind::Phone) => {
                write!(f, "Phone cannot be empty or just whitespace.")
            }
            Self::EmptyField(FieldKind::Birthday) => {
                write!(f, "Birthday cannot be empty or just whitespace.")
            }
            Self::TooShort(username) => write!(
                f,
                "Username '{}' is too short and should have at least {} symbols.",
                username, NAME_MIN_LENGTH
            ),
            Self::TooLong(username) => write!(
                f,
                "Username '{}' is too long and should have not more than {} symbols.",
                username, NAME_MAX_LENGTH
            ),
            Self::InvalidFormat {
                field: FieldKind::Birthday,
                value,
            } => write!(
                f,
                "Invalid provided date format '{}'. Use {} format.",
                value, BIRTHDAY_FORMAT_HINT
            ),
            Self::InvalidFormat {
                field: FieldKind::Phone,
                value,
            } => write!(
                f,
                "Invalid phone number '{}'. Expected {}.",
                value, PHONE_FORMAT_HINT
            ),
            Self::InvalidFormat {
                field: FieldKind::Name,
                value,
            } => write!(f, "Invalid username '{}'.", value),
            Self::FutureDate(date) => {
                write!(f, "Given birthday date '{}' can't be in the future.", date)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_field_messages() {
        assert_eq!(
            ValidationError::EmptyField(FieldKind::Name).to_string(),
            "Username cannot be empty or just whitespace."
        );
        assert_eq!(
            ValidationError::EmptyField(FieldKind::Phone).to_string(),
            "Phone cannot be empty or just whitespace."
        );
    }

    #[test]
    fn test_format_messages() {
        let err = ValidationError::InvalidFormat {
            field: FieldKind::Birthday,
            value: "2000-03-02".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid provided date format '2000-03-02'. Use DD.MM.YYYY format."
        );

        let err = ValidationError::InvalidFormat {
            field: FieldKind::Phone,
            value: "12345".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid phone number '12345'. Expected 10 digits, optionally starting with '+'."
        );
    }

    #[test]
    fn test_field_of_error() {
        assert_eq!(ValidationError::TooShort("A".into()).field(), FieldKind::Name);
        assert_eq!(
            ValidationError::FutureDate("01.01.2200".into()).field(),
            FieldKind::Birthday
        );
    }
}
