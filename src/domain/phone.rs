//! Phone value object.

use super::errors::ValidationError;
use super::validators::check_phone;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A type-safe wrapper for phone numbers.
///
/// A phone is valid when it has exactly 10 digits after every non-digit
/// character is stripped; a leading `+` or grouping characters are allowed and
/// kept as typed. Only surrounding whitespace is removed.
///
/// # Example
///
/// ```
/// use contact_book::domain::Phone;
///
/// let phone = Phone::new(" +(050) 123-45-67 ").unwrap();
/// assert_eq!(phone.as_str(), "+(050) 123-45-67");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    /// Create a new Phone, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `EmptyField` for blank input and `InvalidFormat` when the digit
    /// count is not exactly 10.
    pub fn new(phone: impl AsRef<str>) -> Result<Self, ValidationError> {
        check_phone(phone.as_ref()).map(Self)
    }

    /// Replace the value with a newly validated one.
    ///
    /// On error the current value is kept.
    pub fn replace(&mut self, phone: impl AsRef<str>) -> Result<(), ValidationError> {
        self.0 = check_phone(phone.as_ref())?;
        Ok(())
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Serialize for Phone {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Phone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Phone::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
