//! Name value object.

use super::errors::ValidationError;
use super::validators::check_username;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated contact name.
///
/// Names are trimmed and between 2 and 50 characters long. A name never
/// changes once the record owning it is created.
///
/// # Example
///
/// ```
/// use contact_book::domain::Name;
///
/// let name = Name::new("  Alice ").unwrap();
/// assert_eq!(name.as_str(), "Alice");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Name(String);

impl Name {
    /// Create a new Name, trimming and validating the input.
    ///
    /// # Errors
    ///
    /// Returns `EmptyField`, `TooShort` or `TooLong`.
    pub fn new(name: impl AsRef<str>) -> Result<Self, ValidationError> {
        check_username(name.as_ref()).map(Self)
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Serialize for Name {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Name {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Name::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
