//! Birthday value object.

use super::dates::format_date;
use super::errors::ValidationError;
use super::validators::{check_birthday, check_birthday_date};
use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated birth date.
///
/// The date is checked against "today" when the value is created; it is never
/// re-checked afterwards. Equality compares the calendar date only.
///
/// # Example
///
/// ```
/// use contact_book::domain::Birthday;
///
/// let birthday = Birthday::new("02.03.2000").unwrap();
/// assert_eq!(birthday.to_string(), "02.03.2000");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a `DD.MM.YYYY` birthday that must not be after the local current date.
    pub fn new(value: impl AsRef<str>) -> Result<Self, ValidationError> {
        Self::new_on(value, Local::now().date_naive())
    }

    /// Parse a `DD.MM.YYYY` birthday that must not be after `today`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidFormat` when the value does not parse and `FutureDate`
    /// when it lies after `today`.
    pub fn new_on(value: impl AsRef<str>, today: NaiveDate) -> Result<Self, ValidationError> {
        check_birthday(value.as_ref(), today).map(Self)
    }

    /// Wrap an already parsed date, applying the past-date constraint.
    pub fn from_date(date: NaiveDate, today: NaiveDate) -> Result<Self, ValidationError> {
        check_birthday_date(date, today).map(Self)
    }

    /// The underlying calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// This birthday's occurrence in `year`.
    ///
    /// February 29 falls on March 1 in years that are not leap years.
    pub fn occurrence_in(&self, year: i32) -> NaiveDate {
        // Only February 29 can be missing from the target year
        NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
            .unwrap_or(NaiveDate::MAX)
    }
}

impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format_date(self.0))
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_date(self.0))
    }
}
