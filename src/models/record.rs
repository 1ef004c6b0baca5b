//! Contact record: one name, its phones and an optional birthday.

use crate::domain::{Birthday, Field, Name, Phone, ValidationError};
use crate::error::{BookError, BookResult};
use chrono::{Local, NaiveDate};
use serde::Serialize;
use std::fmt;

pub const MSG_PHONE_ADDED: &str = "Phone added.";
pub const MSG_PHONE_DELETED: &str = "Phone deleted.";
pub const MSG_PHONE_UPDATED: &str = "Phone updated.";
pub const MSG_BIRTHDAY_ADDED: &str = "Birthday added.";
pub const MSG_BIRTHDAY_UPDATED: &str = "Birthday updated.";

/// Separator between phones in one-line renderings.
pub const PHONE_SEPARATOR: &str = "; ";

/// Outcome of [`Record::set_birthday`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BirthdayChange {
    Added,
    Updated,
}

impl BirthdayChange {
    pub fn message(&self) -> &'static str {
        match self {
            Self::Added => MSG_BIRTHDAY_ADDED,
            Self::Updated => MSG_BIRTHDAY_UPDATED,
        }
    }
}

/// A single contact.
///
/// The name is fixed at creation. Phones keep their insertion order and are
/// unique by exact value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
    #[serde(skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create an empty record, validating the name.
    pub fn new(name: impl AsRef<str>) -> Result<Self, ValidationError> {
        Name::new(name).map(Self::with_name)
    }

    /// Create an empty record for an already validated name.
    pub fn with_name(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate and append a phone.
    pub fn add_phone(&mut self, phone: &str) -> BookResult<&'static str> {
        let phone = Phone::new(phone)?;

        if self.position_of(phone.as_str()).is_some() {
            return Err(self.duplicate_phone(phone.into_inner()));
        }

        self.phones.push(phone);
        Ok(MSG_PHONE_ADDED)
    }

    /// Remove the phone with exactly this value.
    pub fn remove_phone(&mut self, phone: &str) -> BookResult<&'static str> {
        let index = self
            .position_of(phone)
            .ok_or_else(|| BookError::PhoneNotFound(phone.trim().to_string()))?;

        self.phones.remove(index);
        Ok(MSG_PHONE_DELETED)
    }

    /// Replace `old` with `new`, keeping its position in the list.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> BookResult<&'static str> {
        if self.position_of(new).is_some() {
            return Err(self.duplicate_phone(new.trim().to_string()));
        }

        let index = self
            .position_of(old)
            .ok_or_else(|| BookError::PhoneNotFound(old.trim().to_string()))?;

        self.phones[index].replace(new)?;
        Ok(MSG_PHONE_UPDATED)
    }

    /// Exact-value phone lookup.
    pub fn find_phone(&self, phone: &str) -> Option<&Phone> {
        self.position_of(phone).map(|index| &self.phones[index])
    }

    /// Set the birthday, validated against the local current date.
    pub fn set_birthday(&mut self, date: &str) -> BookResult<BirthdayChange> {
        self.set_birthday_on(date, Local::now().date_naive())
    }

    /// Set the birthday, validated against `today`.
    ///
    /// Setting the date that is already stored fails with `DuplicateBirthday`.
    pub fn set_birthday_on(&mut self, date: &str, today: NaiveDate) -> BookResult<BirthdayChange> {
        let birthday = Birthday::new_on(date, today)?;

        match self.birthday {
            None => {
                self.birthday = Some(birthday);
                Ok(BirthdayChange::Added)
            }
            Some(current) if current == birthday => Err(BookError::DuplicateBirthday {
                contact: self.name.to_string(),
                date: current.to_string(),
            }),
            Some(_) => {
                self.birthday = Some(birthday);
                Ok(BirthdayChange::Updated)
            }
        }
    }

    /// All fields in display order: name, phones, birthday.
    pub fn fields(&self) -> Vec<Field<'_>> {
        std::iter::once(Field::Name(&self.name))
            .chain(self.phones.iter().map(Field::Phone))
            .chain(self.birthday.iter().map(Field::Birthday))
            .collect()
    }

    /// Phones joined for single-line output.
    pub fn phones_line(&self) -> String {
        self.phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join(PHONE_SEPARATOR)
    }

    fn position_of(&self, phone: &str) -> Option<usize> {
        let phone = phone.trim();
        self.phones.iter().position(|p| p.as_str() == phone)
    }

    fn duplicate_phone(&self, phone: String) -> BookError {
        BookError::DuplicatePhone {
            contact: self.name.to_string(),
            phone,
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Contact name: {}", self.name)?;
        if let Some(birthday) = &self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        write!(f, ", phones: {}", self.phones_line())
    }
}
