//! Uniform view over the fields of a contact record.

use super::birthday::Birthday;
use super::name::Name;
use super::phone::Phone;
use std::fmt;

/// The kind of a contact field, used to label values and errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Name,
    Phone,
    Birthday,
}

impl FieldKind {
    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Phone => "phone",
            Self::Birthday => "birthday",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A borrowed, validated field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field<'a> {
    Name(&'a Name),
    Phone(&'a Phone),
    Birthday(&'a Birthday),
}

impl Field<'_> {
    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Name(_) => FieldKind::Name,
            Self::Phone(_) => FieldKind::Phone,
            Self::Birthday(_) => FieldKind::Birthday,
        }
    }
}

impl fmt::Display for Field<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => write!(f, "{}", name),
            Self::Phone(phone) => write!(f, "{}", phone),
            Self::Birthday(birthday) => write!(f, "{}", birthday),
        }
    }
}
