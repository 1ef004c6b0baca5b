//! Domain value objects and validators.
//!
//! This module contains type-safe wrappers for the fields of a contact:
//! names, phone numbers and birthdays. These value objects validate at
//! construction time, so an invalid value can never be stored in a record.

pub mod birthday;
pub mod dates;
pub mod errors;
pub mod field;
pub mod name;
pub mod phone;
pub mod validators;

pub use birthday::Birthday;
pub use errors::ValidationError;
pub use field::{Field, FieldKind};
pub use name::Name;
pub use phone::Phone;
pub use validators::{validate_birthday, validate_birthday_on, validate_phone, validate_username};
