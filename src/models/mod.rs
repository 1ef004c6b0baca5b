//! Data models for the contact book.
//!
//! A [`Record`] aggregates the validated fields of one contact.

pub mod record;

pub use record::{BirthdayChange, Record};
