//! The address book and the upcoming-birthday query.

pub mod address_book;
pub mod upcoming;

pub use address_book::{AddressBook, SearchOutcome};
pub use upcoming::{upcoming_birthdays, UpcomingBirthday};
