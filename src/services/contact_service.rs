//! Contact service layer.
//!
//! Command-level operations over an owned address book: each call validates
//! its raw input, mutates or queries the book, and returns the message to
//! show the user.

use crate::book::AddressBook;
use crate::clock::{Clock, SystemClock};
use crate::config::DEFAULT_BIRTHDAY_WINDOW_DAYS;
use crate::display::{plural, AlignedList};
use crate::domain::dates::format_date;
use crate::domain::Name;
use crate::error::BookResult;
use crate::models::Record;

/// Contact service trait for the user-facing operations.
pub trait ContactService {
    /// Add a phone to an existing contact, or create the contact with it.
    fn add_contact(&mut self, username: &str, phone: &str) -> BookResult<String>;

    /// Replace one of a contact's phones.
    fn change_contact(&mut self, username: &str, old_phone: &str, new_phone: &str)
        -> BookResult<String>;

    /// Contacts matching a name or phone fragment.
    fn show_phone(&self, term: &str) -> BookResult<String>;

    /// The full contact listing.
    fn show_all(&self) -> BookResult<String>;

    /// Remove a contact.
    fn delete_contact(&mut self, username: &str) -> BookResult<String>;

    /// Add or update a contact's birthday.
    fn add_birthday(&mut self, username: &str, date: &str) -> BookResult<String>;

    /// A contact's birthday, if set.
    fn show_birthday(&self, username: &str) -> BookResult<String>;

    /// Birthdays to congratulate within the configured window.
    fn upcoming_birthdays(&self) -> BookResult<String>;
}

/// Default implementation of ContactService.
pub struct ContactServiceImpl {
    book: AddressBook,
    clock: Box<dyn Clock>,
    birthday_window_days: u32,
}

impl ContactServiceImpl {
    /// Create a service over an empty book using the system clock.
    pub fn new() -> Self {
        Self::with_clock(AddressBook::new(), Box::new(SystemClock))
    }

    /// Create a service over `book` with an explicit clock.
    pub fn with_clock(book: AddressBook, clock: Box<dyn Clock>) -> Self {
        Self {
            book,
            clock,
            birthday_window_days: DEFAULT_BIRTHDAY_WINDOW_DAYS,
        }
    }

    /// Set the window of the upcoming-birthdays query.
    pub fn with_birthday_window(mut self, days: u32) -> Self {
        self.birthday_window_days = days;
        self
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn birthday_window_days(&self) -> u32 {
        self.birthday_window_days
    }
}

impl Default for ContactServiceImpl {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactService for ContactServiceImpl {
    fn add_contact(&mut self, username: &str, phone: &str) -> BookResult<String> {
        let name = Name::new(username)?;

        if self.book.contains(name.as_str()) {
            let record = self.book.find_mut(name.as_str())?;
            let message = record.add_phone(phone)?;
            tracing::debug!("Phone added to contact '{}'", name);
            return Ok(message.to_string());
        }

        // Fully built before insertion so a failure leaves the book unchanged
        let mut record = Record::with_name(name);
        record.add_phone(phone)?;
        Ok(self.book.add(record)?.to_string())
    }

    fn change_contact(
        &mut self,
        username: &str,
        old_phone: &str,
        new_phone: &str,
    ) -> BookResult<String> {
        let message = self
            .book
            .find_mut(username)?
            .edit_phone(old_phone, new_phone)?;
        tracing::debug!("Phone of contact '{}' updated", username);
        Ok(message.to_string())
    }

    fn show_phone(&self, term: &str) -> BookResult<String> {
        Ok(self.book.search(term)?.to_string())
    }

    fn show_all(&self) -> BookResult<String> {
        self.book.render()
    }

    fn delete_contact(&mut self, username: &str) -> BookResult<String> {
        Ok(self.book.delete(username)?.to_string())
    }

    fn add_birthday(&mut self, username: &str, date: &str) -> BookResult<String> {
        let today = self.clock.today();
        let change = self.book.find_mut(username)?.set_birthday_on(date, today)?;
        tracing::debug!("Birthday of contact '{}': {:?}", username, change);
        Ok(change.message().to_string())
    }

    fn show_birthday(&self, username: &str) -> BookResult<String> {
        let record = self.book.find(username)?;
        Ok(match record.birthday() {
            Some(birthday) => format!("Birthday of '{}': {}.", record.name(), birthday),
            None => format!("Contact '{}' has no birthday set.", record.name()),
        })
    }

    fn upcoming_birthdays(&self) -> BookResult<String> {
        let days = self.birthday_window_days;
        let period = format!("the next {} day{}", days, plural(days as usize, "s"));

        let upcoming = self.book.upcoming_birthdays(self.clock.today(), days);
        if upcoming.is_empty() {
            return Ok(format!("No upcoming birthdays in {}.", period));
        }

        let list: AlignedList = upcoming
            .iter()
            .map(|entry| (entry.name.as_str(), format_date(entry.congratulation_date)))
            .collect();
        Ok(list.render(&format!("Upcoming birthdays in {}", period)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::error::BookError;
    use chrono::NaiveDate;

    fn service() -> ContactServiceImpl {
        let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        ContactServiceImpl::with_clock(AddressBook::new(), Box::new(FixedClock(today)))
    }

    #[test]
    fn test_add_contact_creates_then_appends() {
        let mut service = service();
        assert_eq!(
            service.add_contact("Alice", "1234567890").unwrap(),
            "Contact added."
        );
        assert_eq!(
            service.add_contact("Alice", "0987654321").unwrap(),
            "Phone added."
        );
        assert_eq!(service.book().find("Alice").unwrap().phones().len(), 2);
    }

    #[test]
    fn test_add_contact_with_bad_phone_leaves_book_empty() {
        let mut service = service();
        assert!(matches!(
            service.add_contact("Alice", "123"),
            Err(BookError::Validation(_))
        ));
        assert!(service.book().is_empty());
    }

    #[test]
    fn test_add_contact_case_collision() {
        let mut service = service();
        service.add_contact("Alex", "1234567890").unwrap();

        let err = service.add_contact("alex", "0987654321").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Contact with username 'alex' already exists, but under a different name: 'Alex'."
        );
        assert_eq!(service.book().len(), 1);
    }

    #[test]
    fn test_change_contact() {
        let mut service = service();
        service.add_contact("Alice", "1234567890").unwrap();
        assert_eq!(
            service
                .change_contact("Alice", "1234567890", "1111111111")
                .unwrap(),
            "Phone updated."
        );
        assert!(service
            .book()
            .find("Alice")
            .unwrap()
            .find_phone("1111111111")
            .is_some());
    }

    #[test]
    fn test_birthday_roundtrip() {
        let mut service = service();
        service.add_contact("Alice", "1234567890").unwrap();

        assert_eq!(
            service.show_birthday("Alice").unwrap(),
            "Contact 'Alice' has no birthday set."
        );
        assert_eq!(
            service.add_birthday("Alice", "04.01.1990").unwrap(),
            "Birthday added."
        );
        assert_eq!(
            service.show_birthday("Alice").unwrap(),
            "Birthday of 'Alice': 04.01.1990."
        );
    }

    #[test]
    fn test_add_birthday_uses_clock() {
        let mut service = service();
        service.add_contact("Alice", "1234567890").unwrap();
        assert!(matches!(
            service.add_birthday("Alice", "02.01.2025"),
            Err(BookError::Validation(_))
        ));
    }

    #[test]
    fn test_upcoming_birthdays_output() {
        let mut service = service();
        assert_eq!(
            service.upcoming_birthdays().unwrap(),
            "No upcoming birthdays in the next 7 days."
        );

        service.add_contact("Alice", "1234567890").unwrap();
        service.add_contact("Bob", "0987654321").unwrap();
        service.add_birthday("Alice", "04.01.1990").unwrap();
        service.add_birthday("Bob", "01.01.1985").unwrap();

        assert_eq!(
            service.upcoming_birthdays().unwrap(),
            "Upcoming birthdays in the next 7 days:\n  Bob   : 01.01.2025\n  Alice : 06.01.2025"
        );

        let service = service.with_birthday_window(1);
        assert_eq!(
            service.upcoming_birthdays().unwrap(),
            "Upcoming birthdays in the next 1 day:\n  Bob : 01.01.2025"
        );
    }

    #[test]
    fn test_delete_contact() {
        let mut service = service();
        service.add_contact("Alice", "1234567890").unwrap();
        assert_eq!(service.delete_contact("Alice").unwrap(), "Contact deleted.");
        assert_eq!(
            service.show_all().unwrap_err(),
            BookError::DirectoryEmpty
        );
    }
}
