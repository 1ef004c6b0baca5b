//! Shared setup and assertions for integration tests.

#![allow(dead_code)]

use chrono::NaiveDate;
use contact_book::{AddressBook, ContactServiceImpl, FixedClock, Session};

pub mod fixtures;

/// The reference date used across tests: Wednesday, 1 January 2025.
pub fn reference_today() -> NaiveDate {
    ymd(2025, 1, 1)
}

/// Shorthand for a calendar date.
///
/// # Panics
/// Panics if the date does not exist.
pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}

/// A contact service over an empty book with the clock fixed at `today`.
pub fn service_on(today: NaiveDate) -> ContactServiceImpl {
    ContactServiceImpl::with_clock(AddressBook::new(), Box::new(FixedClock(today)))
}

/// A session over an empty book with the clock fixed at the reference date.
pub fn test_session() -> Session {
    Session::new(service_on(reference_today()))
}

/// Execute each line in order and return the message of the last reply.
pub fn run_lines(session: &mut Session, lines: &[&str]) -> String {
    lines
        .iter()
        .map(|line| session.execute(line).message().to_string())
        .last()
        .unwrap_or_default()
}

/// Names of the records in the order given.
pub fn names<'a>(records: impl IntoIterator<Item = &'a contact_book::Record>) -> Vec<String> {
    records
        .into_iter()
        .map(|record| record.name().to_string())
        .collect()
}
