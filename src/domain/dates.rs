//! Calendar date helpers shared by the birthday field and the scheduler.
//!
//! All dates are naive calendar dates in the `DD.MM.YYYY` notation.

use chrono::{Datelike, NaiveDate, Weekday};

/// `chrono` format string for the `DD.MM.YYYY` notation.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// Parse a `DD.MM.YYYY` string.
///
/// Surrounding whitespace is not accepted; callers trim first.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

/// Format a date as `DD.MM.YYYY`.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Days to add so that a weekend date lands on the following Monday.
pub fn days_until_weekday(date: NaiveDate) -> u64 {
    match date.weekday() {
        Weekday::Sat => 2,
        Weekday::Sun => 1,
        _ => 0,
    }
}
