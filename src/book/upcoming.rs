//! Upcoming birthday calculation.

use crate::domain::dates::{days_until_weekday, format_date};
use crate::models::Record;
use chrono::{Datelike, Days, NaiveDate};
use serde::{Serialize, Serializer};
use std::fmt;

/// A contact to congratulate and the date to do it on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpcomingBirthday {
    pub name: String,
    #[serde(serialize_with = "serialize_date")]
    pub congratulation_date: NaiveDate,
}

fn serialize_date<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_date(*date))
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, format_date(self.congratulation_date))
    }
}

/// Birthdays falling within `[today, today + window_days]`.
///
/// Each birthday is projected onto the current year, or onto the next one when
/// it has already passed. Dates on a weekend are moved to the following Monday
/// after the window test, so a shifted date may lie past the window end.
/// The result is ordered by congratulation date; ties keep the order of
/// `records`.
pub fn upcoming_birthdays<'a, I>(records: I, today: NaiveDate, window_days: u32) -> Vec<UpcomingBirthday>
where
    I: IntoIterator<Item = &'a Record>,
{
    let window_end = today
        .checked_add_days(Days::new(u64::from(window_days)))
        .unwrap_or(NaiveDate::MAX);

    let mut upcoming: Vec<UpcomingBirthday> = records
        .into_iter()
        .filter_map(|record| {
            let birthday = record.birthday()?;

            let mut projected = birthday.occurrence_in(today.year());
            if projected < today {
                projected = birthday.occurrence_in(today.year() + 1);
            }

            if projected > window_end {
                return None;
            }

            let shift = days_until_weekday(projected);
            let congratulation_date = projected
                .checked_add_days(Days::new(shift))
                .unwrap_or(projected);

            Some(UpcomingBirthday {
                name: record.name().to_string(),
                congratulation_date,
            })
        })
        .collect();

    upcoming.sort_by_key(|entry| entry.congratulation_date);
    upcoming
}
