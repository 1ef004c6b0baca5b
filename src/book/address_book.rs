//! The address book: a keyed collection of contact records.

use super::upcoming::{upcoming_birthdays, UpcomingBirthday};
use crate::display::{plural, AlignedList};
use crate::error::{BookError, BookResult};
use crate::matching::{resolve_name, ContactMatcher, MatchType, NameResolution};
use crate::models::Record;
use chrono::NaiveDate;
use std::collections::{BTreeMap, HashMap};
use std::fmt;

pub const MSG_CONTACT_ADDED: &str = "Contact added.";
pub const MSG_CONTACT_DELETED: &str = "Contact deleted.";
pub const MSG_NO_MATCHES: &str = "No matches found.";

/// In-memory contact directory keyed by exact name.
///
/// Lookups resolve names case-insensitively but never silently: a query that
/// differs from a stored name by case only fails with a suggestion. Listing
/// follows insertion order.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    // Records keyed by insertion sequence, plus a name -> sequence index
    records: BTreeMap<u64, Record>,
    index: HashMap<String, u64>,
    next_seq: u64,
}

/// Result of [`AddressBook::search`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome<'a> {
    /// Matching records sorted by name, case-insensitively
    Matches {
        term: String,
        records: Vec<&'a Record>,
    },

    /// Nothing matched the term
    NoMatches,
}

impl SearchOutcome<'_> {
    pub fn records(&self) -> &[&Record] {
        match self {
            Self::Matches { records, .. } => records,
            Self::NoMatches => &[],
        }
    }
}

impl fmt::Display for SearchOutcome<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoMatches => f.write_str(MSG_NO_MATCHES),
            Self::Matches { term, records } => {
                let count = records.len();
                let subject = if term.is_empty() {
                    "empty search".to_string()
                } else {
                    format!("'{}'", term)
                };
                let header = format!(
                    "Found {} match{} for {}",
                    count,
                    plural(count, "es"),
                    subject
                );
                f.write_str(&listing(records.iter().copied()).render(&header))
            }
        }
    }
}

/// `name : phones` lines for a set of records.
fn listing<'a>(records: impl IntoIterator<Item = &'a Record>) -> AlignedList {
    records
        .into_iter()
        .map(|record| (record.name().as_str(), record.phones_line()))
        .collect()
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Whether a record is stored under exactly this name.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> + '_ {
        self.records.values()
    }

    /// Insert a record under its name.
    ///
    /// Fails with `DuplicateContact` when the name is taken, including by a
    /// name that differs only by case.
    pub fn add(&mut self, record: Record) -> BookResult<&'static str> {
        let name = record.name().as_str().to_string();

        match resolve_name(&name, self.names()) {
            NameResolution::Exact => {
                return Err(BookError::DuplicateContact {
                    name,
                    existing: None,
                })
            }
            NameResolution::CaseMismatch(existing) => {
                return Err(BookError::DuplicateContact {
                    name,
                    existing: Some(existing),
                })
            }
            NameResolution::Missing => {}
        }

        let seq = self.next_seq;
        self.next_seq += 1;
        self.index.insert(name.clone(), seq);
        self.records.insert(seq, record);

        tracing::debug!("Contact '{}' added", name);
        Ok(MSG_CONTACT_ADDED)
    }

    /// The record stored under exactly `name`.
    pub fn find(&self, name: &str) -> BookResult<&Record> {
        self.resolve(name)?;
        self.index
            .get(name)
            .and_then(|seq| self.records.get(seq))
            .ok_or_else(|| BookError::ContactNotFound(name.to_string()))
    }

    /// Mutable access to the record stored under exactly `name`.
    pub fn find_mut(&mut self, name: &str) -> BookResult<&mut Record> {
        self.resolve(name)?;
        self.index
            .get(name)
            .and_then(|seq| self.records.get_mut(seq))
            .ok_or_else(|| BookError::ContactNotFound(name.to_string()))
    }

    /// Remove the record stored under exactly `name`.
    pub fn delete(&mut self, name: &str) -> BookResult<&'static str> {
        self.resolve(name)?;
        self.index
            .remove(name)
            .and_then(|seq| self.records.remove(&seq))
            .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;

        tracing::debug!("Contact '{}' deleted", name);
        Ok(MSG_CONTACT_DELETED)
    }

    /// Records whose name contains `term` ignoring case, or whose phones
    /// contain it as typed. An empty term matches everything.
    pub fn search(&self, term: &str) -> BookResult<SearchOutcome<'_>> {
        if self.is_empty() {
            return Err(BookError::DirectoryEmpty);
        }

        let matches = ContactMatcher::new(term).find_matches(self.iter());
        let by_phone = matches
            .iter()
            .filter(|found| found.match_type == MatchType::Phone)
            .count();
        tracing::debug!(
            "Search '{}': {} name match(es), {} phone match(es)",
            term,
            matches.len() - by_phone,
            by_phone
        );

        let mut records: Vec<&Record> = matches.into_iter().map(|found| found.record).collect();

        if records.is_empty() {
            return Ok(SearchOutcome::NoMatches);
        }

        records.sort_by_cached_key(|record| record.name().as_str().to_lowercase());

        Ok(SearchOutcome::Matches {
            term: term.to_string(),
            records,
        })
    }

    /// Every contact as an aligned `name : phones` listing.
    pub fn render(&self) -> BookResult<String> {
        if self.is_empty() {
            return Err(BookError::DirectoryEmpty);
        }

        let count = self.len();
        let header = format!("You have {} contact{}", count, plural(count, "s"));
        Ok(listing(self.iter()).render(&header))
    }

    /// Birthdays to congratulate within `window_days` days from `today`.
    pub fn upcoming_birthdays(&self, today: NaiveDate, window_days: u32) -> Vec<UpcomingBirthday> {
        upcoming_birthdays(self.iter(), today, window_days)
    }

    fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.index.keys().map(String::as_str)
    }

    fn resolve(&self, name: &str) -> BookResult<()> {
        if self.is_empty() {
            return Err(BookError::DirectoryEmpty);
        }

        match resolve_name(name, self.names()) {
            NameResolution::Exact => Ok(()),
            NameResolution::CaseMismatch(suggestion) => Err(BookError::NotFoundDidYouMean {
                name: name.to_string(),
                suggestion,
            }),
            NameResolution::Missing => Err(BookError::ContactNotFound(name.to_string())),
        }
    }
}
