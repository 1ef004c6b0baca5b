//! Case-insensitive name resolution and term matching for contact records.

use crate::models::Record;

/// How a record matched a search term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchType {
    /// The term is a case-insensitive substring of the name
    Name,

    /// The term is a substring of one of the phones
    Phone,
}

/// A record that matched a search term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchResult<'a> {
    pub record: &'a Record,
    pub match_type: MatchType,
}

/// Result of looking a queried name up among the stored names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameResolution {
    /// A stored name equals the query exactly
    Exact,

    /// A stored name equals the query ignoring case; holds the stored name
    CaseMismatch(String),

    /// Nothing matches
    Missing,
}

/// Resolve `query` against `names`.
///
/// An exact match always wins over a case-insensitive one. The query is
/// compared as given, without trimming.
pub fn resolve_name<'a, I>(query: &str, names: I) -> NameResolution
where
    I: IntoIterator<Item = &'a str>,
{
    let lowered = query.to_lowercase();
    let mut suggestion = None;

    for name in names {
        if name == query {
            return NameResolution::Exact;
        }
        if suggestion.is_none() && name.to_lowercase() == lowered {
            suggestion = Some(name);
        }
    }

    match suggestion {
        Some(name) => NameResolution::CaseMismatch(name.to_string()),
        None => NameResolution::Missing,
    }
}

/// Matches records against one search term.
///
/// Names are compared case-insensitively, phones as typed. An empty term
/// matches every record by name.
#[derive(Debug, Clone)]
pub struct ContactMatcher {
    term: String,
    lowered: String,
}

impl ContactMatcher {
    pub fn new(term: &str) -> Self {
        Self {
            term: term.to_string(),
            lowered: term.to_lowercase(),
        }
    }

    /// How `record` matches, preferring a name match over a phone match.
    pub fn match_record(&self, record: &Record) -> Option<MatchType> {
        if self.match_name(record.name().as_str()) {
            return Some(MatchType::Name);
        }

        if record
            .phones()
            .iter()
            .any(|phone| phone.as_str().contains(self.term.as_str()))
        {
            return Some(MatchType::Phone);
        }

        None
    }

    /// Every matching record, each at most once, in input order.
    pub fn find_matches<'a, I>(&self, records: I) -> Vec<MatchResult<'a>>
    where
        I: IntoIterator<Item = &'a Record>,
    {
        records
            .into_iter()
            .filter_map(|record| {
                self.match_record(record)
                    .map(|match_type| MatchResult { record, match_type })
            })
            .collect()
    }

    fn match_name(&self, name: &str) -> bool {
        name.to_lowercase().contains(self.lowered.as_str())
    }
}
