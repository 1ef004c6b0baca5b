//! Matching utilities for contact lookup.
//!
//! This module provides case-insensitive name resolution ("did you mean")
//! and substring matching of search terms against names and phone numbers.

pub mod fuzzy_matcher;

pub use fuzzy_matcher::{resolve_name, ContactMatcher, MatchResult, MatchType, NameResolution};
