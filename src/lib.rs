//! Contact book - an in-memory contact directory with validated fields,
//! fuzzy lookup and birthday reminders.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (name, phone, birthday) and validators
//! - **models**: The contact record aggregating those values
//! - **book**: The address book and the upcoming-birthday query
//! - **matching**: Case-insensitive name resolution and search-term matching
//! - **display**: Aligned listings and text truncation
//! - **services**: User-level operations returning ready-to-print messages
//! - **cli**: Command table, input parsing and the interactive session
//! - **clock**: Source of the current date
//! - **config**: Configuration management from environment variables
//! - **error**: Custom error types for precise error handling

pub mod book;
pub mod cli;
pub mod clock;
pub mod config;
pub mod display;
pub mod domain;
pub mod error;
pub mod matching;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use book::{AddressBook, SearchOutcome, UpcomingBirthday};
pub use cli::{Reply, Session};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::Config;
pub use domain::{Birthday, Field, FieldKind, Name, Phone, ValidationError};
pub use error::{BookError, BookResult, CommandError, CommandResult, ConfigError};
pub use models::{BirthdayChange, Record};
pub use services::{ContactService, ContactServiceImpl};
