//! Error types for the contact book.
//!
//! Field-level validation failures live in [`crate::domain::ValidationError`];
//! this module defines the errors of the directory, the command layer and
//! configuration loading using `thiserror`. Every message is complete and can
//! be printed to the user verbatim.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors raised by record and address book operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// A field value failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The record already holds this phone
    #[error("Contact '{contact}' already has phone '{phone}'.")]
    DuplicatePhone { contact: String, phone: String },

    /// The record does not hold this phone
    #[error("Phone '{0}' not found.")]
    PhoneNotFound(String),

    /// The record already has exactly this birthday
    #[error("Birthday for '{contact}' is already set to '{date}'.")]
    DuplicateBirthday { contact: String, date: String },

    /// A contact with this name already exists.
    ///
    /// `existing` carries the stored name when it differs from `name` by case only.
    #[error("{}", duplicate_contact_message(.name, .existing))]
    DuplicateContact {
        name: String,
        existing: Option<String>,
    },

    /// No contact with this name
    #[error("Contact '{0}' not found.")]
    ContactNotFound(String),

    /// No exact match, but a contact differing by case exists
    #[error(
        "Contact '{name}' not found. However, a contact with a similar name exists as '{suggestion}'. Did you mean '{suggestion}'?"
    )]
    NotFoundDidYouMean { name: String, suggestion: String },

    /// The book holds no contacts at all
    #[error("You don't have contacts yet, but you can add one anytime.")]
    DirectoryEmpty,
}

fn duplicate_contact_message(name: &str, existing: &Option<String>) -> String {
    match existing {
        Some(existing) => format!(
            "Contact with username '{}' already exists, but under a different name: '{}'.",
            name, existing
        ),
        None => format!("Contact with username '{}' already exists.", name),
    }
}

/// Errors raised while executing a user command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The input line held no command
    #[error("You entered an empty command. Please try again.")]
    EmptyCommand,

    /// The command name is not known
    #[error("Invalid command. Type 'help' for the available list of commands.")]
    UnknownCommand(String),

    /// The command received the wrong number of arguments
    #[error("You must provide {description} ({expected} {}).", argument_noun(.expected))]
    WrongArgumentCount {
        expected: usize,
        description: String,
    },

    /// The underlying book operation failed
    #[error(transparent)]
    Book(#[from] BookError),
}

fn argument_noun(count: &usize) -> &'static str {
    if *count == 1 {
        "argument"
    } else {
        "arguments"
    }
}

impl From<ValidationError> for CommandError {
    fn from(err: ValidationError) -> Self {
        CommandError::Book(err.into())
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Failed to load .env file
    #[error("Failed to load .env file: {0}")]
    DotenvError(String),
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
