//! Interactive session: turns input lines into replies.

use super::command::{help_text, Arity, Command};
use super::parser::{parse_input, ParsedInput};
use crate::error::{CommandError, CommandResult};
use crate::services::{ContactService, ContactServiceImpl};
use std::io;

pub const WELCOME_TITLE: &str = "Welcome to the assistant bot!";
pub const WELCOME_SUBTITLE: &str = "Here you have the list of available options for you";
pub const HELLO_MESSAGE: &str =
    "How can I help you?\nIf you'd like, I can help you manage your phone contacts.";
pub const INPUT_PROMPT: &str =
    "Enter a command (or type 'help' for the available list of commands): ";
pub const EXIT_MESSAGE: &str = "Good bye!";
pub const INTERRUPTED_SUFFIX: &str = "(Interrupted by user)";
pub const UNREADABLE_INPUT_MESSAGE: &str = "Input could not be read as text. Please try again.";

/// What the caller should do after a line was executed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print the message and read the next line
    Continue(String),

    /// Print the message and end the session
    Exit(String),
}

impl Reply {
    pub fn message(&self) -> &str {
        match self {
            Self::Continue(message) | Self::Exit(message) => message,
        }
    }

    pub fn is_exit(&self) -> bool {
        matches!(self, Self::Exit(_))
    }
}

/// The greeting printed when the session starts.
pub fn greeting() -> String {
    format!(
        "{}\n\n{}:\n\n{}",
        WELCOME_TITLE.to_uppercase(),
        WELCOME_SUBTITLE,
        help_text()
    )
}

/// Farewell printed when input ends without an exit command.
pub fn interrupted_message() -> String {
    format!("{} {}", EXIT_MESSAGE, INTERRUPTED_SUFFIX)
}

/// A command session over a contact service.
pub struct Session<S = ContactServiceImpl> {
    service: S,
}

impl<S: ContactService> Session<S> {
    pub fn new(service: S) -> Self {
        Self { service }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// Execute one input line.
    ///
    /// Failures never end the session; their messages come back as
    /// [`Reply::Continue`].
    pub fn execute(&mut self, line: &str) -> Reply {
        match self.try_execute(line) {
            Ok(reply) => reply,
            Err(err) => {
                tracing::debug!("Command rejected: {:?}", err);
                Reply::Continue(err.to_string())
            }
        }
    }

    /// Execute a line as read from the input stream.
    ///
    /// A line that is not valid UTF-8 is reported and the session goes on;
    /// any other read error is returned.
    pub fn execute_read(&mut self, line: io::Result<String>) -> io::Result<Reply> {
        match line {
            Ok(line) => Ok(self.execute(&line)),
            Err(err) if err.kind() == io::ErrorKind::InvalidData => {
                tracing::warn!("Skipping unreadable input line: {}", err);
                Ok(Reply::Continue(UNREADABLE_INPUT_MESSAGE.to_string()))
            }
            Err(err) => Err(err),
        }
    }

    fn try_execute(&mut self, line: &str) -> CommandResult<Reply> {
        let ParsedInput { command, args } =
            parse_input(line).ok_or(CommandError::EmptyCommand)?;
        let command: Command = command.parse()?;

        tracing::debug!("Dispatching '{}' with {} argument(s)", command, args.len());

        if let Some(arity) = command.arity() {
            if args.len() != arity.count {
                return Err(wrong_argument_count(arity));
            }
        }

        let service = &mut self.service;
        let message = match (command, args.as_slice()) {
            (Command::Exit, _) => return Ok(Reply::Exit(EXIT_MESSAGE.to_string())),
            (Command::Hello, _) => HELLO_MESSAGE.to_string(),
            (Command::Help, _) => help_text(),
            (Command::All, _) => service.show_all()?,
            (Command::Birthdays, _) => service.upcoming_birthdays()?,
            (Command::Add, [username, phone]) => service.add_contact(username, phone)?,
            (Command::Change, [username, old, new]) => {
                service.change_contact(username, old, new)?
            }
            (Command::Phone, [term]) => service.show_phone(term)?,
            (Command::AddBirthday, [username, date]) => service.add_birthday(username, date)?,
            (Command::ShowBirthday, [username]) => service.show_birthday(username)?,
            (Command::Delete, [username]) => service.delete_contact(username)?,
            // Unreachable once the argument count is checked
            (command, _) => {
                return Err(command.arity().map_or(
                    CommandError::UnknownCommand(command.to_string()),
                    wrong_argument_count,
                ))
            }
        };

        Ok(Reply::Continue(message))
    }
}

fn wrong_argument_count(arity: Arity) -> CommandError {
    CommandError::WrongArgumentCount {
        expected: arity.count,
        description: arity.description.to_string(),
    }
}

impl Default for Session<ContactServiceImpl> {
    fn default() -> Self {
        Self::new(ContactServiceImpl::new())
    }
}
