//! Command table: names, aliases, argument hints and help text.

use crate::display::AlignedList;
use crate::error::CommandError;
use std::fmt;
use std::str::FromStr;

/// A command the session understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Hello,
    Add,
    Change,
    Phone,
    All,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    Delete,
    Help,
    Exit,
}

/// Expected positional arguments of a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arity {
    pub count: usize,
    /// What the arguments are, as used in the argument-count error
    pub description: &'static str,
}

impl Command {
    /// Every command, in help order.
    pub const ALL: [Command; 11] = [
        Command::Hello,
        Command::Add,
        Command::Change,
        Command::Phone,
        Command::All,
        Command::AddBirthday,
        Command::ShowBirthday,
        Command::Birthdays,
        Command::Delete,
        Command::Help,
        Command::Exit,
    ];

    /// Canonical name typed by the user.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Hello => "hello",
            Self::Add => "add",
            Self::Change => "change",
            Self::Phone => "phone",
            Self::All => "all",
            Self::AddBirthday => "add-birthday",
            Self::ShowBirthday => "show-birthday",
            Self::Birthdays => "birthdays",
            Self::Delete => "delete",
            Self::Help => "help",
            Self::Exit => "exit",
        }
    }

    /// Alternative names.
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::Exit => &["close"],
            _ => &[],
        }
    }

    /// Argument hint shown in the help text.
    pub fn args_hint(&self) -> &'static str {
        match self {
            Self::Add => "<username> <phone>",
            Self::Change => "<username> <old_phone> <new_phone>",
            Self::Phone => "<search_term>",
            Self::AddBirthday => "<username> <DD.MM.YYYY>",
            Self::ShowBirthday | Self::Delete => "<username>",
            Self::Hello | Self::All | Self::Birthdays | Self::Help | Self::Exit => "",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Hello => "Greet the user",
            Self::Add => "Add a new contact or a phone to an existing one",
            Self::Change => "Update contact's phone number",
            Self::Phone => "Show phone numbers of contacts matching a name or phone",
            Self::All => "Display all contacts",
            Self::AddBirthday => "Add or update contact's birthday",
            Self::ShowBirthday => "Show contact's birthday",
            Self::Birthdays => "Show birthdays in the upcoming days",
            Self::Delete => "Delete a contact",
            Self::Help => "Show available commands",
            Self::Exit => "Exit the app",
        }
    }

    /// Required arguments; `None` when arguments are ignored.
    pub fn arity(&self) -> Option<Arity> {
        let (count, description) = match self {
            Self::Add => (2, "username and a phone number"),
            Self::Change => (3, "username, old phone number and new phone number"),
            Self::Phone => (1, "username or a phone number to search for"),
            Self::AddBirthday => (2, "username and a birthday"),
            Self::ShowBirthday | Self::Delete => (1, "username"),
            Self::Hello | Self::All | Self::Birthdays | Self::Help | Self::Exit => return None,
        };
        Some(Arity { count, description })
    }

    /// `"<name>[ (or <aliases>)] <args>"` as shown in the help text.
    pub fn usage(&self) -> String {
        let aliases = self.aliases();
        let alias_str = if aliases.is_empty() {
            String::new()
        } else {
            format!(" (or {})", aliases.join(", "))
        };

        format!("{}{} {}", self.name(), alias_str, self.args_hint())
            .trim()
            .to_string()
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Command::ALL
            .into_iter()
            .find(|command| {
                command.name() == s || command.aliases().iter().any(|alias| *alias == s)
            })
            .ok_or_else(|| CommandError::UnknownCommand(s.to_string()))
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Help text listing every command with its description.
pub fn help_text() -> String {
    let list: AlignedList = Command::ALL
        .iter()
        .map(|command| (command.usage(), command.description()))
        .collect();

    list.with_offset("").with_separator(" - ").body()
}
