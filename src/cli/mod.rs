//! Command-line layer: command table, input parsing and the session loop body.

pub mod command;
pub mod parser;
pub mod session;

pub use command::{help_text, Arity, Command};
pub use parser::{parse_input, ParsedInput};
pub use session::{greeting, interrupted_message, Reply, Session};
