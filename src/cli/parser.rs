//! Input line parsing.

/// A command word and its arguments as typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInput<'a> {
    /// Lowercased command word
    pub command: String,
    pub args: Vec<&'a str>,
}

/// Split a line on whitespace into a lowercased command and its arguments.
///
/// Returns `None` for a blank line.
pub fn parse_input(line: &str) -> Option<ParsedInput<'_>> {
    let mut tokens = line.split_whitespace();
    let command = tokens.next()?.to_lowercase();

    Some(ParsedInput {
        command,
        args: tokens.collect(),
    })
}
