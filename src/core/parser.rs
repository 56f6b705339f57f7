//! Command line parsing.
//!
//! Input is split on whitespace; there is no quoting, so a single argument
//! can never contain a space.

/// A command name with its arguments, as typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    pub name: String,
    pub args: Vec<String>,
}

/// Split a line into a command. Returns `None` for blank input.
pub fn parse_input(input: &str) -> Option<ParsedCommand> {
    let mut words = input.split_whitespace();
    let name = words.next()?.to_string();
    let args = words.map(str::to_string).collect();
    Some(ParsedCommand { name, args })
}
