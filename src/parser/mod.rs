//! Command Parser
//!
//! Turns one line of user input into a `Command`.
//!
//! The first whitespace-delimited word selects the command (exact,
//! case-sensitive match); the rest of the line is handed to that command's
//! parser untouched, leading whitespace included.

pub mod add;
pub mod delete;
pub mod edit;
pub mod fields;
pub mod find;
pub mod syntax;
pub mod tokenizer;

use tracing::debug;

use crate::commands::word::HELP_USAGE;
use crate::commands::{Command, CommandWord};
use crate::error::ParseError;

/// Parse a full command line
pub fn parse_command(input: &str) -> Result<Command, ParseError> {
    let Some((word, arguments)) = split_command_word(input) else {
        return Err(ParseError::InvalidFormat(HELP_USAGE));
    };
    debug!(command_word = word, "dispatching command");

    match CommandWord::from_word(word) {
        Some(CommandWord::Add) => add::parse(arguments),
        Some(CommandWord::Edit) => edit::parse(arguments),
        Some(CommandWord::Delete) => delete::parse(arguments),
        Some(CommandWord::Find) => find::parse(arguments),
        Some(CommandWord::List) => Ok(Command::List),
        Some(CommandWord::Clear) => Ok(Command::Clear),
        Some(CommandWord::Help) => Ok(Command::Help),
        Some(CommandWord::Exit) => Ok(Command::Exit),
        None => Err(ParseError::UnknownCommand),
    }
}

/// Split off the command word. `None` for a blank line.
fn split_command_word(input: &str) -> Option<(&str, &str)> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    let end = input.find(char::is_whitespace).unwrap_or(input.len());
    Some(input.split_at(end))
}
