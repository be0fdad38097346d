//! Command Completion
//!
//! Completes command words, and field prefixes for `add` and `edit`.

use rustyline::completion::{Completer, Pair};
use rustyline::Context;

use crate::commands::CommandWord;
use crate::parser::syntax::{Prefix, PREFIX_HANDLE, PREFIX_NAME, PREFIX_ROOM, PREFIX_TAG};

/// Field prefixes with the placeholder shown next to them
pub static FIELDS: &[(Prefix, &str)] = &[
    (PREFIX_NAME, "NAME"),
    (PREFIX_HANDLE, "TELEGRAM_HANDLE"),
    (PREFIX_ROOM, "ROOM"),
    (PREFIX_TAG, "TAG"),
];

/// Command completer
pub struct CommandCompleter;

impl Completer for CommandCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line_up_to_cursor = &line[..pos];
        let words: Vec<&str> = line_up_to_cursor.split_whitespace().collect();
        let start = line_up_to_cursor
            .rfind([' ', '\t'])
            .map(|i| i + 1)
            .unwrap_or(0);
        let current = &line_up_to_cursor[start..];

        // If empty or completing first word
        if words.is_empty() || (words.len() == 1 && !current.is_empty()) {
            return Ok((start, complete_command_word(current)));
        }

        match CommandWord::from_word(words[0]) {
            Some(CommandWord::Add) | Some(CommandWord::Edit) => {
                Ok((start, complete_prefix(current)))
            }
            _ => Ok((pos, vec![])),
        }
    }
}

fn complete_command_word(partial: &str) -> Vec<Pair> {
    CommandWord::ALL
        .iter()
        .filter(|c| c.as_str().starts_with(partial))
        .map(|c| Pair {
            display: format!("{:<8} {:<55} # {}", c.as_str(), c.syntax(), c.description()),
            replacement: format!("{} ", c.as_str()),
        })
        .collect()
}

fn complete_prefix(partial: &str) -> Vec<Pair> {
    FIELDS
        .iter()
        .filter(|(prefix, _)| prefix.as_str().starts_with(partial))
        .map(|(prefix, placeholder)| Pair {
            display: format!("{}{}", prefix, placeholder),
            replacement: prefix.to_string(),
        })
        .collect()
}

/// Get command usage text
pub fn get_command_help(word: &str) -> Option<&'static str> {
    CommandWord::from_word(word).map(|c| c.usage())
}
