//! Command Hints
//!
//! Provides inline hints as the user types.

use rustyline::hint::{Hint, Hinter};
use rustyline::Context;

use crate::commands::CommandWord;

/// Command hinter - shows usage hints inline
pub struct CommandHinter;

impl Hinter for CommandHinter {
    type Hint = CommandHint;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<Self::Hint> {
        if line.is_empty() || pos < line.len() {
            return None;
        }
        hint_for(line)
    }
}

fn hint_for(line: &str) -> Option<CommandHint> {
    let words: Vec<&str> = line.split_whitespace().collect();
    let word = *words.first()?;
    let typing_word = words.len() == 1 && !line.ends_with(char::is_whitespace);

    // Complete command word: show its parameters
    if let Some(command) = CommandWord::from_word(word) {
        if words.len() > 1 || command.syntax().is_empty() {
            return None;
        }
        let separator = if typing_word { " " } else { "" };
        return Some(CommandHint {
            text: format!("{}{}", separator, command.syntax()),
            complete_up_to: 0,
        });
    }

    // Partial command match for completion hint
    if typing_word {
        for command in CommandWord::ALL {
            let name = command.as_str();
            if let Some(rest) = name.strip_prefix(word) {
                let text = format!("{} {}", rest, command.syntax()).trim_end().to_string();
                return Some(CommandHint {
                    text,
                    complete_up_to: rest.len(),
                });
            }
        }
    }

    None
}

/// A hint with display text
#[derive(Debug, PartialEq, Eq)]
pub struct CommandHint {
    text: String,
    complete_up_to: usize,
}

impl Hint for CommandHint {
    fn display(&self) -> &str {
        &self.text
    }

    fn completion(&self) -> Option<&str> {
        if self.complete_up_to > 0 {
            Some(&self.text[..self.complete_up_to])
        } else {
            None
        }
    }
}
