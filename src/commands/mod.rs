//! Commands module for HallPointer.
//!
//! A `Command` is the fully validated result of parsing one line. It owns all
//! of its data and is applied to an `AddressBook` exactly once.

pub mod descriptor;
pub mod word;

pub use descriptor::{TagUpdate, UpdateDescriptor};
pub use word::CommandWord;

use tracing::debug;

use crate::error::CommandError;
use crate::model::{AddressBook, Index, Member, NameContainsKeywords};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(Member),
    Edit {
        index: Index,
        descriptor: UpdateDescriptor,
    },
    Delete(Index),
    List,
    Find(NameContainsKeywords),
    Clear,
    Help,
    Exit,
}

/// Outcome of a successful command, shown to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub feedback: String,
    /// The displayed member list changed and should be printed
    pub show_list: bool,
    pub exit: bool,
}

impl CommandResult {
    pub fn new(feedback: impl Into<String>) -> Self {
        CommandResult {
            feedback: feedback.into(),
            show_list: false,
            exit: false,
        }
    }

    fn with_list(mut self) -> Self {
        self.show_list = true;
        self
    }
}

impl Command {
    pub fn word(&self) -> CommandWord {
        match self {
            Command::Add(_) => CommandWord::Add,
            Command::Edit { .. } => CommandWord::Edit,
            Command::Delete(_) => CommandWord::Delete,
            Command::List => CommandWord::List,
            Command::Find(_) => CommandWord::Find,
            Command::Clear => CommandWord::Clear,
            Command::Help => CommandWord::Help,
            Command::Exit => CommandWord::Exit,
        }
    }

    /// Apply the command. Index bounds are checked here against the
    /// currently displayed list.
    pub fn execute(&self, book: &mut AddressBook) -> Result<CommandResult, CommandError> {
        match self {
            Command::Add(member) => {
                if book.has_member(member) {
                    return Err(CommandError::DuplicateMember);
                }
                book.add(member.clone());
                Ok(CommandResult::new(format!("New member added: {}", member)))
            }
            Command::Edit { index, descriptor } => {
                let pos = book.position_of(*index).ok_or(CommandError::InvalidIndex)?;
                let Some(current) = book.get(pos) else {
                    return Err(CommandError::InvalidIndex);
                };
                let edited = descriptor.apply_to(current);

                let clashes = book
                    .members()
                    .iter()
                    .enumerate()
                    .any(|(i, m)| i != pos && m.is_same_member(&edited));
                if clashes {
                    return Err(CommandError::DuplicateMember);
                }

                debug!(position = pos, "replacing member");
                let feedback = format!("Edited Member: {}", edited);
                book.set_member(pos, edited);
                book.clear_filter();
                Ok(CommandResult::new(feedback).with_list())
            }
            Command::Delete(index) => {
                let removed = book
                    .position_of(*index)
                    .and_then(|pos| book.remove(pos))
                    .ok_or(CommandError::InvalidIndex)?;
                Ok(CommandResult::new(format!("Deleted Member: {}", removed)).with_list())
            }
            Command::List => {
                book.clear_filter();
                Ok(CommandResult::new("Listed all members").with_list())
            }
            Command::Find(predicate) => {
                debug!(keywords = ?predicate.keywords(), "filtering by name");
                book.set_filter(predicate.clone());
                let count = book.displayed().len();
                Ok(CommandResult::new(format!("{} members listed!", count)).with_list())
            }
            Command::Clear => {
                book.clear();
                book.clear_filter();
                Ok(CommandResult::new("Address book has been cleared!"))
            }
            Command::Help => {
                let usage = CommandWord::ALL
                    .iter()
                    .map(CommandWord::usage)
                    .collect::<Vec<_>>()
                    .join("\n\n");
                Ok(CommandResult::new(usage))
            }
            Command::Exit => {
                let mut result = CommandResult::new("Exiting Address Book as requested ...");
                result.exit = true;
                Ok(result)
            }
        }
    }
}
