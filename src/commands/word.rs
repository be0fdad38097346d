//! Command words and their usage text.

use std::fmt;

/// Every command the dispatcher recognises
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandWord {
    Add,
    Edit,
    Delete,
    List,
    Find,
    Clear,
    Help,
    Exit,
}

impl CommandWord {
    pub const ALL: &'static [CommandWord] = &[
        CommandWord::Add,
        CommandWord::Edit,
        CommandWord::Delete,
        CommandWord::List,
        CommandWord::Find,
        CommandWord::Clear,
        CommandWord::Help,
        CommandWord::Exit,
    ];

    /// Exact, case-sensitive lookup
    pub fn from_word(word: &str) -> Option<Self> {
        CommandWord::ALL.iter().copied().find(|c| c.as_str() == word)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CommandWord::Add => "add",
            CommandWord::Edit => "edit",
            CommandWord::Delete => "delete",
            CommandWord::List => "list",
            CommandWord::Find => "find",
            CommandWord::Clear => "clear",
            CommandWord::Help => "help",
            CommandWord::Exit => "exit",
        }
    }

    /// Argument template, used for hints
    pub fn syntax(&self) -> &'static str {
        match self {
            CommandWord::Add => "n/NAME h/TELEGRAM_HANDLE r/ROOM [t/TAG]...",
            CommandWord::Edit => "INDEX [n/NAME] [h/TELEGRAM_HANDLE] [r/ROOM] [t/TAG]...",
            CommandWord::Delete => "INDEX",
            CommandWord::Find => "KEYWORD [MORE_KEYWORDS]...",
            CommandWord::List | CommandWord::Clear | CommandWord::Help | CommandWord::Exit => "",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            CommandWord::Add => "Add a member",
            CommandWord::Edit => "Edit a displayed member",
            CommandWord::Delete => "Delete a displayed member",
            CommandWord::List => "List all members",
            CommandWord::Find => "Find members by name",
            CommandWord::Clear => "Remove every member",
            CommandWord::Help => "Show usage of every command",
            CommandWord::Exit => "Exit the program",
        }
    }

    pub fn usage(&self) -> &'static str {
        match self {
            CommandWord::Add => ADD_USAGE,
            CommandWord::Edit => EDIT_USAGE,
            CommandWord::Delete => DELETE_USAGE,
            CommandWord::List => LIST_USAGE,
            CommandWord::Find => FIND_USAGE,
            CommandWord::Clear => CLEAR_USAGE,
            CommandWord::Help => HELP_USAGE,
            CommandWord::Exit => EXIT_USAGE,
        }
    }
}

impl fmt::Display for CommandWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub const ADD_USAGE: &str = "add: Adds a member to the address book. \
Parameters: n/NAME h/TELEGRAM_HANDLE r/ROOM [t/TAG]...\n\
Example: add n/John Doe h/johndoe r/4-3-301 t/friends t/owesMoney";

pub const EDIT_USAGE: &str = "edit: Edits the details of the member identified \
by the index number used in the displayed member list. \
Existing values will be overwritten by the input values.\n\
Parameters: INDEX (must be a positive integer) [n/NAME] [h/TELEGRAM_HANDLE] [r/ROOM] [t/TAG]...\n\
Example: edit 1 h/johndoe r/4-15";

pub const DELETE_USAGE: &str = "delete: Deletes the member identified by the index \
number used in the displayed member list.\n\
Parameters: INDEX (must be a positive integer)\n\
Example: delete 1";

pub const LIST_USAGE: &str = "list: Lists all members.\nExample: list";

pub const FIND_USAGE: &str = "find: Finds all members whose names contain any of \
the specified keywords (case-insensitive) and displays them as a list with index numbers.\n\
Parameters: KEYWORD [MORE_KEYWORDS]...\n\
Example: find alice bob charlie";

pub const CLEAR_USAGE: &str = "clear: Removes every member from the address book.\nExample: clear";

pub const HELP_USAGE: &str = "help: Shows program usage instructions.\nExample: help";

pub const EXIT_USAGE: &str = "exit: Exits the program.\nExample: exit";
