//! HallPointer
//!
//! A command-driven member directory. One line of text is parsed into a
//! fully validated `Command`, which is then applied to an in-memory
//! `AddressBook`.
//!
//! ```
//! use hallpointer::commands::Command;
//! use hallpointer::parser::parse_command;
//!
//! let command = parse_command("edit 1 h/amy r/4-15").unwrap();
//! assert!(matches!(command, Command::Edit { .. }));
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logic;
pub mod model;
pub mod observability;
pub mod parser;

pub use commands::{Command, CommandResult, TagUpdate, UpdateDescriptor};
pub use error::{CommandError, ConstraintViolation, LogicError, ParseError};
pub use parser::parse_command;
