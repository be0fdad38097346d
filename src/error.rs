//! Error types for HallPointer.
//!
//! Parsing and execution failures are plain values; nothing here panics on
//! user input.

use std::fmt;

use thiserror::Error;

use crate::parser::syntax::Prefix;

/// The field a constraint violation belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Index,
    Name,
    Handle,
    Room,
    Tag,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldKind::Index => "index",
            FieldKind::Name => "name",
            FieldKind::Handle => "handle",
            FieldKind::Room => "room",
            FieldKind::Tag => "tag",
        };
        f.write_str(name)
    }
}

/// A raw value that failed its field's own validation rule.
///
/// The message is fixed and owned by the field type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ConstraintViolation {
    pub field: FieldKind,
    pub message: &'static str,
}

impl ConstraintViolation {
    pub fn new(field: FieldKind, message: &'static str) -> Self {
        ConstraintViolation { field, message }
    }
}

/// Failure to turn a command line into a command
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Structural failure, carries the usage text of the command involved
    #[error("Invalid command format! \n{0}")]
    InvalidFormat(&'static str),

    /// Single-valued fields given more than once, in declared order
    #[error(
        "Multiple values specified for the following single-valued field(s): {}",
        join_prefixes(.0)
    )]
    DuplicatePrefix(Vec<Prefix>),

    #[error(transparent)]
    ConstraintViolation(#[from] ConstraintViolation),

    #[error("At least one field to edit must be provided.")]
    NothingToUpdate,

    #[error("Unknown command")]
    UnknownCommand,
}

impl ParseError {
    /// The field whose value was rejected, if any
    pub fn field(&self) -> Option<FieldKind> {
        match self {
            ParseError::ConstraintViolation(violation) => Some(violation.field),
            _ => None,
        }
    }
}

fn join_prefixes(prefixes: &[Prefix]) -> String {
    prefixes
        .iter()
        .map(Prefix::as_str)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Failure while applying a parsed command to the address book
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("The member index provided is invalid")]
    InvalidIndex,

    #[error("This member already exists in the address book")]
    DuplicateMember,
}

/// Anything that can go wrong between reading a line and producing a result
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LogicError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Command(#[from] CommandError),
}
