//! `delete INDEX`

use crate::commands::word::DELETE_USAGE;
use crate::commands::Command;
use crate::error::ParseError;

use super::fields;

pub fn parse(args: &str) -> Result<Command, ParseError> {
    fields::parse_index(args)
        .map(Command::Delete)
        .map_err(|_| ParseError::InvalidFormat(DELETE_USAGE))
}
