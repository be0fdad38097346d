//! `add n/NAME h/TELEGRAM_HANDLE r/ROOM [t/TAG]...`

use crate::commands::word::ADD_USAGE;
use crate::commands::Command;
use crate::error::ParseError;
use crate::model::Member;

use super::fields;
use super::syntax::{
    MEMBER_PREFIXES, PREFIX_HANDLE, PREFIX_NAME, PREFIX_ROOM, PREFIX_TAG, SINGLE_VALUED_PREFIXES,
};
use super::tokenizer::tokenize;

/// Name, handle and room are mandatory and the preamble must be empty.
/// Fields are validated in the order name, handle, room, tags.
pub fn parse(args: &str) -> Result<Command, ParseError> {
    let arguments = tokenize(args, MEMBER_PREFIXES);

    if !arguments.are_all_present(SINGLE_VALUED_PREFIXES) || !arguments.preamble().is_empty() {
        return Err(ParseError::InvalidFormat(ADD_USAGE));
    }

    arguments.verify_no_duplicate_prefixes_for(SINGLE_VALUED_PREFIXES)?;

    // Presence was checked above; an empty value still fails validation
    let name = fields::parse_name(arguments.value(PREFIX_NAME).unwrap_or_default())?;
    let handle = fields::parse_handle(arguments.value(PREFIX_HANDLE).unwrap_or_default())?;
    let room = fields::parse_room(arguments.value(PREFIX_ROOM).unwrap_or_default())?;
    let tags = fields::parse_tags(arguments.all_values(PREFIX_TAG))?;

    Ok(Command::Add(Member::new(name, handle, room, tags)))
}
