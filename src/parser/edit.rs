//! `edit INDEX [n/NAME] [h/TELEGRAM_HANDLE] [r/ROOM] [t/TAG]...`
//!
//! Order of checks:
//! 1. preamble must be a valid index, else `InvalidFormat`
//! 2. `n/`, `h/`, `r/` at most once each, else `DuplicatePrefix`
//! 3. present fields validated as name, handle, room, tags; first failure wins
//! 4. at least one field given, else `NothingToUpdate`

use crate::commands::word::EDIT_USAGE;
use crate::commands::{Command, UpdateDescriptor};
use crate::error::ParseError;

use super::fields;
use super::syntax::{
    MEMBER_PREFIXES, PREFIX_HANDLE, PREFIX_NAME, PREFIX_ROOM, PREFIX_TAG, SINGLE_VALUED_PREFIXES,
};
use super::tokenizer::tokenize;

pub fn parse(args: &str) -> Result<Command, ParseError> {
    let arguments = tokenize(args, MEMBER_PREFIXES);

    let index = fields::parse_index(arguments.preamble())
        .map_err(|_| ParseError::InvalidFormat(EDIT_USAGE))?;

    arguments.verify_no_duplicate_prefixes_for(SINGLE_VALUED_PREFIXES)?;

    let mut descriptor = UpdateDescriptor::default();
    if let Some(name) = arguments.value(PREFIX_NAME) {
        descriptor = descriptor.with_name(fields::parse_name(name)?);
    }
    if let Some(handle) = arguments.value(PREFIX_HANDLE) {
        descriptor = descriptor.with_handle(fields::parse_handle(handle)?);
    }
    if let Some(room) = arguments.value(PREFIX_ROOM) {
        descriptor = descriptor.with_room(fields::parse_room(room)?);
    }
    descriptor = descriptor.with_tags(fields::parse_tags_for_edit(arguments.all_values(PREFIX_TAG))?);

    if !descriptor.is_any_field_edited() {
        return Err(ParseError::NothingToUpdate);
    }

    Ok(Command::Edit { index, descriptor })
}
