//! Field Parsers
//!
//! Turn one raw prefix value into a validated field. Each parser trims its
//! input and either returns the value or the field's own constraint
//! violation. Construction rules live in the model types.

use std::collections::BTreeSet;

use crate::commands::TagUpdate;
use crate::error::{ConstraintViolation, FieldKind};
use crate::model::{Handle, Index, Name, Room, Tag};

pub const MESSAGE_INVALID_INDEX: &str = "Index is not a non-zero unsigned integer.";

/// Parse a one-based index.
///
/// Only plain digits are accepted (no sign), and the value must fit the
/// positive `i32` range.
pub fn parse_index(raw: &str) -> Result<Index, ConstraintViolation> {
    let invalid = || ConstraintViolation::new(FieldKind::Index, MESSAGE_INVALID_INDEX);
    let trimmed = raw.trim();

    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    let value: i32 = trimmed.parse().map_err(|_| invalid())?;
    usize::try_from(value)
        .ok()
        .and_then(Index::from_one_based)
        .ok_or_else(invalid)
}

pub fn parse_name(raw: &str) -> Result<Name, ConstraintViolation> {
    Name::try_from(raw.trim())
}

pub fn parse_handle(raw: &str) -> Result<Handle, ConstraintViolation> {
    Handle::try_from(raw.trim())
}

pub fn parse_room(raw: &str) -> Result<Room, ConstraintViolation> {
    Room::try_from(raw.trim())
}

pub fn parse_tag(raw: &str) -> Result<Tag, ConstraintViolation> {
    Tag::try_from(raw.trim())
}

/// Parse every `t/` value into one set.
///
/// Each value is split on whitespace and every word is a tag. An empty value
/// is an invalid tag.
pub fn parse_tags<S: AsRef<str>>(values: &[S]) -> Result<BTreeSet<Tag>, ConstraintViolation> {
    let mut tags = BTreeSet::new();
    for value in values {
        let value = value.as_ref().trim();
        if value.is_empty() {
            return Err(ConstraintViolation::new(FieldKind::Tag, Tag::MESSAGE_CONSTRAINTS));
        }
        for word in value.split_whitespace() {
            tags.insert(parse_tag(word)?);
        }
    }
    Ok(tags)
}

/// Tag handling for `edit`: absent, cleared, or replaced
pub fn parse_tags_for_edit<S: AsRef<str>>(values: &[S]) -> Result<TagUpdate, ConstraintViolation> {
    match values {
        [] => Ok(TagUpdate::Unset),
        [only] if only.as_ref().trim().is_empty() => Ok(TagUpdate::Clear),
        _ => parse_tags(values).map(TagUpdate::Set),
    }
}
