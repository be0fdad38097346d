//! Member record and its field types.
//!
//! Each field type owns its validation rule and constraint message. Values
//! can only be built through `TryFrom<&str>`, so an instance is always valid.

use std::collections::BTreeSet;
use std::fmt;

use crate::error::{ConstraintViolation, FieldKind};

/// Member's full name
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Name(String);

impl Name {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Names should only contain alphanumeric characters and spaces, and it should not be blank";

    /// First character alphanumeric, then alphanumerics and spaces
    pub fn is_valid(raw: &str) -> bool {
        let mut chars = raw.chars();
        match chars.next() {
            Some(first) if first.is_ascii_alphanumeric() => {
                chars.all(|c| c.is_ascii_alphanumeric() || c == ' ')
            }
            _ => false,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for Name {
    type Error = ConstraintViolation;

    fn try_from(raw: &str) -> Result<Self, Self::Error> {
        if Name::is_valid(raw) {
            Ok(Name(raw.to_string()))
        } else {
            Err(ConstraintViolation::new(FieldKind::Name, Name::MESSAGE_CONSTRAINTS))
        }
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Telegram handle, stored without the leading `@`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Handle(String);

impl Handle {
    pub const MAX_LEN: usize = 32;

    pub const MESSAGE_CONSTRAINTS: &'static str = "Telegram handles should only contain alphanumeric characters or underscores, and be between 1 and 32 characters long";

    pub fn is_valid(raw: &str) -> bool {
        !raw.is_empty()
            && raw.len() <= Handle::MAX_LEN
            && raw.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for Handle {
    type Error = ConstraintViolation;

    fn try_from(raw: &str) -> Result<Self, Self::Error> {
        if Handle::is_valid(raw) {
            Ok(Handle(raw.to_string()))
        } else {
            Err(ConstraintViolation::new(FieldKind::Handle, Handle::MESSAGE_CONSTRAINTS))
        }
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Hall room in `block-floor-number` style, e.g. `4-3-301`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Room(String);

impl Room {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Rooms should be hyphen-separated numbers, such as 4-15 or 4-3-301, and it should not be blank";

    pub fn is_valid(raw: &str) -> bool {
        raw.split('-')
            .all(|part| !part.is_empty() && part.chars().all(|c| c.is_ascii_digit()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for Room {
    type Error = ConstraintViolation;

    fn try_from(raw: &str) -> Result<Self, Self::Error> {
        if Room::is_valid(raw) {
            Ok(Room(raw.to_string()))
        } else {
            Err(ConstraintViolation::new(FieldKind::Room, Room::MESSAGE_CONSTRAINTS))
        }
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tag(String);

impl Tag {
    pub const MESSAGE_CONSTRAINTS: &'static str = "Tags names should be alphanumeric";

    pub fn is_valid(raw: &str) -> bool {
        !raw.is_empty() && raw.chars().all(|c| c.is_ascii_alphanumeric())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for Tag {
    type Error = ConstraintViolation;

    fn try_from(raw: &str) -> Result<Self, Self::Error> {
        if Tag::is_valid(raw) {
            Ok(Tag(raw.to_string()))
        } else {
            Err(ConstraintViolation::new(FieldKind::Tag, Tag::MESSAGE_CONSTRAINTS))
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0)
    }
}

/// A hall member
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    name: Name,
    handle: Handle,
    room: Room,
    tags: BTreeSet<Tag>,
}

impl Member {
    pub fn new(name: Name, handle: Handle, room: Room, tags: BTreeSet<Tag>) -> Self {
        Member {
            name,
            handle,
            room,
            tags,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn handle(&self) -> &Handle {
        &self.handle
    }

    pub fn room(&self) -> &Room {
        &self.room
    }

    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    /// Weaker notion of equality used to reject duplicates: same name
    pub fn is_same_member(&self, other: &Member) -> bool {
        self.name == other.name
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}; Telegram: {}; Room: {}; Tags: ",
            self.name, self.handle, self.room
        )?;
        for tag in &self.tags {
            write!(f, "{}", tag)?;
        }
        Ok(())
    }
}
