//! Update Descriptor
//!
//! A patch recording only the member fields the user supplied to `edit`.

use std::collections::BTreeSet;

use crate::model::{Handle, Member, Name, Room, Tag};

/// What an edit does to a member's tags.
///
/// `t/` absent leaves tags alone, a lone empty `t/` clears them, anything
/// else replaces them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TagUpdate {
    #[default]
    Unset,
    Clear,
    Set(BTreeSet<Tag>),
}

impl TagUpdate {
    pub fn is_set(&self) -> bool {
        !matches!(self, TagUpdate::Unset)
    }

    fn apply(&self, current: &BTreeSet<Tag>) -> BTreeSet<Tag> {
        match self {
            TagUpdate::Unset => current.clone(),
            TagUpdate::Clear => BTreeSet::new(),
            TagUpdate::Set(tags) => tags.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateDescriptor {
    name: Option<Name>,
    handle: Option<Handle>,
    room: Option<Room>,
    tags: TagUpdate,
}

impl UpdateDescriptor {
    pub fn with_name(mut self, name: Name) -> Self {
        self.name = Some(name);
        self
    }

    pub fn with_handle(mut self, handle: Handle) -> Self {
        self.handle = Some(handle);
        self
    }

    pub fn with_room(mut self, room: Room) -> Self {
        self.room = Some(room);
        self
    }

    pub fn with_tags(mut self, tags: TagUpdate) -> Self {
        self.tags = tags;
        self
    }

    pub fn name(&self) -> Option<&Name> {
        self.name.as_ref()
    }

    pub fn handle(&self) -> Option<&Handle> {
        self.handle.as_ref()
    }

    pub fn room(&self) -> Option<&Room> {
        self.room.as_ref()
    }

    pub fn tags(&self) -> &TagUpdate {
        &self.tags
    }

    pub fn is_any_field_edited(&self) -> bool {
        self.name.is_some() || self.handle.is_some() || self.room.is_some() || self.tags.is_set()
    }

    /// Build the edited member, keeping every field not in the patch
    pub fn apply_to(&self, member: &Member) -> Member {
        Member::new(
            self.name.clone().unwrap_or_else(|| member.name().clone()),
            self.handle.clone().unwrap_or_else(|| member.handle().clone()),
            self.room.clone().unwrap_or_else(|| member.room().clone()),
            self.tags.apply(member.tags()),
        )
    }
}
