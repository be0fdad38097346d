//! In-memory member store.
//!
//! Holds every member in insertion order plus the filter that decides which
//! members are currently displayed. Indices typed by the user always refer to
//! the displayed list.

use super::index::Index;
use super::member::Member;
use super::predicate::NameContainsKeywords;

pub struct AddressBook {
    /// All members, in insertion order
    members: Vec<Member>,
    /// Active `find` filter; `None` shows everyone
    filter: Option<NameContainsKeywords>,
}

impl AddressBook {
    pub fn new() -> Self {
        AddressBook {
            members: Vec::new(),
            filter: None,
        }
    }

    pub fn with_members(members: Vec<Member>) -> Self {
        AddressBook {
            members,
            filter: None,
        }
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Members passing the active filter, in storage order
    pub fn displayed(&self) -> Vec<&Member> {
        self.members
            .iter()
            .filter(|m| self.is_displayed(m))
            .collect()
    }

    /// Map a displayed-list index to a storage position
    pub fn position_of(&self, index: Index) -> Option<usize> {
        self.members
            .iter()
            .enumerate()
            .filter(|(_, m)| self.is_displayed(m))
            .nth(index.zero_based())
            .map(|(pos, _)| pos)
    }

    pub fn get(&self, pos: usize) -> Option<&Member> {
        self.members.get(pos)
    }

    /// True if a member with the same identity exists
    pub fn has_member(&self, member: &Member) -> bool {
        self.members.iter().any(|m| m.is_same_member(member))
    }

    pub fn add(&mut self, member: Member) {
        self.members.push(member);
    }

    /// Replace the member stored at `pos`
    pub fn set_member(&mut self, pos: usize, member: Member) {
        if let Some(slot) = self.members.get_mut(pos) {
            *slot = member;
        }
    }

    pub fn remove(&mut self, pos: usize) -> Option<Member> {
        if pos < self.members.len() {
            Some(self.members.remove(pos))
        } else {
            None
        }
    }

    pub fn clear(&mut self) {
        self.members.clear();
    }

    pub fn set_filter(&mut self, filter: NameContainsKeywords) {
        self.filter = Some(filter);
    }

    pub fn clear_filter(&mut self) {
        self.filter = None;
    }

    fn is_displayed(&self, member: &Member) -> bool {
        self.filter.as_ref().map_or(true, |f| f.matches(member))
    }
}

impl Default for AddressBook {
    fn default() -> Self {
        Self::new()
    }
}
