//! Sample members used to seed a fresh session.

use std::collections::BTreeSet;

use super::member::{Handle, Member, Name, Room, Tag};

const SAMPLE_MEMBERS: &[(&str, &str, &str, &[&str])] = &[
    ("Alex Yeoh", "alexyeoh", "4-3-301", &["friends"]),
    ("Bernice Yu", "bernice_yu", "4-2-210", &["colleagues", "friends"]),
    ("Charlotte Oliveiro", "charlotte_o", "3-1-105", &["neighbours"]),
    ("David Li", "davidli", "2-4-402", &["family"]),
    ("Irfan Ibrahim", "irfan_ib", "1-2-203", &["classmates"]),
    ("Roy Balakrishnan", "roy_bala", "4-5-508", &["colleagues"]),
];

/// Build the sample list, skipping any entry that fails validation
pub fn sample_members() -> Vec<Member> {
    SAMPLE_MEMBERS
        .iter()
        .filter_map(|(name, handle, room, tags)| {
            let tags = tags
                .iter()
                .map(|t| Tag::try_from(*t))
                .collect::<Result<BTreeSet<_>, _>>()
                .ok()?;
            Some(Member::new(
                Name::try_from(*name).ok()?,
                Handle::try_from(*handle).ok()?,
                Room::try_from(*room).ok()?,
                tags,
            ))
        })
        .collect()
}
