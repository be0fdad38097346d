#![allow(dead_code)]

use std::collections::BTreeSet;

use hallpointer::model::{Handle, Index, Member, Name, Room, Tag};
use hallpointer::{Command, ParseError};

pub const VALID_NAME_AMY: &str = "Amy Bee";
pub const VALID_NAME_BOB: &str = "Bob Choo";
pub const VALID_HANDLE_AMY: &str = "amy_bee";
pub const VALID_HANDLE_BOB: &str = "bob_choo";
pub const VALID_ROOM_AMY: &str = "4-15";
pub const VALID_ROOM_BOB: &str = "3-1-105";
pub const VALID_TAG_HUSBAND: &str = "husband";
pub const VALID_TAG_FRIEND: &str = "friend";

pub const NAME_DESC_AMY: &str = " n/Amy Bee";
pub const NAME_DESC_BOB: &str = " n/Bob Choo";
pub const HANDLE_DESC_AMY: &str = " h/amy_bee";
pub const HANDLE_DESC_BOB: &str = " h/bob_choo";
pub const ROOM_DESC_AMY: &str = " r/4-15";
pub const ROOM_DESC_BOB: &str = " r/3-1-105";
pub const TAG_DESC_FRIEND: &str = " t/friend";
pub const TAG_DESC_HUSBAND: &str = " t/husband";
pub const TAG_EMPTY: &str = " t/";

// '&' not allowed in names
pub const INVALID_NAME_DESC: &str = " n/James&";
// leading '@' not allowed in handles
pub const INVALID_HANDLE_DESC: &str = " h/@james";
// letters not allowed in rooms
pub const INVALID_ROOM_DESC: &str = " r/911a";
// '*' not allowed in tags
pub const INVALID_TAG_DESC: &str = " t/hubby*";

pub const PREAMBLE_WHITESPACE: &str = "\t  \r  \n";
pub const PREAMBLE_NON_EMPTY: &str = "NonEmptyPreamble";

pub fn index(one_based: usize) -> Index {
    Index::from_one_based(one_based).unwrap()
}

pub fn tags(names: &[&str]) -> BTreeSet<Tag> {
    names.iter().map(|t| Tag::try_from(*t).unwrap()).collect()
}

pub fn member(name: &str, handle: &str, room: &str, tag_names: &[&str]) -> Member {
    Member::new(
        Name::try_from(name).unwrap(),
        Handle::try_from(handle).unwrap(),
        Room::try_from(room).unwrap(),
        tags(tag_names),
    )
}

pub fn assert_parse_success(parse: fn(&str) -> Result<Command, ParseError>, input: &str, expected: Command) {
    assert_eq!(parse(input), Ok(expected), "input={input:?}");
}

pub fn assert_parse_failure(parse: fn(&str) -> Result<Command, ParseError>, input: &str, expected: &str) {
    match parse(input) {
        Ok(command) => panic!("expected failure for {input:?}, got {command:?}"),
        Err(err) => assert_eq!(err.to_string(), expected, "input={input:?}"),
    }
}
