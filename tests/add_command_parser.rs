mod common;

use common::*;

use hallpointer::commands::word::ADD_USAGE;
use hallpointer::model::{Handle, Name, Room, Tag};
use hallpointer::parser::add::parse;
use hallpointer::parser::syntax::{PREFIX_HANDLE, PREFIX_NAME, PREFIX_ROOM};
use hallpointer::{Command, ParseError};

fn invalid_format() -> String {
    ParseError::InvalidFormat(ADD_USAGE).to_string()
}

fn bob_desc() -> String {
    format!("{}{}{}", NAME_DESC_BOB, HANDLE_DESC_BOB, ROOM_DESC_BOB)
}

#[test]
fn parse_all_fields_present_success() {
    let expected = Command::Add(member(
        VALID_NAME_BOB,
        VALID_HANDLE_BOB,
        VALID_ROOM_BOB,
        &[VALID_TAG_FRIEND],
    ));

    assert_parse_success(
        parse,
        &format!("{}{}{}", PREAMBLE_WHITESPACE, bob_desc(), TAG_DESC_FRIEND),
        expected,
    );

    // multiple tags - all accepted
    let expected = Command::Add(member(
        VALID_NAME_BOB,
        VALID_HANDLE_BOB,
        VALID_ROOM_BOB,
        &[VALID_TAG_FRIEND, VALID_TAG_HUSBAND],
    ));
    assert_parse_success(
        parse,
        &format!("{}{}{}", bob_desc(), TAG_DESC_HUSBAND, TAG_DESC_FRIEND),
        expected,
    );
}

#[test]
fn parse_field_order_does_not_matter() {
    let expected = Command::Add(member(VALID_NAME_AMY, VALID_HANDLE_AMY, VALID_ROOM_AMY, &[]));
    let input = format!("{}{}{}", ROOM_DESC_AMY, NAME_DESC_AMY, HANDLE_DESC_AMY);
    assert_parse_success(parse, &input, expected);
}

#[test]
fn parse_optional_fields_missing_success() {
    // zero tags
    let expected = Command::Add(member(VALID_NAME_AMY, VALID_HANDLE_AMY, VALID_ROOM_AMY, &[]));
    let input = format!("{}{}{}", NAME_DESC_AMY, HANDLE_DESC_AMY, ROOM_DESC_AMY);
    assert_parse_success(parse, &input, expected);
}

#[test]
fn parse_repeated_single_valued_field_failure() {
    let valid = format!("{}{}", bob_desc(), TAG_DESC_FRIEND);

    // multiple names
    assert_parse_failure(
        parse,
        &format!("{}{}", NAME_DESC_AMY, valid),
        &ParseError::DuplicatePrefix(vec![PREFIX_NAME]).to_string(),
    );

    // multiple handles
    assert_parse_failure(
        parse,
        &format!("{}{}", HANDLE_DESC_AMY, valid),
        &ParseError::DuplicatePrefix(vec![PREFIX_HANDLE]).to_string(),
    );

    // multiple rooms
    assert_parse_failure(
        parse,
        &format!("{}{}", ROOM_DESC_AMY, valid),
        &ParseError::DuplicatePrefix(vec![PREFIX_ROOM]).to_string(),
    );

    // multiple fields repeated
    assert_parse_failure(
        parse,
        &format!("{}{}{}{}", valid, ROOM_DESC_AMY, HANDLE_DESC_AMY, NAME_DESC_AMY),
        &ParseError::DuplicatePrefix(vec![PREFIX_NAME, PREFIX_HANDLE, PREFIX_ROOM]).to_string(),
    );

    // invalid value followed by valid value
    assert_parse_failure(
        parse,
        &format!("{}{}", INVALID_NAME_DESC, valid),
        &ParseError::DuplicatePrefix(vec![PREFIX_NAME]).to_string(),
    );

    // valid value followed by invalid value
    assert_parse_failure(
        parse,
        &format!("{}{}", valid, INVALID_ROOM_DESC),
        &ParseError::DuplicatePrefix(vec![PREFIX_ROOM]).to_string(),
    );
}

#[test]
fn parse_compulsory_field_missing_failure() {
    // missing name prefix
    assert_parse_failure(
        parse,
        &format!("{}{}", HANDLE_DESC_BOB, ROOM_DESC_BOB),
        &invalid_format(),
    );

    // missing handle prefix
    assert_parse_failure(
        parse,
        &format!("{}{}", NAME_DESC_BOB, ROOM_DESC_BOB),
        &invalid_format(),
    );

    // missing room prefix
    assert_parse_failure(
        parse,
        &format!("{}{}", NAME_DESC_BOB, HANDLE_DESC_BOB),
        &invalid_format(),
    );

    // all prefixes missing
    assert_parse_failure(
        parse,
        &format!("{} {} {}", VALID_NAME_BOB, VALID_HANDLE_BOB, VALID_ROOM_BOB),
        &invalid_format(),
    );
}

#[test]
fn parse_invalid_value_failure() {
    assert_parse_failure(
        parse,
        &format!("{}{}{}", INVALID_NAME_DESC, HANDLE_DESC_BOB, ROOM_DESC_BOB),
        Name::MESSAGE_CONSTRAINTS,
    );
    assert_parse_failure(
        parse,
        &format!("{}{}{}", NAME_DESC_BOB, INVALID_HANDLE_DESC, ROOM_DESC_BOB),
        Handle::MESSAGE_CONSTRAINTS,
    );
    assert_parse_failure(
        parse,
        &format!("{}{}{}", NAME_DESC_BOB, HANDLE_DESC_BOB, INVALID_ROOM_DESC),
        Room::MESSAGE_CONSTRAINTS,
    );
    assert_parse_failure(
        parse,
        &format!("{}{}{}", bob_desc(), INVALID_TAG_DESC, TAG_DESC_FRIEND),
        Tag::MESSAGE_CONSTRAINTS,
    );

    // an empty tag is not a tag when adding
    assert_parse_failure(
        parse,
        &format!("{}{}", bob_desc(), TAG_EMPTY),
        Tag::MESSAGE_CONSTRAINTS,
    );

    // two invalid values, only first invalid value reported
    assert_parse_failure(
        parse,
        &format!("{}{}{}", INVALID_NAME_DESC, HANDLE_DESC_BOB, INVALID_ROOM_DESC),
        Name::MESSAGE_CONSTRAINTS,
    );

    // non-empty preamble
    assert_parse_failure(
        parse,
        &format!("{}{}{}", PREAMBLE_NON_EMPTY, bob_desc(), TAG_DESC_FRIEND),
        &invalid_format(),
    );
}
