mod common;

use common::*;

use hallpointer::logic::Logic;
use hallpointer::model::{sample::sample_members, AddressBook};
use hallpointer::{CommandError, LogicError, ParseError};

fn logic_with_amy() -> Logic {
    let book = AddressBook::with_members(vec![member(
        VALID_NAME_AMY,
        VALID_HANDLE_AMY,
        VALID_ROOM_AMY,
        &[VALID_TAG_FRIEND],
    )]);
    Logic::new(book)
}

#[test]
fn add_then_edit_then_delete() {
    let mut logic = Logic::new(AddressBook::new());

    let added = logic
        .execute("add n/Bob Choo h/bob_choo r/3-1-105 t/husband")
        .unwrap();
    assert!(added.feedback.starts_with("New member added: Bob Choo"));
    assert_eq!(logic.address_book().len(), 1);

    logic.execute("edit 1 r/4-15 t/").unwrap();
    let edited = &logic.address_book().members()[0];
    assert_eq!(edited.room().as_str(), "4-15");
    assert!(edited.tags().is_empty());
    assert_eq!(edited.handle().as_str(), "bob_choo");

    logic.execute("delete 1").unwrap();
    assert!(logic.address_book().is_empty());
}

#[test]
fn parse_failure_leaves_book_untouched() {
    let mut logic = logic_with_amy();
    let before = logic.address_book().members().to_vec();

    let err = logic.execute("edit 1 h/@a h/@b").unwrap_err();
    assert!(matches!(err, LogicError::Parse(ParseError::DuplicatePrefix(_))));
    assert_eq!(logic.address_book().members(), before.as_slice());
}

#[test]
fn out_of_range_index_is_a_command_error() {
    let mut logic = logic_with_amy();

    let err = logic.execute("edit 2 n/Bob Choo").unwrap_err();
    assert_eq!(err, LogicError::Command(CommandError::InvalidIndex));

    let err = logic.execute("delete 5").unwrap_err();
    assert_eq!(err, LogicError::Command(CommandError::InvalidIndex));
}

#[test]
fn adding_same_member_twice_is_rejected() {
    let mut logic = logic_with_amy();
    let err = logic
        .execute("add n/Amy Bee h/other r/1-1")
        .unwrap_err();
    assert_eq!(err, LogicError::Command(CommandError::DuplicateMember));
}

#[test]
fn find_narrows_displayed_members() {
    let mut logic = Logic::new(AddressBook::with_members(sample_members()));
    let total = logic.address_book().len();

    let result = logic.execute("find zzzz").unwrap();
    assert_eq!(result.feedback, "0 members listed!");
    assert!(logic.displayed_members().is_empty());

    logic.execute("list").unwrap();
    assert_eq!(logic.displayed_members().len(), total);
}

#[test]
fn unknown_and_blank_lines() {
    let mut logic = logic_with_amy();
    assert_eq!(logic.execute("frobnicate").unwrap_err().to_string(), "Unknown command");
    assert!(matches!(
        logic.execute("   ").unwrap_err(),
        LogicError::Parse(ParseError::InvalidFormat(_))
    ));
}

#[test]
fn exit_requests_shutdown() {
    let mut logic = logic_with_amy();
    let result = logic.execute("exit").unwrap();
    assert!(result.exit);
}
