//! Model module for HallPointer.
//!
//! Member field types, the in-memory address book, and displayed-list indices.

pub mod address_book;
pub mod index;
pub mod member;
pub mod predicate;
pub mod sample;

// Re-export main types
pub use address_book::AddressBook;
pub use index::Index;
pub use member::{Handle, Member, Name, Room, Tag};
pub use predicate::NameContainsKeywords;
