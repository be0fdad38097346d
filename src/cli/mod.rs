//! HallPointer CLI Library
//!
//! Interactive shell for the address book.

pub mod colors;
pub mod commands;
pub mod completer;
pub mod config;
pub mod highlighter;
pub mod hinter;
pub mod output;
pub mod repl;

// Re-export main helper for editors
pub use rustyline;
