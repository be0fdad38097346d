//! Command Syntax
//!
//! Prefix markers recognised inside command arguments.

use std::fmt;

/// A marker that introduces a field value, e.g. `h/`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Prefix(&'static str);

impl Prefix {
    pub const fn new(marker: &'static str) -> Self {
        Prefix(marker)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

pub const PREFIX_NAME: Prefix = Prefix::new("n/");
pub const PREFIX_HANDLE: Prefix = Prefix::new("h/");
pub const PREFIX_ROOM: Prefix = Prefix::new("r/");
pub const PREFIX_TAG: Prefix = Prefix::new("t/");

/// Every member field prefix, in field evaluation order
pub const MEMBER_PREFIXES: &[Prefix] = &[PREFIX_NAME, PREFIX_HANDLE, PREFIX_ROOM, PREFIX_TAG];

/// Member field prefixes that may appear at most once per command
pub const SINGLE_VALUED_PREFIXES: &[Prefix] = &[PREFIX_NAME, PREFIX_HANDLE, PREFIX_ROOM];
