//! Terminal Colors
//!
//! The shell paints text by what it means, not by hue. Each `Role` owns one
//! ANSI style, so the highlighter and the printers cannot drift apart.

use std::fmt::Display;

const RESET: &str = "\x1b[0m";

/// What a piece of terminal text represents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Feedback from a command that succeeded
    Feedback,
    /// Parse or execution failures
    Error,
    /// Informational notes such as an empty list
    Notice,
    /// The `1)` before each listed member
    ListIndex,
    /// Section titles in shell help
    Heading,
    Banner,
    /// Usage text and version output
    Usage,
    /// A complete, recognised command word
    KnownWord,
    /// A prefix of at least one command word
    PartialWord,
    UnknownWord,
    /// A field marker such as `h/`
    FieldPrefix,
    /// Inline hints and command descriptions
    Hint,
}

impl Role {
    fn style(self) -> &'static str {
        match self {
            Role::Feedback | Role::KnownWord => "\x1b[32m",
            Role::Error | Role::UnknownWord => "\x1b[31m",
            Role::Notice | Role::PartialWord => "\x1b[33m",
            Role::ListIndex | Role::Heading => "\x1b[1m",
            Role::Banner => "\x1b[1;36m",
            Role::Usage | Role::FieldPrefix => "\x1b[36m",
            Role::Hint => "\x1b[2m",
        }
    }
}

/// Role-based painter; a no-op when colors are disabled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Colors {
    enabled: bool,
}

impl Colors {
    pub fn new(enabled: bool) -> Self {
        Colors { enabled }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Wrap `text` in the style for `role`
    pub fn paint(&self, role: Role, text: impl Display) -> String {
        if self.enabled {
            format!("{}{}{}", role.style(), text, RESET)
        } else {
            text.to_string()
        }
    }
}
