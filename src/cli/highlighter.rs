//! Syntax Highlighting
//!
//! Color-codes commands as the user types.

use rustyline::highlight::Highlighter;
use std::borrow::Cow;

use super::colors::{Colors, Role};
use crate::commands::CommandWord;
use crate::parser::syntax::MEMBER_PREFIXES;

/// Syntax highlighter for commands
pub struct CommandHighlighter {
    colors: Colors,
}

impl CommandHighlighter {
    pub fn new(colors: Colors) -> Self {
        CommandHighlighter { colors }
    }
}

impl Highlighter for CommandHighlighter {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if !self.colors.enabled() || line.is_empty() {
            return Cow::Borrowed(line);
        }

        let (word, args) = line.split_at(line.find(char::is_whitespace).unwrap_or(line.len()));
        if word.is_empty() {
            return Cow::Borrowed(line);
        }

        if CommandWord::from_word(word).is_some() {
            let word = self.colors.paint(Role::KnownWord, word);
            Cow::Owned(format!("{}{}", word, highlight_args(args, &self.colors)))
        } else if CommandWord::ALL.iter().any(|c| c.as_str().starts_with(word)) {
            Cow::Owned(self.colors.paint(Role::PartialWord, line))
        } else {
            Cow::Owned(self.colors.paint(Role::UnknownWord, line))
        }
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        if !self.colors.enabled() {
            return Cow::Borrowed(hint);
        }
        Cow::Owned(self.colors.paint(Role::Hint, hint))
    }
}

/// Paint field prefixes, using the same boundary rule as the tokenizer
fn highlight_args(args: &str, colors: &Colors) -> String {
    let mut result = String::with_capacity(args.len());
    let mut rest = args;
    let mut at_boundary = true;

    while let Some(c) = rest.chars().next() {
        if at_boundary {
            if let Some(prefix) = MEMBER_PREFIXES.iter().find(|p| rest.starts_with(p.as_str())) {
                result.push_str(&colors.paint(Role::FieldPrefix, prefix));
                rest = &rest[prefix.len()..];
                at_boundary = false;
                continue;
            }
        }
        result.push(c);
        at_boundary = c.is_whitespace();
        rest = &rest[c.len_utf8()..];
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlight_args_colors_prefixes_only() {
        assert_eq!(
            highlight_args(" 1 h/amy xh/", &Colors::new(true)),
            " 1 \x1b[36mh/\x1b[0mamy xh/"
        );
    }

    #[test]
    fn test_highlight_command_word() {
        let highlighter = CommandHighlighter::new(Colors::new(true));
        assert_eq!(highlighter.highlight("list", 0), "\x1b[32mlist\x1b[0m");
        assert_eq!(highlighter.highlight("li", 0), "\x1b[33mli\x1b[0m");
        assert_eq!(highlighter.highlight("nope", 0), "\x1b[31mnope\x1b[0m");

        let plain = CommandHighlighter::new(Colors::new(false));
        assert_eq!(plain.highlight("list", 0), "list");
    }
}
