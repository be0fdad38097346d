//! Output Formatting
//!
//! Formats command results, errors and member lists for display.

use super::colors::{Colors, Role};
use crate::commands::CommandResult;
use crate::error::LogicError;
use crate::model::Member;

/// Format a successful command's feedback
pub fn format_result(result: &CommandResult, colors: &Colors) -> String {
    colors.paint(Role::Feedback, &result.feedback)
}

/// Format a parse or execution failure
pub fn format_error(error: &LogicError, colors: &Colors) -> String {
    colors.paint(Role::Error, format_args!("(error) {}", error))
}

/// Numbered member list; numbers are the indices commands accept
pub fn format_members(members: &[&Member], colors: &Colors) -> String {
    if members.is_empty() {
        return colors.paint(Role::Notice, "(no members)");
    }

    members
        .iter()
        .enumerate()
        .map(|(i, member)| {
            format!("{} {}", colors.paint(Role::ListIndex, format_args!("{})", i + 1)), member)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseError;
    use crate::model::{Handle, Name, Room};
    use std::collections::BTreeSet;

    #[test]
    fn test_format_members_numbers_from_one() {
        let member = Member::new(
            Name::try_from("Amy Bee").unwrap(),
            Handle::try_from("amy").unwrap(),
            Room::try_from("4-15").unwrap(),
            BTreeSet::new(),
        );
        let colors = Colors::new(false);
        assert_eq!(
            format_members(&[&member, &member], &colors),
            "1) Amy Bee; Telegram: amy; Room: 4-15; Tags: \n2) Amy Bee; Telegram: amy; Room: 4-15; Tags: "
        );
        assert_eq!(format_members(&[], &colors), "(no members)");
    }

    #[test]
    fn test_format_error() {
        let colors = Colors::new(false);
        let error = LogicError::Parse(ParseError::UnknownCommand);
        assert_eq!(format_error(&error, &colors), "(error) Unknown command");
    }
}
