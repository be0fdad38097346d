//! Logic layer: parse a line, then run it against the address book.

use metrics::{counter, gauge, histogram};
use tracing::{debug, info};

use crate::commands::CommandResult;
use crate::error::LogicError;
use crate::model::{AddressBook, Member};
use crate::observability::metrics::{
    METRIC_COMMANDS_TOTAL, METRIC_COMMAND_ERRORS_TOTAL, METRIC_COMMAND_LATENCY,
    METRIC_MEMBERS_TOTAL, METRIC_PARSE_ERRORS_TOTAL,
};
use crate::parser;

/// Owns the address book for one session
pub struct Logic {
    address_book: AddressBook,
}

struct LatencyGuard {
    start: std::time::Instant,
}

impl Drop for LatencyGuard {
    fn drop(&mut self) {
        let duration = self.start.elapsed();
        histogram!(METRIC_COMMAND_LATENCY).record(duration.as_secs_f64());
    }
}

impl Logic {
    pub fn new(address_book: AddressBook) -> Self {
        Logic { address_book }
    }

    /// Parse and execute one command line.
    ///
    /// A line that fails to parse leaves the address book untouched.
    #[tracing::instrument(skip(self, command_text), fields(cmd))]
    pub fn execute(&mut self, command_text: &str) -> Result<CommandResult, LogicError> {
        counter!(METRIC_COMMANDS_TOTAL).increment(1);
        let _guard = LatencyGuard {
            start: std::time::Instant::now(),
        };

        let command = parser::parse_command(command_text).map_err(|e| {
            counter!(METRIC_PARSE_ERRORS_TOTAL).increment(1);
            debug!(error = %e, field = e.field().map(tracing::field::display), "parse failed");
            e
        })?;

        tracing::Span::current().record("cmd", command.word().as_str());
        info!("Executing command");

        let result = command.execute(&mut self.address_book).map_err(|e| {
            counter!(METRIC_COMMAND_ERRORS_TOTAL).increment(1);
            debug!(error = %e, "command failed");
            e
        })?;

        gauge!(METRIC_MEMBERS_TOTAL).set(self.address_book.len() as f64);
        Ok(result)
    }

    pub fn address_book(&self) -> &AddressBook {
        &self.address_book
    }

    /// Members the user currently sees; indices refer to this list
    pub fn displayed_members(&self) -> Vec<&Member> {
        self.address_book.displayed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CommandError, ParseError};
    use crate::model::Name;

    fn logic() -> Logic {
        Logic::new(AddressBook::new())
    }

    #[test]
    fn test_add_then_edit() {
        let mut logic = logic();
        logic.execute("add n/Amy Bee h/amy r/4-15 t/friend").unwrap();
        let result = logic.execute("edit 1 h/amy_bee t/").unwrap();
        assert!(result.feedback.starts_with("Edited Member: Amy Bee"));

        let member = logic.displayed_members()[0];
        assert_eq!(member.handle().as_str(), "amy_bee");
        assert!(member.tags().is_empty());
    }

    #[test]
    fn test_parse_error_leaves_book_untouched() {
        let mut logic = logic();
        let err = logic.execute("add n/Amy Bee h/@amy r/4-15").unwrap_err();
        assert!(matches!(err, LogicError::Parse(ParseError::ConstraintViolation(_))));
        assert!(logic.address_book().is_empty());
    }

    #[test]
    fn test_out_of_bounds_index_is_execution_error() {
        let mut logic = logic();
        assert_eq!(
            logic.execute("delete 1"),
            Err(LogicError::Command(CommandError::InvalidIndex))
        );
    }

    #[test]
    fn test_find_restricts_indices() {
        let mut logic = logic();
        logic.execute("add n/Amy Bee h/amy r/4-15").unwrap();
        logic.execute("add n/Bob Choo h/bob r/4-16").unwrap();
        logic.execute("find bob").unwrap();
        logic.execute("delete 1").unwrap();

        let names: Vec<&Name> = logic.address_book().members().iter().map(|m| m.name()).collect();
        assert_eq!(names.len(), 1);
        assert_eq!(names[0].as_str(), "Amy Bee");
        assert!(logic.displayed_members().is_empty());
    }
}
