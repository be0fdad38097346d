//! Interactive REPL
//!
//! Line-editing shell with history, auto-complete, hints and highlighting,
//! plus single-command and pipe modes.

use std::io::{self, BufRead};
use std::path::Path;

use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Config as EditorConfig;
use rustyline::{Completer, EditMode, Editor, Helper, Highlighter, Hinter, Validator};
use tracing::{debug, warn};

use super::colors::{Colors, Role};
use super::commands::{handle_shell_command, print_welcome, ShellAction};
use super::completer::CommandCompleter;
use super::config::CliArgs;
use super::highlighter::CommandHighlighter;
use super::hinter::CommandHinter;
use super::output::{format_error, format_members, format_result};
use crate::config::{EditModeSetting, ReplConfig};
use crate::logic::Logic;

/// Combined helper for rustyline
#[derive(Completer, Helper, Highlighter, Hinter, Validator)]
pub struct CliHelper {
    #[rustyline(Completer)]
    completer: CommandCompleter,
    #[rustyline(Highlighter)]
    highlighter: CommandHighlighter,
    #[rustyline(Hinter)]
    hinter: CommandHinter,
}

impl CliHelper {
    pub fn new(colors: Colors) -> Self {
        CliHelper {
            completer: CommandCompleter,
            highlighter: CommandHighlighter::new(colors),
            hinter: CommandHinter,
        }
    }
}

/// Create the directory holding `history`. Returns whether it exists.
fn ensure_history_dir(history: &Path) -> bool {
    let Some(parent) = history.parent() else {
        return true;
    };
    match std::fs::create_dir_all(parent) {
        Ok(()) => true,
        Err(e) => {
            debug!("Could not create history directory {}: {}", parent.display(), e);
            false
        }
    }
}

fn readline_error(err: ReadlineError) -> io::Error {
    io::Error::other(err.to_string())
}

/// Run one line through the logic layer and print the outcome.
///
/// Returns `(succeeded, exit_requested)`.
fn run_line(logic: &mut Logic, line: &str, colors: &Colors) -> (bool, bool) {
    match logic.execute(line) {
        Ok(result) => {
            println!("{}", format_result(&result, colors));
            if result.show_list {
                println!("{}", format_members(&logic.displayed_members(), colors));
            }
            (true, result.exit)
        }
        Err(e) => {
            println!("{}", format_error(&e, colors));
            (false, false)
        }
    }
}

/// Run the interactive shell until `exit`, `:q` or Ctrl-D
pub fn run_interactive(
    logic: &mut Logic,
    args: &CliArgs,
    config: &ReplConfig,
    colors: &Colors,
) -> io::Result<()> {
    let edit_mode = if args.vi || config.edit_mode == EditModeSetting::Vi {
        EditMode::Vi
    } else {
        EditMode::Emacs
    };

    // Configure rustyline
    let editor_config = EditorConfig::builder()
        .history_ignore_space(true)
        .completion_type(rustyline::CompletionType::List)
        .edit_mode(edit_mode)
        .auto_add_history(true)
        .max_history_size(config.max_history_size)
        .map_err(readline_error)?
        .build();

    let mut rl: Editor<CliHelper, DefaultHistory> =
        Editor::with_config(editor_config).map_err(readline_error)?;
    rl.set_helper(Some(CliHelper::new(*colors)));

    // Load history
    let history_path = config.history_path();
    if let Some(path) = &history_path {
        ensure_history_dir(path);
        if let Err(e) = rl.load_history(path) {
            debug!("No history loaded from {}: {}", path.display(), e);
        }
    }

    print_welcome(colors);
    println!("{}", format_members(&logic.displayed_members(), colors));

    loop {
        match rl.readline(&config.prompt) {
            Ok(line) => {
                let input = line.trim();
                if input.is_empty() {
                    continue;
                }

                if input.starts_with(':') {
                    let history: Vec<String> = rl.history().iter().cloned().collect();
                    if handle_shell_command(input, &history, colors) == ShellAction::Quit {
                        break;
                    }
                    continue;
                }

                let (_, exit) = run_line(logic, input, colors);
                if exit {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl-C
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => {
                // Ctrl-D
                break;
            }
            Err(err) => {
                println!("{}", colors.paint(Role::Error, format_args!("Error: {:?}", err)));
                break;
            }
        }
    }

    // Save history
    if let Some(path) = &history_path {
        if let Err(e) = rl.save_history(path) {
            warn!("Failed to save history to {}: {}", path.display(), e);
        }
    }

    Ok(())
}

/// Run a single command. Returns whether it succeeded.
pub fn run_command(logic: &mut Logic, command: &str, colors: &Colors) -> bool {
    let (succeeded, _) = run_line(logic, command, colors);
    succeeded
}

/// Run in pipe mode (read commands from stdin). Returns whether every
/// command succeeded.
pub fn run_pipe(logic: &mut Logic, args: &CliArgs, colors: &Colors) -> io::Result<bool> {
    let mut all_succeeded = true;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if args.verbose {
            println!("> {}", line);
        }

        let (succeeded, exit) = run_line(logic, line, colors);
        all_succeeded &= succeeded;
        if exit {
            break;
        }
    }

    Ok(all_succeeded)
}
