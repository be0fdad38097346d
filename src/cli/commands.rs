//! Shell Commands
//!
//! Banner, screen control and the `:`-prefixed commands handled by the shell
//! itself rather than the address book.

use super::colors::{Colors, Role};
use super::completer::get_command_help;
use crate::commands::CommandWord;
use std::io::{self, Write};

/// What the REPL should do after a shell command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellAction {
    Continue,
    Quit,
}

/// Print welcome banner
pub fn print_welcome(colors: &Colors) {
    println!(
        "{} - member directory for your hall",
        colors.paint(Role::Banner, "HallPointer v0.1.0")
    );
    println!(
        "{}",
        colors.paint(
            Role::Notice,
            "Type 'help' for commands, ':help' for shell commands, 'exit' to quit."
        )
    );
    println!();
}

/// Handle a `:`-prefixed shell command
pub fn handle_shell_command(input: &str, history: &[String], colors: &Colors) -> ShellAction {
    let cmd = input.trim_start_matches(':').trim();
    let (name, arg) = match cmd.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (cmd, ""),
    };

    match name {
        "q" | "q!" | "quit" => return ShellAction::Quit,
        "clear" | "cls" => clear_screen(),
        "help" | "h" => print_shell_help(colors),
        "commands" | "cmds" => print_commands(colors),
        "history" => print_history(history),
        "version" | "ver" => {
            println!("{}", colors.paint(Role::Usage, "HallPointer v0.1.0"));
        }
        "usage" => match get_command_help(arg) {
            Some(usage) => println!("{}", colors.paint(Role::Usage, usage)),
            None => println!(
                "{}",
                colors.paint(Role::Error, format_args!("Unknown command: {}", arg))
            ),
        },
        _ => {
            println!(
                "{}",
                colors.paint(Role::Error, format_args!("Unknown command: :{}", cmd))
            );
        }
    }
    ShellAction::Continue
}

/// Print shell command help
fn print_shell_help(colors: &Colors) {
    println!("{}", colors.paint(Role::Heading, "Shell Commands:"));
    println!("  :q, :quit       - Exit");
    println!("  :clear, :cls    - Clear screen");
    println!("  :help, :h       - Show this help");
    println!("  :commands       - List all commands");
    println!("  :usage <cmd>    - Show usage of a command");
    println!("  :history        - Show command history");
    println!("  :version        - Show version");
    println!();
    println!("{}", colors.paint(Role::Heading, "Editing:"));
    println!("  Ctrl+R          - Search history");
    println!("  Tab             - Auto-complete commands and prefixes");
    println!("  Ctrl+C          - Cancel input");
    println!("  Ctrl+D          - Exit");
}

/// List all commands with their parameters
fn print_commands(colors: &Colors) {
    for command in CommandWord::ALL {
        println!(
            "  {} {:<55} {}",
            colors.paint(Role::KnownWord, format_args!("{:<8}", command.as_str())),
            command.syntax(),
            colors.paint(Role::Hint, command.description())
        );
    }
}

/// Clear the terminal screen
pub fn clear_screen() {
    print!("\x1b[2J\x1b[H");
    io::stdout().flush().ok();
}

/// Print command history
pub fn print_history(history: &[String]) {
    for (i, cmd) in history.iter().enumerate() {
        println!("{:4}) {}", i + 1, cmd);
    }
}
