//! CLI Arguments
//!
//! Command-line argument parsing for the `hallpointer` binary.

use std::path::PathBuf;

use clap::Parser;

/// HallPointer - keep track of the members of your hall
#[derive(Parser, Debug, Clone)]
#[command(name = "hallpointer")]
#[command(author = "HallPointer Contributors")]
#[command(version = "0.1.0")]
#[command(about = "Interactive member directory for residential halls", long_about = None)]
pub struct CliArgs {
    /// Path to a TOML configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Execute command and exit
    #[arg(short = 'c', long)]
    pub command: Option<String>,

    /// Read commands from stdin (pipe mode)
    #[arg(short = 'x', long)]
    pub pipe: bool,

    /// Echo each command in pipe mode
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Use vi key bindings
    #[arg(long)]
    pub vi: bool,

    /// Start with an empty address book instead of sample members
    #[arg(long)]
    pub empty: bool,
}
