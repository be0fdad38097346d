//! HallPointer - Main Entry Point

use std::process::ExitCode;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use hallpointer::cli::{
    colors::{Colors, Role},
    config::CliArgs,
    repl::{run_command, run_interactive, run_pipe},
};
use hallpointer::config::{Config, LoggingConfig};
use hallpointer::logic::Logic;
use hallpointer::model::{sample::sample_members, AddressBook};

fn init_logging(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let config = match &args.config {
        Some(path) => match Config::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Could not load config {}: {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => Config::default(),
    };

    init_logging(&config.logging);
    let colors = Colors::new(config.repl.colors && !args.no_color);

    let address_book = if config.repl.sample_data && !args.empty {
        AddressBook::with_members(sample_members())
    } else {
        AddressBook::new()
    };
    info!(members = address_book.len(), "Address book ready");
    let mut logic = Logic::new(address_book);

    let result = if args.pipe {
        run_pipe(&mut logic, &args, &colors)
    } else if let Some(ref cmd) = args.command {
        Ok(run_command(&mut logic, cmd, &colors))
    } else {
        run_interactive(&mut logic, &args, &config.repl, &colors).map(|_| true)
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("{}", colors.paint(Role::Error, format_args!("Error: {}", e)));
            ExitCode::FAILURE
        }
    }
}
