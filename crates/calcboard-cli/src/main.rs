//! calcboard: two-line keypad calculator for the terminal
//!
//! ## Usage
//!
//! ```bash
//! calcboard                        # Open the keypad
//! calcboard press 2+3*4=           # Replay keys, print both lines
//! calcboard format 1234567.5       # Format a value for the display
//! calcboard --locale de-DE config  # Show the resolved configuration
//! ```

use calcboard_cli::{
    handlers::{self, execute_config, execute_format, execute_press, execute_run},
    logging::{self, LogSettings},
    Cli, CliResult, Commands,
};
use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    let command = cli.command_or_default();

    logging::init(&LogSettings::from_cli(&cli, &command))?;
    let config = handlers::resolve_config(&cli)?;

    match command {
        Commands::Run(args) => execute_run(&config, &args),
        Commands::Press(args) => execute_press(&config, &args),
        Commands::Format(args) => {
            execute_format(&config, &args);
            Ok(())
        }
        Commands::Config(args) => execute_config(&config, &args),
    }
}
