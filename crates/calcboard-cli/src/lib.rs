//! calcboard CLI library
//!
//! Argument parsing, logging setup and one handler per subcommand for the
//! `calcboard` binary.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::format_push_string)]
#![allow(clippy::missing_errors_doc)]

mod commands;
pub mod error;
pub mod handlers;
pub mod logging;

pub use commands::{
    Cli, Commands, ConfigArgs, FormatArgs, LogFormat, OutputFormat, PressArgs, RunArgs,
};
pub use error::{CliError, CliResult};
