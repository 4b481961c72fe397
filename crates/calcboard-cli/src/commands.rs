//! CLI command definitions using clap

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// calcboard: a two-line keypad calculator for the terminal
#[derive(Parser, Debug)]
#[command(name = "calcboard")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log output format
    #[arg(long, value_enum, default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// Configuration file (default: ./calcboard.yaml when present)
    #[arg(long, env = "CALCBOARD_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Locale for digit grouping, e.g. de-DE or en_IN.UTF-8
    #[arg(long, global = true)]
    pub locale: Option<String>,

    /// Subcommand to run (default: run)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Returns the subcommand, `run` when none was given
    #[must_use]
    pub fn command_or_default(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or_else(|| Commands::Run(RunArgs::default()))
    }
}

/// CLI subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Open the interactive keypad
    Run(RunArgs),

    /// Replay keys headlessly and print both display lines
    ///
    /// Each argument is either a key name (Enter, Backspace, Esc) or a
    /// string of single-character keys such as `12+3=`.
    Press(PressArgs),

    /// Format values the way the display shows them
    Format(FormatArgs),

    /// Show configuration
    Config(ConfigArgs),
}

/// Arguments for the run command
#[derive(Args, Debug, Clone, Default)]
pub struct RunArgs {
    /// Write logs to this file (the screen itself is never logged to)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Do not capture the mouse
    #[arg(long)]
    pub no_mouse: bool,
}

/// Arguments for the press command
#[derive(Args, Debug, Clone)]
pub struct PressArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Keys to press, in order (put `--` before a token starting with `-`,
    /// such as `-3+2=`)
    #[arg(required = true, allow_negative_numbers = true)]
    pub keys: Vec<String>,
}

/// Arguments for the format command
#[derive(Args, Debug, Clone)]
pub struct FormatArgs {
    /// Raw values, e.g. 1234567.5
    #[arg(required = true, allow_negative_numbers = true)]
    pub values: Vec<String>,
}

/// Arguments for the config command
#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    /// Show the resolved configuration (the default)
    #[arg(long, conflicts_with = "default")]
    pub show: bool,

    /// Show the built-in defaults
    #[arg(long)]
    pub default: bool,
}

/// Output format for the press command
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Previous line, then current line
    #[default]
    Text,
    /// `{"previous": ..., "current": ...}`
    Json,
}

/// Log line format
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per line
    Json,
}
