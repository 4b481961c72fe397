//! Logging setup
//!
//! The filter comes from `CALCBOARD_LOG` when set, otherwise from the `-v`
//! count. Headless commands log to stderr; the interactive keypad owns the
//! screen, so it logs to `--log-file` or not at all.

use crate::commands::{Cli, Commands, LogFormat};
use crate::error::{CliError, CliResult};
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a filter directive such as `calcboard=debug`
pub const LOG_ENV: &str = "CALCBOARD_LOG";

/// Where log lines go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Standard error
    Stderr,
    /// Appended to a file
    File(PathBuf),
    /// Nowhere
    Off,
}

/// Resolved logging settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    /// Filter directive used when `CALCBOARD_LOG` is unset
    pub directive: &'static str,
    /// Line format
    pub format: LogFormat,
    /// Destination
    pub target: LogTarget,
}

impl LogSettings {
    /// Derives settings from the parsed command line
    #[must_use]
    pub fn from_cli(cli: &Cli, command: &Commands) -> Self {
        let target = match command {
            Commands::Run(args) => args
                .log_file
                .clone()
                .map_or(LogTarget::Off, LogTarget::File),
            _ => LogTarget::Stderr,
        };
        Self {
            directive: default_directive(cli.verbose, cli.quiet),
            format: cli.log_format,
            target,
        }
    }

    fn filter(&self) -> CliResult<EnvFilter> {
        match std::env::var(LOG_ENV) {
            Ok(value) if !value.trim().is_empty() => EnvFilter::try_new(&value)
                .map_err(|e| CliError::invalid_argument(format!("{LOG_ENV}={value}: {e}"))),
            _ => EnvFilter::try_new(self.directive).map_err(|e| CliError::logging(e.to_string())),
        }
    }
}

/// Maps `-q` and the `-v` count to a level
#[must_use]
pub const fn default_directive(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Installs the global subscriber
///
/// # Errors
///
/// Returns an error if the filter is invalid, the log file cannot be
/// opened, or a subscriber is already installed.
pub fn init(settings: &LogSettings) -> CliResult<()> {
    let path = match &settings.target {
        LogTarget::Off => return Ok(()),
        LogTarget::Stderr => None,
        LogTarget::File(path) => Some(path),
    };
    let filter = settings.filter()?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let result = match (path, settings.format) {
        (None, LogFormat::Text) => builder.with_writer(std::io::stderr).try_init(),
        (None, LogFormat::Json) => builder.json().with_writer(std::io::stderr).try_init(),
        (Some(path), format) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            let builder = builder.with_ansi(false).with_writer(Mutex::new(file));
            match format {
                LogFormat::Text => builder.try_init(),
                LogFormat::Json => builder.json().try_init(),
            }
        }
    };
    result.map_err(|e| CliError::logging(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{PressArgs, RunArgs};
    use clap::Parser;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(0, false), "warn");
        assert_eq!(default_directive(1, false), "info");
        assert_eq!(default_directive(2, false), "debug");
        assert_eq!(default_directive(3, false), "trace");
        assert_eq!(default_directive(9, false), "trace");
        assert_eq!(default_directive(0, true), "error");
    }

    #[test]
    fn test_run_without_log_file_is_silent() {
        let cli = Cli::parse_from(["calcboard"]);
        let settings = LogSettings::from_cli(&cli, &cli.command_or_default());
        assert_eq!(settings.target, LogTarget::Off);
    }

    #[test]
    fn test_run_with_log_file() {
        let cli = Cli::parse_from(["calcboard", "-v"]);
        let command = Commands::Run(RunArgs {
            log_file: Some(PathBuf::from("calc.log")),
            no_mouse: false,
        });
        let settings = LogSettings::from_cli(&cli, &command);
        assert_eq!(settings.target, LogTarget::File(PathBuf::from("calc.log")));
        assert_eq!(settings.directive, "info");
    }

    #[test]
    fn test_headless_logs_to_stderr() {
        let cli = Cli::parse_from(["calcboard", "-q", "--log-format", "json"]);
        let command = Commands::Press(PressArgs {
            format: crate::commands::OutputFormat::Text,
            keys: vec!["1".to_string()],
        });
        let settings = LogSettings::from_cli(&cli, &command);
        assert_eq!(settings.target, LogTarget::Stderr);
        assert_eq!(settings.directive, "error");
        assert_eq!(settings.format, LogFormat::Json);
    }

    #[test]
    fn test_init_off_is_noop() {
        let settings = LogSettings {
            directive: "warn",
            format: LogFormat::Text,
            target: LogTarget::Off,
        };
        assert!(init(&settings).is_ok());
    }
}
