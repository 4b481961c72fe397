//! Command handlers - one module per subcommand
//!
//! Handlers build their output as strings so it can be tested without a
//! process; `execute_*` functions print it.

pub mod config;
pub mod format;
pub mod press;
pub mod run;

pub use config::execute_config;
pub use format::execute_format;
pub use press::execute_press;
pub use run::execute_run;

use crate::commands::Cli;
use crate::error::CliResult;
use calcboard::CalcConfig;

/// Loads the configuration and applies command-line overrides
///
/// # Errors
///
/// Returns an error if a config file exists but cannot be read or parsed.
pub fn resolve_config(cli: &Cli) -> CliResult<CalcConfig> {
    let cwd = std::env::current_dir()?;
    let config = CalcConfig::discover(cli.config.as_deref(), &cwd)?;
    Ok(apply_overrides(config, cli))
}

/// Applies `--locale`
#[must_use]
pub fn apply_overrides(config: CalcConfig, cli: &Cli) -> CalcConfig {
    match &cli.locale {
        Some(locale) => {
            tracing::debug!(%locale, "locale from command line");
            config.with_locale(locale.clone())
        }
        None => config,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_locale_override() {
        let cli = Cli::parse_from(["calcboard", "--locale", "fr-FR", "config"]);
        let config = apply_overrides(CalcConfig::default().with_locale("de-DE"), &cli);
        assert_eq!(config.locale.as_deref(), Some("fr-FR"));
    }

    #[test]
    fn test_no_override_keeps_file_locale() {
        let cli = Cli::parse_from(["calcboard", "config"]);
        let config = apply_overrides(CalcConfig::default().with_locale("de-DE"), &cli);
        assert_eq!(config.locale.as_deref(), Some("de-DE"));
    }
}
