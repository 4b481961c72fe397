//! Press command handler

use crate::commands::{OutputFormat, PressArgs};
use crate::error::CliResult;
use calcboard::input::parse_key_sequence;
use calcboard::{CalcConfig, Calculator, DisplayLines, NumberFormat};
use console::style;

/// Execute the press command
pub fn execute_press(config: &CalcConfig, args: &PressArgs) -> CliResult<()> {
    let lines = press_keys(config.number_format(), &args.keys)?;
    let styled = console::colors_enabled() && console::Term::stdout().is_term();
    println!("{}", render_output(&lines, args.format, styled)?);
    Ok(())
}

/// Replays key tokens on a fresh calculator
pub fn press_keys(format: NumberFormat, keys: &[String]) -> CliResult<DisplayLines> {
    let events = parse_key_sequence(keys)?;
    tracing::info!(count = events.len(), "replaying keys");
    let mut calc = Calculator::with_format(format);
    Ok(calc.replay(events))
}

/// Renders both lines as text (previous, then current) or as JSON
pub fn render_output(lines: &DisplayLines, format: OutputFormat, styled: bool) -> CliResult<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string(lines)?),
        OutputFormat::Text => Ok(format!(
            "{}\n{}",
            style(&lines.previous).dim().force_styling(styled),
            style(&lines.current).bold().force_styling(styled)
        )),
    }
}
