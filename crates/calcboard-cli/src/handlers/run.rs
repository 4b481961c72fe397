//! Run command handler

use crate::commands::RunArgs;
use crate::error::CliResult;
use calcboard::tui::{self, CalculatorApp};
use calcboard::CalcConfig;

/// Execute the run command: the interactive keypad
pub fn execute_run(config: &CalcConfig, args: &RunArgs) -> CliResult<()> {
    let mouse = mouse_enabled(config, args);
    let mut app = CalculatorApp::from_config(config);
    tracing::info!(mouse, show_help = config.show_help, "starting keypad");
    tui::run(&mut app, mouse)?;
    tracing::info!(current = %app.display().current, "keypad closed");
    Ok(())
}

/// Mouse capture is on unless the config or `--no-mouse` turns it off
#[must_use]
pub fn mouse_enabled(config: &CalcConfig, args: &RunArgs) -> bool {
    config.mouse && !args.no_mouse
}
