//! Format command handler

use crate::commands::FormatArgs;
use calcboard::{format_for_display, CalcConfig, NumberFormat};

/// Execute the format command
pub fn execute_format(config: &CalcConfig, args: &FormatArgs) {
    let format = config.number_format();
    tracing::debug!(separator = %format.separator, grouping = ?format.grouping, "formatting");
    for line in format_values(&format, &args.values) {
        println!("{line}");
    }
}

/// Formats each value for the display
#[must_use]
pub fn format_values(format: &NumberFormat, values: &[String]) -> Vec<String> {
    values
        .iter()
        .map(|value| format_for_display(value, format))
        .collect()
}
