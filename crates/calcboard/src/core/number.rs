//! Conversions between entry strings and `f64`

use regex::Regex;
use std::sync::OnceLock;

/// Leading decimal literal: optional sign, digits with an optional fraction
/// (or a bare fraction), optional exponent.
const NUMERIC_PREFIX: &str = r"^\s*[+-]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?";

fn numeric_prefix() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    #[allow(clippy::expect_used)]
    PATTERN.get_or_init(|| Regex::new(NUMERIC_PREFIX).expect("numeric prefix pattern compiles"))
}

/// Parses the leading decimal number of `text`.
///
/// Trailing garbage is ignored (`"12abc"` is 12, `"5."` is 5); text that does
/// not start with a number, including `""` and `"."`, yields `None`.
#[must_use]
pub fn parse_decimal(text: &str) -> Option<f64> {
    let literal = numeric_prefix().find(text)?.as_str().trim_start();
    literal.parse::<f64>().ok()
}

/// Renders a finite value as the shortest string that parses back to it.
///
/// Values with magnitude in `[1e-6, 1e21)` use plain decimal notation,
/// others use exponent notation with an explicit exponent sign (`1e+21`,
/// `1.5e-7`). Negative zero renders as `"0"`.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return value.to_string();
    }
    let exponent_form = format!("{value:e}");
    match exponent_form.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => exponent_form,
    }
}

/// Returns true when the leading number of `text` is written in exponent
/// notation.
#[must_use]
pub fn is_exponent_notation(text: &str) -> bool {
    numeric_prefix()
        .find(text)
        .is_some_and(|literal| literal.as_str().contains(['e', 'E']))
}
