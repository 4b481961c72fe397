//! Display formatting
//!
//! Turns raw entry strings into what the two display lines show: the integer
//! part grouped with a locale separator, the fractional digits kept exactly
//! as typed.

use crate::core::number::{is_exponent_notation, parse_decimal};
use crate::core::{CalculatorState, ERROR_SENTINEL};
use serde::{Deserialize, Serialize};

/// Narrow no-break space, the French group separator
const NARROW_NBSP: &str = "\u{202F}";
/// No-break space, used by most Nordic and Slavic locales
const NBSP: &str = "\u{00A0}";
/// Swiss apostrophe
const SWISS_APOSTROPHE: &str = "\u{2019}";

/// How integer digits are split into groups
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Grouping {
    /// Groups of three: `1,234,567`
    #[default]
    Thousands,
    /// Last three, then groups of two: `12,34,567`
    Indian,
    /// No grouping
    None,
}

/// Integer grouping rules for one locale
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberFormat {
    /// Text inserted between groups
    pub separator: String,
    /// Group sizes
    pub grouping: Grouping,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::new(",", Grouping::Thousands)
    }
}

impl NumberFormat {
    /// Creates a format from a separator and a grouping
    #[must_use]
    pub fn new(separator: impl Into<String>, grouping: Grouping) -> Self {
        Self {
            separator: separator.into(),
            grouping,
        }
    }

    /// Format used when no locale is known
    #[must_use]
    pub fn en_us() -> Self {
        Self::default()
    }

    /// Resolves a BCP-47 (`de-CH`) or POSIX (`de_CH.UTF-8`) locale tag.
    ///
    /// Unknown languages fall back to `,` in groups of three.
    #[must_use]
    pub fn for_locale(tag: &str) -> Self {
        let (language, region) = split_locale_tag(tag);
        match (language.as_str(), region.as_deref()) {
            ("en", Some("IN")) | ("hi" | "bn" | "ta" | "te" | "mr", _) => {
                Self::new(",", Grouping::Indian)
            }
            ("de" | "it", Some("CH")) => Self::new(SWISS_APOSTROPHE, Grouping::Thousands),
            (
                "de" | "es" | "it" | "nl" | "pt" | "da" | "id" | "tr" | "el" | "ro" | "hr" | "sl",
                _,
            ) => Self::new(".", Grouping::Thousands),
            ("fr", _) => Self::new(NARROW_NBSP, Grouping::Thousands),
            (
                "sv" | "nb" | "no" | "fi" | "pl" | "cs" | "sk" | "ru" | "uk" | "hu" | "bg" | "lt"
                | "lv" | "et",
                _,
            ) => Self::new(NBSP, Grouping::Thousands),
            _ => Self::default(),
        }
    }

    /// Resolves the locale from `LC_ALL`, `LC_NUMERIC` or `LANG`, in that
    /// order, returning `None` when none of them is set.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let tag = env_locale()?;
        tracing::debug!(locale = %tag, "number format from environment");
        Some(Self::for_locale(&tag))
    }

    /// Inserts separators into a string of ASCII digits
    #[must_use]
    pub fn group_integer(&self, digits: &str) -> String {
        let len = digits.len();
        let boundaries: Vec<usize> = match self.grouping {
            Grouping::None => Vec::new(),
            Grouping::Thousands => (1..len).filter(|i| (len - i) % 3 == 0).collect(),
            Grouping::Indian => {
                if len <= 3 {
                    Vec::new()
                } else {
                    let head = len - 3;
                    let mut cuts: Vec<usize> = (1..head).filter(|i| (head - i) % 2 == 0).collect();
                    cuts.push(head);
                    cuts
                }
            }
        };

        let mut out = String::with_capacity(len + boundaries.len() * self.separator.len());
        let mut start = 0;
        for cut in boundaries {
            out.push_str(&digits[start..cut]);
            out.push_str(&self.separator);
            start = cut;
        }
        out.push_str(&digits[start..]);
        out
    }
}

fn env_locale() -> Option<String> {
    ["LC_ALL", "LC_NUMERIC", "LANG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find(|value| !value.trim().is_empty())
}

/// Splits a locale tag into a lowercase language and an uppercase region
fn split_locale_tag(tag: &str) -> (String, Option<String>) {
    let base = tag
        .split(['.', '@'])
        .next()
        .unwrap_or_default()
        .trim();
    let mut parts = base.split(['-', '_']);
    let language = parts.next().unwrap_or_default().to_ascii_lowercase();
    let region = parts
        .find(|part| part.len() == 2 && part.chars().all(|c| c.is_ascii_alphabetic()))
        .map(str::to_ascii_uppercase);
    (language, region)
}

/// Formats a raw entry or operand string for the display.
///
/// - `""` stays `""` and the error sentinel stays as is
/// - text that is not a number is returned unchanged, as is a number in
///   exponent notation with a fractional part (`1.5e-7`)
/// - otherwise the integer part of the parsed value is grouped and, when the
///   value has a fractional part, the digits after the first `.` are appended
///   verbatim
///
/// Typed integer digits are kept as is while they agree with the parsed
/// value, so long integers show every digit.
#[must_use]
pub fn format_for_display(value: &str, format: &NumberFormat) -> String {
    if value.is_empty() {
        return String::new();
    }
    if value == ERROR_SENTINEL {
        return ERROR_SENTINEL.to_string();
    }
    let Some(number) = parse_decimal(value) else {
        return value.to_string();
    };
    let has_fraction = number.fract() != 0.0;
    let exponent = is_exponent_notation(value);
    if exponent && has_fraction {
        return value.to_string();
    }

    let literal = value.trim_start();
    let negative = literal.starts_with('-');
    let integer_digits = if exponent {
        parsed_integer_digits(number)
    } else {
        typed_integer_digits(literal, number)
    };

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&format.group_integer(&integer_digits));

    if has_fraction {
        if let Some(fraction) = value.split('.').nth(1) {
            out.push('.');
            out.push_str(fraction);
        }
    }
    out
}

/// Integer digits of `|number|` in plain notation
fn parsed_integer_digits(number: f64) -> String {
    format!("{:.0}", number.trunc().abs())
}

/// Integer digits as typed, or the parsed ones when a fraction rounded into
/// the integer part (`12.99999999999999999` is 13)
fn typed_integer_digits(literal: &str, number: f64) -> String {
    let unsigned = literal.trim_start_matches(['+', '-']);
    let typed: String = unsigned.chars().take_while(char::is_ascii_digit).collect();
    let typed = typed.trim_start_matches('0');
    let typed = if typed.is_empty() { "0" } else { typed };
    match typed.parse::<f64>() {
        Ok(parsed) if parsed == number.trunc().abs() => typed.to_string(),
        _ => parsed_integer_digits(number),
    }
}

/// The two display lines
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DisplayLines {
    /// Pending operand and operator symbol, or empty
    pub previous: String,
    /// Current entry, `"0"` when nothing is entered
    pub current: String,
}

/// Renders the state into the two display lines
#[must_use]
pub fn render_two_lines(state: &CalculatorState, format: &NumberFormat) -> DisplayLines {
    let current = if state.entry().is_empty() {
        "0".to_string()
    } else {
        format_for_display(state.current_entry(), format)
    };
    let previous = match state.pending_operation() {
        Some(op) if !state.pending_operand().is_empty() => format!(
            "{} {}",
            format_for_display(state.pending_operand(), format),
            op.symbol()
        ),
        _ => String::new(),
    };
    DisplayLines { previous, current }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Operation;

    fn en() -> NumberFormat {
        NumberFormat::en_us()
    }

    // ===== format_for_display tests =====

    #[test]
    fn test_format_empty() {
        assert_eq!(format_for_display("", &en()), "");
    }

    #[test]
    fn test_format_error_sentinel() {
        assert_eq!(format_for_display("Error", &en()), "Error");
    }

    #[test]
    fn test_format_groups_thousands() {
        assert_eq!(format_for_display("1234567", &en()), "1,234,567");
        assert_eq!(format_for_display("1000", &en()), "1,000");
        assert_eq!(format_for_display("999", &en()), "999");
    }

    #[test]
    fn test_format_keeps_fraction_verbatim() {
        assert_eq!(format_for_display("1234567.5", &en()), "1,234,567.5");
        assert_eq!(format_for_display("0.05", &en()), "0.05");
        assert_eq!(format_for_display("12.50", &en()), "12.50");
    }

    #[test]
    fn test_format_drops_zero_fraction() {
        assert_eq!(format_for_display("12.", &en()), "12");
        assert_eq!(format_for_display("12.000", &en()), "12");
        assert_eq!(format_for_display("0.", &en()), "0");
    }

    #[test]
    fn test_format_leading_point() {
        assert_eq!(format_for_display(".5", &en()), "0.5");
    }

    #[test]
    fn test_format_negative_keeps_sign() {
        assert_eq!(format_for_display("-1234.25", &en()), "-1,234.25");
        assert_eq!(format_for_display("-0.5", &en()), "-0.5");
    }

    #[test]
    fn test_format_unparseable_unchanged() {
        assert_eq!(format_for_display(".", &en()), ".");
        assert_eq!(format_for_display("abc", &en()), "abc");
    }

    #[test]
    fn test_format_small_exponent_unchanged() {
        assert_eq!(format_for_display("1.5e-7", &en()), "1.5e-7");
        assert_eq!(format_for_display("1e-7", &en()), "1e-7");
    }

    #[test]
    fn test_format_large_exponent_expanded() {
        assert_eq!(
            format_for_display("1e+21", &en()),
            "1,000,000,000,000,000,000,000"
        );
        assert_eq!(
            format_for_display("2.5e+22", &en()),
            "25,000,000,000,000,000,000,000"
        );
        assert_eq!(
            format_for_display("-1e+21", &en()),
            "-1,000,000,000,000,000,000,000"
        );
    }

    #[test]
    fn test_format_fraction_rounding_into_integer() {
        assert_eq!(format_for_display("12.99999999999999999", &en()), "13");
        assert_eq!(format_for_display("-12.99999999999999999", &en()), "-13");
        assert_eq!(format_for_display("999.99999999999999999", &en()), "1,000");
    }

    #[test]
    fn test_format_long_integer_exact() {
        let digits = "12345678901234567890123";
        assert_eq!(
            format_for_display(digits, &en()),
            "12,345,678,901,234,567,890,123"
        );
    }

    // ===== NumberFormat tests =====

    #[test]
    fn test_group_indian() {
        let format = NumberFormat::new(",", Grouping::Indian);
        assert_eq!(format.group_integer("1234567"), "12,34,567");
        assert_eq!(format.group_integer("123456"), "1,23,456");
        assert_eq!(format.group_integer("1234"), "1,234");
        assert_eq!(format.group_integer("123"), "123");
    }

    #[test]
    fn test_group_none() {
        let format = NumberFormat::new(",", Grouping::None);
        assert_eq!(format.group_integer("1234567"), "1234567");
    }

    #[test]
    fn test_group_multichar_separator() {
        let format = NumberFormat::new(NARROW_NBSP, Grouping::Thousands);
        assert_eq!(format.group_integer("1234567"), "1\u{202F}234\u{202F}567");
    }

    #[test]
    fn test_for_locale_english() {
        assert_eq!(NumberFormat::for_locale("en-US"), en());
        assert_eq!(NumberFormat::for_locale("en_GB.UTF-8"), en());
        assert_eq!(NumberFormat::for_locale("C"), en());
        assert_eq!(NumberFormat::for_locale("ja-JP"), en());
    }

    #[test]
    fn test_for_locale_unknown_falls_back() {
        assert_eq!(NumberFormat::for_locale("xx-YY"), en());
        assert_eq!(NumberFormat::for_locale(""), en());
    }

    #[test]
    fn test_for_locale_german() {
        let format = NumberFormat::for_locale("de_DE.UTF-8");
        assert_eq!(format.separator, ".");
        assert_eq!(format_for_display("1234567.5", &format), "1.234.567.5");
    }

    #[test]
    fn test_for_locale_swiss() {
        assert_eq!(NumberFormat::for_locale("de-CH").separator, "\u{2019}");
        assert_eq!(NumberFormat::for_locale("it_CH").separator, "\u{2019}");
        assert_eq!(NumberFormat::for_locale("fr-CH").separator, NARROW_NBSP);
    }

    #[test]
    fn test_for_locale_indian() {
        assert_eq!(NumberFormat::for_locale("en-IN").grouping, Grouping::Indian);
        assert_eq!(NumberFormat::for_locale("hi_IN").grouping, Grouping::Indian);
        assert_eq!(NumberFormat::for_locale("en-AU").grouping, Grouping::Thousands);
    }

    #[test]
    fn test_for_locale_space_separators() {
        assert_eq!(NumberFormat::for_locale("fr-FR").separator, NARROW_NBSP);
        assert_eq!(NumberFormat::for_locale("ru_RU.UTF-8").separator, NBSP);
        assert_eq!(NumberFormat::for_locale("sv-SE").separator, NBSP);
    }

    #[test]
    fn test_split_locale_tag() {
        assert_eq!(
            split_locale_tag("de_CH.UTF-8@euro"),
            ("de".to_string(), Some("CH".to_string()))
        );
        assert_eq!(
            split_locale_tag("zh-Hant-TW"),
            ("zh".to_string(), Some("TW".to_string()))
        );
        assert_eq!(split_locale_tag("C"), ("c".to_string(), None));
    }

    #[test]
    fn test_grouping_serde() {
        let grouping: Grouping = serde_yaml_ng::from_str("indian").unwrap();
        assert_eq!(grouping, Grouping::Indian);
    }

    // ===== render_two_lines tests =====

    #[test]
    fn test_render_cleared() {
        let lines = render_two_lines(&CalculatorState::new(), &en());
        assert_eq!(lines.previous, "");
        assert_eq!(lines.current, "0");
    }

    #[test]
    fn test_render_pending_operation() {
        let mut state = CalculatorState::new();
        for key in "1234".chars() {
            state.append_digit(key);
        }
        state.choose_operation(Operation::Divide);
        state.append_digit('5');
        let lines = render_two_lines(&state, &en());
        assert_eq!(lines.previous, "1,234 /");
        assert_eq!(lines.current, "5");
    }

    #[test]
    fn test_render_error() {
        let mut state = CalculatorState::new();
        state.append_digit('5');
        state.choose_operation(Operation::Divide);
        state.append_digit('0');
        state.compute();
        let lines = render_two_lines(&state, &en());
        assert_eq!(lines.previous, "");
        assert_eq!(lines.current, "Error");
    }

    #[test]
    fn test_display_lines_serialize() {
        let lines = DisplayLines {
            previous: "5 *".to_string(),
            current: "4".to_string(),
        };
        let json = serde_json::to_string(&lines).unwrap();
        assert_eq!(json, r#"{"previous":"5 *","current":"4"}"#);
    }
}
