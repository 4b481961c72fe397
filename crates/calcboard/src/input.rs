//! Input events
//!
//! The vocabulary shared by the keyboard, the keypad and headless replay.
//! Every event maps to exactly one state-machine call.

use crate::core::{CalculatorState, Operation};
use crate::error::{CalcboardError, CalcboardResult};
use serde::{Deserialize, Serialize};

/// A discrete calculator input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type", content = "value")]
pub enum InputEvent {
    /// A digit `0`-`9` or the decimal point
    Append(char),
    /// An operator key
    Choose(Operation),
    /// `=` or Enter
    Compute,
    /// Backspace
    Delete,
    /// All-clear
    Clear,
}

impl InputEvent {
    /// Maps a key name to an event.
    ///
    /// Single characters are digits, `.`, operator symbols (`+ - * /` and
    /// `− × ÷`) or `=`. Named keys (`Enter`, `Backspace`, `Escape`/`Esc`) are
    /// matched case-insensitively.
    #[must_use]
    pub fn from_key(name: &str) -> Option<Self> {
        let mut chars = name.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Self::from_char(c);
        }
        match name.to_ascii_lowercase().as_str() {
            "enter" | "return" => Some(Self::Compute),
            "backspace" => Some(Self::Delete),
            "escape" | "esc" => Some(Self::Clear),
            _ => None,
        }
    }

    /// Maps a single typed character to an event
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0'..='9' | '.' => Some(Self::Append(c)),
            '=' => Some(Self::Compute),
            _ => Operation::from_symbol(c.encode_utf8(&mut [0; 4])).map(Self::Choose),
        }
    }

    /// Runs the matching state-machine operation
    pub fn apply(self, state: &mut CalculatorState) {
        match self {
            Self::Append(token) => state.append_digit(token),
            Self::Choose(op) => state.choose_operation(op),
            Self::Compute => state.compute(),
            Self::Delete => state.delete(),
            Self::Clear => state.clear(),
        }
    }
}

impl std::fmt::Display for InputEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Append(c) => write!(f, "{c}"),
            Self::Choose(op) => write!(f, "{op}"),
            Self::Compute => f.write_str("="),
            Self::Delete => f.write_str("Backspace"),
            Self::Clear => f.write_str("Escape"),
        }
    }
}

/// Turns command-line key tokens into events.
///
/// A token naming a key (`Enter`, `Esc`, `7`) is one event; any other token
/// is read one character at a time, skipping whitespace, so `"12+3="` is
/// five events.
///
/// # Errors
///
/// Returns [`CalcboardError::UnknownKey`] for a character that is not a
/// calculator key.
pub fn parse_key_sequence<I, S>(tokens: I) -> CalcboardResult<Vec<InputEvent>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut events = Vec::new();
    for token in tokens {
        let token = token.as_ref();
        if let Some(event) = InputEvent::from_key(token) {
            events.push(event);
            continue;
        }
        for c in token.chars().filter(|c| !c.is_whitespace()) {
            let event = InputEvent::from_char(c).ok_or_else(|| {
                if token.chars().count() > 1 && token.chars().all(char::is_alphabetic) {
                    CalcboardError::unknown_key(token)
                } else {
                    CalcboardError::unknown_key(c.to_string())
                }
            })?;
            events.push(event);
        }
    }
    Ok(events)
}
