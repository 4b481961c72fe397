//! calcboard - a two-line keypad calculator
//!
//! The crate is built around one small state machine ([`CalculatorState`]):
//! digits are typed into a current entry, an operator moves that entry into a
//! pending operand, and `=` collapses the pair into a single value. Operators
//! chain strictly left to right, so `2 + 3 * 4 =` shows `20`.
//!
//! Around the state machine sit a pure display formatter with locale digit
//! grouping, a keyboard/keypad event vocabulary, and (feature `tui`) a
//! crossterm keypad front-end.
//!
//! # Example
//!
//! ```rust
//! use calcboard::prelude::*;
//!
//! let mut calc = Calculator::new();
//! let lines = calc.replay([
//!     InputEvent::Append('2'),
//!     InputEvent::Choose(Operation::Add),
//!     InputEvent::Append('3'),
//!     InputEvent::Choose(Operation::Multiply),
//! ]);
//! assert_eq!(lines.previous, "5 *");
//! assert_eq!(lines.current, "0");
//!
//! let lines = calc.replay([InputEvent::Append('4'), InputEvent::Compute]);
//! assert_eq!(lines.current, "20");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

mod calculator;
pub mod config;
pub mod core;
pub mod display;
pub mod driver;
mod error;
pub mod input;
pub mod keypad;

#[cfg(feature = "tui")]
pub mod tui;

pub use calculator::Calculator;
pub use config::CalcConfig;
pub use core::{CalculatorState, Entry, Operation, ERROR_SENTINEL};
pub use display::{format_for_display, render_two_lines, DisplayLines, Grouping, NumberFormat};
pub use error::{CalcboardError, CalcboardResult};
pub use input::InputEvent;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::calculator::Calculator;
    pub use crate::config::CalcConfig;
    pub use crate::core::{CalculatorState, Entry, Operation, ERROR_SENTINEL};
    pub use crate::display::{
        format_for_display, render_two_lines, DisplayLines, Grouping, NumberFormat,
    };
    pub use crate::driver::CalculatorDriver;
    pub use crate::error::{CalcboardError, CalcboardResult};
    pub use crate::input::{parse_key_sequence, InputEvent};
    pub use crate::keypad::{Keypad, KeypadButton};

    #[cfg(feature = "tui")]
    pub use crate::driver::TuiDriver;
    #[cfg(feature = "tui")]
    pub use crate::tui::{CalculatorApp, InputHandler, KeyAction};
}
