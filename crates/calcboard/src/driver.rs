//! Front-end independent scenarios
//!
//! The same key sequences must produce the same two display lines whether
//! they are fed straight into a [`Calculator`] or typed into the terminal
//! app. Scenarios are written once against [`CalculatorDriver`] and run
//! against every implementation.

use crate::calculator::Calculator;
use crate::core::ERROR_SENTINEL;
use crate::error::CalcboardResult;
use crate::input::{parse_key_sequence, InputEvent};

/// Something that accepts calculator input and shows two display lines
pub trait CalculatorDriver {
    /// Sends one input event
    fn press(&mut self, event: InputEvent);

    /// Returns the previous (pending operand) line
    fn previous_line(&self) -> String;

    /// Returns the current entry line
    fn current_line(&self) -> String;

    /// Sends every key of a key string such as `"12+3="`
    ///
    /// # Errors
    ///
    /// Returns an error for keys that are not calculator keys.
    fn press_keys(&mut self, keys: &str) -> CalcboardResult<()> {
        for event in parse_key_sequence([keys])? {
            self.press(event);
        }
        Ok(())
    }

    /// Presses all-clear
    fn clear(&mut self) {
        self.press(InputEvent::Clear);
    }
}

impl CalculatorDriver for Calculator {
    fn press(&mut self, event: InputEvent) {
        self.dispatch(event);
    }

    fn previous_line(&self) -> String {
        self.display().previous
    }

    fn current_line(&self) -> String {
        self.display().current
    }
}

/// Terminal driver
#[cfg(feature = "tui")]
pub mod tui_driver {
    use super::CalculatorDriver;
    use crate::input::InputEvent;
    use crate::tui::{render, CalculatorApp, InputHandler, TextGrid};

    /// Drives [`CalculatorApp`] with synthetic key events
    #[derive(Debug, Default)]
    pub struct TuiDriver {
        app: CalculatorApp,
    }

    impl TuiDriver {
        /// Creates a driver around a fresh app
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Creates a driver around an existing app
        #[must_use]
        pub fn with_app(app: CalculatorApp) -> Self {
            Self { app }
        }

        /// Returns the underlying app
        #[must_use]
        pub fn app(&self) -> &CalculatorApp {
            &self.app
        }

        /// Returns the underlying app mutably
        pub fn app_mut(&mut self) -> &mut CalculatorApp {
            &mut self.app
        }

        /// Renders the current frame as text lines
        #[must_use]
        pub fn screen(&self) -> Vec<String> {
            let (width, height) = self.app.size();
            let mut grid = TextGrid::new(width, height);
            render(&self.app, &mut grid);
            grid.to_lines()
        }
    }

    impl CalculatorDriver for TuiDriver {
        fn press(&mut self, event: InputEvent) {
            self.app.handle_key(InputHandler::key_for(event));
        }

        fn previous_line(&self) -> String {
            self.app.display().previous
        }

        fn current_line(&self) -> String {
            self.app.display().current
        }
    }
}

#[cfg(feature = "tui")]
pub use tui_driver::TuiDriver;

// ===== Shared scenarios =====
// Each one starts by clearing, so they can run in any order.

/// Digits build exactly the typed sequence without a spurious leading zero
pub fn verify_digit_entry<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    press(driver, "05");
    assert_eq!(driver.current_line(), "5");

    driver.clear();
    press(driver, "50");
    assert_eq!(driver.current_line(), "50");

    driver.clear();
    press(driver, "000");
    assert_eq!(driver.current_line(), "0");

    driver.clear();
    press(driver, "1.2.3");
    assert_eq!(driver.current_line(), "1.23");
}

/// Re-pressing an operator with an empty entry only swaps the operator
pub fn verify_operator_swap<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    press(driver, "7+-");
    assert_eq!(driver.previous_line(), "7 -");
    assert_eq!(driver.current_line(), "0");
}

/// Operators chain strictly left to right
pub fn verify_left_to_right_chaining<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    press(driver, "2+3*");
    assert_eq!(driver.previous_line(), "5 *");
    press(driver, "4=");
    assert_eq!(driver.previous_line(), "");
    assert_eq!(driver.current_line(), "20");
}

/// Each operation computes pending ∘ current
pub fn verify_basic_arithmetic<D: CalculatorDriver>(driver: &mut D) {
    for (keys, expected) in [
        ("2+3=", "5"),
        ("10-4=", "6"),
        ("4-10=", "-6"),
        ("6*7=", "42"),
        ("20/4=", "5"),
        ("1/4=", "0.25"),
    ] {
        driver.clear();
        press(driver, keys);
        assert_eq!(driver.current_line(), expected, "{keys}");
    }
}

/// Division by zero shows the sentinel until delete or clear
pub fn verify_division_by_zero<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    press(driver, "5/0=");
    assert_eq!(driver.current_line(), ERROR_SENTINEL);
    assert_eq!(driver.previous_line(), "");

    press(driver, "=7+");
    assert_eq!(driver.current_line(), ERROR_SENTINEL);

    driver.press(InputEvent::Delete);
    assert_eq!(driver.current_line(), "0");
    press(driver, "3");
    assert_eq!(driver.current_line(), "3");
}

/// Integer digits are grouped, fractional digits kept verbatim
pub fn verify_grouping<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    press(driver, "1234567");
    assert_eq!(driver.current_line(), "1,234,567");
    press(driver, ".5");
    assert_eq!(driver.current_line(), "1,234,567.5");
    press(driver, "+");
    assert_eq!(driver.previous_line(), "1,234,567.5 +");
}

/// Clear always returns to the empty display; delete on empty does nothing
pub fn verify_clear_and_delete<D: CalculatorDriver>(driver: &mut D) {
    press(driver, "9*8");
    driver.clear();
    assert_eq!(driver.previous_line(), "");
    assert_eq!(driver.current_line(), "0");

    driver.press(InputEvent::Delete);
    assert_eq!(driver.previous_line(), "");
    assert_eq!(driver.current_line(), "0");

    press(driver, "123");
    driver.press(InputEvent::Delete);
    assert_eq!(driver.current_line(), "12");
}

/// Runs every scenario
pub fn run_all_scenarios<D: CalculatorDriver>(driver: &mut D) {
    verify_digit_entry(driver);
    verify_operator_swap(driver);
    verify_left_to_right_chaining(driver);
    verify_basic_arithmetic(driver);
    verify_division_by_zero(driver);
    verify_grouping(driver);
    verify_clear_and_delete(driver);
}

#[allow(clippy::panic)]
fn press<D: CalculatorDriver>(driver: &mut D, keys: &str) {
    if let Err(e) = driver.press_keys(keys) {
        panic!("scenario keys {keys:?} rejected: {e}");
    }
}
