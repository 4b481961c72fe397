//! Terminal application state

use super::input::{InputHandler, KeyAction};
use super::ui::ScreenLayout;
use crate::calculator::Calculator;
use crate::config::CalcConfig;
use crate::display::DisplayLines;
use crate::input::InputEvent;
use crate::keypad::Keypad;
use crossterm::event::KeyEvent;

/// Calculator application: the session, the keypad and screen geometry
#[derive(Debug)]
pub struct CalculatorApp {
    calculator: Calculator,
    keypad: Keypad,
    input: InputHandler,
    layout: ScreenLayout,
    size: (u16, u16),
    show_help: bool,
    should_quit: bool,
}

impl Default for CalculatorApp {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorApp {
    /// Creates an app with `,` thousands grouping and an 80x24 layout
    #[must_use]
    pub fn new() -> Self {
        Self::with_calculator(Calculator::new(), true)
    }

    /// Creates an app from a resolved configuration
    #[must_use]
    pub fn from_config(config: &CalcConfig) -> Self {
        Self::with_calculator(
            Calculator::with_format(config.number_format()),
            config.show_help,
        )
    }

    /// Creates an app around an existing calculator
    #[must_use]
    pub fn with_calculator(calculator: Calculator, show_help: bool) -> Self {
        let size = (80, 24);
        Self {
            calculator,
            keypad: Keypad::new(),
            input: InputHandler::new(),
            layout: ScreenLayout::compute(size.0, size.1, show_help),
            size,
            show_help,
            should_quit: false,
        }
    }

    /// Returns the calculator session
    #[must_use]
    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    /// Returns the keypad
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Returns the current screen layout
    #[must_use]
    pub fn layout(&self) -> &ScreenLayout {
        &self.layout
    }

    /// Returns the terminal size the layout was computed for
    #[must_use]
    pub fn size(&self) -> (u16, u16) {
        self.size
    }

    /// Returns the two display lines
    #[must_use]
    pub fn display(&self) -> DisplayLines {
        self.calculator.display()
    }

    /// Returns whether the help row is shown
    #[must_use]
    pub fn show_help(&self) -> bool {
        self.show_help
    }

    /// Shows or hides the help row
    pub fn set_show_help(&mut self, show_help: bool) {
        self.show_help = show_help;
        self.resize(self.size.0, self.size.1);
    }

    /// Returns whether the app should quit
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Recomputes the layout for a new terminal size
    pub fn resize(&mut self, width: u16, height: u16) {
        self.size = (width, height);
        self.layout = ScreenLayout::compute(width, height, self.show_help);
    }

    /// Feeds one event to the calculator and lights its keypad button
    pub fn press(&mut self, event: InputEvent) -> DisplayLines {
        self.keypad.highlight(event);
        self.calculator.dispatch(event)
    }

    /// Handles a key press, returning the action taken
    pub fn handle_key(&mut self, key: KeyEvent) -> KeyAction {
        let action = self.input.handle_key(key);
        match action {
            KeyAction::Input(event) => {
                self.press(event);
            }
            KeyAction::Quit => self.quit(),
            KeyAction::None => {}
        }
        action
    }

    /// Handles a left click at terminal cell (x, y).
    ///
    /// Returns the event of the button that was hit.
    pub fn handle_click(&mut self, x: u16, y: u16) -> Option<InputEvent> {
        let index = self.keypad.hit_test(self.layout.keypad, x, y)?;
        let event = self.keypad.get_button(index)?.event;
        tracing::debug!(x, y, %event, "keypad click");
        self.press(event);
        Some(event)
    }
}
