//! Keyboard input handling
//!
//! Maps crossterm key events onto calculator input events.

use crate::input::InputEvent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a key press asks the application to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Feed an event to the calculator
    Input(InputEvent),
    /// Quit the application
    Quit,
    /// No action (ignored input)
    None,
}

/// Input handler that maps key events to actions
#[derive(Debug, Default, Clone, Copy)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Maps a key event to an action
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyAction {
        let KeyEvent {
            code,
            modifiers,
            kind,
            ..
        } = event;

        if kind == KeyEventKind::Release {
            return KeyAction::None;
        }

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                _ => KeyAction::None,
            };
        }

        match code {
            KeyCode::Char('q' | 'Q') => KeyAction::Quit,
            KeyCode::Char(c) => InputEvent::from_char(c).map_or(KeyAction::None, KeyAction::Input),
            KeyCode::Enter => KeyAction::Input(InputEvent::Compute),
            KeyCode::Backspace => KeyAction::Input(InputEvent::Delete),
            KeyCode::Esc => KeyAction::Input(InputEvent::Clear),
            _ => KeyAction::None,
        }
    }

    /// Builds the key event that produces `event`
    #[must_use]
    pub fn key_for(event: InputEvent) -> KeyEvent {
        let code = match event {
            InputEvent::Append(c) => KeyCode::Char(c),
            InputEvent::Choose(op) => KeyCode::Char(op.symbol().chars().next().unwrap_or('+')),
            InputEvent::Compute => KeyCode::Enter,
            InputEvent::Delete => KeyCode::Backspace,
            InputEvent::Clear => KeyCode::Esc,
        };
        KeyEvent::new(code, KeyModifiers::NONE)
    }
}
