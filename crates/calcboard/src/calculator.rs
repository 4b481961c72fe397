//! A calculator session: one state plus the number format it is shown with

use crate::core::CalculatorState;
use crate::display::{render_two_lines, DisplayLines, NumberFormat};
use crate::input::InputEvent;

/// Owns the state machine and renders it after every event
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    state: CalculatorState,
    format: NumberFormat,
}

impl Calculator {
    /// Creates a cleared calculator using `,` thousands grouping
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a cleared calculator with the given number format
    #[must_use]
    pub fn with_format(format: NumberFormat) -> Self {
        Self {
            state: CalculatorState::new(),
            format,
        }
    }

    /// Returns the state machine
    #[must_use]
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Returns the number format
    #[must_use]
    pub fn format(&self) -> &NumberFormat {
        &self.format
    }

    /// Replaces the number format; the state is untouched
    pub fn set_format(&mut self, format: NumberFormat) {
        self.format = format;
    }

    /// Applies one event and returns the refreshed display
    pub fn dispatch(&mut self, event: InputEvent) -> DisplayLines {
        event.apply(&mut self.state);
        let lines = self.display();
        tracing::trace!(
            %event,
            previous = %lines.previous,
            current = %lines.current,
            "dispatched"
        );
        lines
    }

    /// Renders the display without changing anything
    #[must_use]
    pub fn display(&self) -> DisplayLines {
        render_two_lines(&self.state, &self.format)
    }

    /// Dispatches every event in order and returns the final display
    pub fn replay<I>(&mut self, events: I) -> DisplayLines
    where
        I: IntoIterator<Item = InputEvent>,
    {
        for event in events {
            event.apply(&mut self.state);
        }
        self.display()
    }
}
