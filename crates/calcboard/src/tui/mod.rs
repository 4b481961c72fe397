//! Terminal keypad front-end
//!
//! A crossterm application in the alternate screen: the two display lines
//! in a box, the clickable keypad under them, keyboard shortcuts for every
//! button. Rendering goes through [`TextGrid`], so frames can be asserted
//! on without a terminal.

mod app;
mod grid;
mod input;
mod terminal;
mod ui;

pub use app::CalculatorApp;
pub use grid::{Cell, Rect, TextGrid, Tone};
pub use input::{InputHandler, KeyAction};
pub use terminal::{draw, run};
pub use ui::{render, ScreenLayout};
