//! Screen layout and rendering
//!
//! ```text
//! ┌─ calcboard ──────────────────────────┐
//! │                               1,234 +│
//! │                                    56│
//! └──────────────────────────────────────┘
//! ┌─ Keypad ─────────────────────────────┐
//! │ [    AC    ]  [DEL ]  [ ÷  ]         │
//! │ ...                                  │
//! └──────────────────────────────────────┘
//!  0-9 . +-*/ = Bksp:DEL Esc:AC q:quit
//! ```

use super::app::CalculatorApp;
use super::grid::{Rect, TextGrid, Tone};
use crate::core::ERROR_SENTINEL;
use crate::keypad::{ButtonKind, Keypad};

/// Widest the calculator is drawn
const MAX_WIDTH: u16 = 40;
/// Display box: border plus two lines
const DISPLAY_HEIGHT: u16 = 4;
/// Keypad box: border plus five rows of three
const MAX_KEYPAD_HEIGHT: u16 = 17;

const HELP_TEXT: &str = "0-9 . +-*/ = Bksp:DEL Esc:AC q:quit";

/// Where each part of the screen goes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Bordered box holding the two display lines
    pub display: Rect,
    /// Bordered keypad box
    pub keypad: Rect,
    /// Key help row, when shown
    pub help: Option<Rect>,
}

impl ScreenLayout {
    /// Computes the layout for a terminal of `width` by `height` cells
    #[must_use]
    pub fn compute(width: u16, height: u16, show_help: bool) -> Self {
        let content_width = width.min(MAX_WIDTH);
        let x = (width - content_width) / 2;
        let display = Rect::new(x, 0, content_width, DISPLAY_HEIGHT.min(height));

        let help_height = u16::from(show_help && height > DISPLAY_HEIGHT);
        let keypad_height = height
            .saturating_sub(DISPLAY_HEIGHT + help_height)
            .min(MAX_KEYPAD_HEIGHT);
        let keypad = Rect::new(x, display.bottom(), content_width, keypad_height);

        let help = (help_height == 1).then(|| Rect::new(x, keypad.bottom(), content_width, 1));
        Self {
            display,
            keypad,
            help,
        }
    }
}

/// Renders the whole application into `grid`
pub fn render(app: &CalculatorApp, grid: &mut TextGrid) {
    grid.clear();
    let layout = *app.layout();
    render_display(app, layout.display, grid);
    render_keypad(app.keypad(), layout.keypad, grid);
    if let Some(help) = layout.help {
        let text = fit_left(HELP_TEXT, usize::from(help.width));
        grid.write_str(help.x, help.y, &text, Tone::Muted);
    }
}

fn render_display(app: &CalculatorApp, area: Rect, grid: &mut TextGrid) {
    grid.draw_box(area, Some(" calcboard "), Tone::Muted);
    let inner = area.inner();
    if inner.width == 0 || inner.height == 0 {
        return;
    }
    let lines = app.display();
    let width = usize::from(inner.width);

    let previous = fit_right(&lines.previous, width);
    grid.write_str(
        right_aligned_x(inner, &previous),
        inner.y,
        &previous,
        Tone::Muted,
    );

    if inner.height > 1 {
        let current = fit_right(&lines.current, width);
        let tone = if lines.current == ERROR_SENTINEL {
            Tone::Danger
        } else {
            Tone::Accent
        };
        grid.write_str(right_aligned_x(inner, &current), inner.y + 1, &current, tone);
    }
}

fn render_keypad(keypad: &Keypad, area: Rect, grid: &mut TextGrid) {
    grid.draw_box(area, Some(" Keypad "), Tone::Muted);
    for (index, btn) in keypad.buttons().enumerate() {
        let Some(rect) = keypad.button_rect(area, index) else {
            return;
        };
        let tone = if btn.pressed {
            Tone::Highlight
        } else {
            match btn.kind() {
                ButtonKind::Digit => Tone::Normal,
                ButtonKind::Operator => Tone::Operator,
                ButtonKind::Equals => Tone::Accent,
                ButtonKind::Delete => Tone::Muted,
                ButtonKind::Clear => Tone::Danger,
            }
        };
        if btn.pressed {
            grid.fill_rect(rect, ' ', Tone::Highlight);
        }

        let label_width = u16::try_from(btn.label.chars().count()).unwrap_or(u16::MAX);
        let text = if rect.width >= label_width + 2 {
            format!("[{}]", btn.label)
        } else {
            btn.label.to_string()
        };
        let text_width = u16::try_from(text.chars().count()).unwrap_or(u16::MAX);
        let x = rect.x + rect.width.saturating_sub(text_width) / 2;
        let y = rect.y + rect.height / 2;
        let text = fit_left(&text, usize::from(rect.width));
        grid.write_str(x, y, &text, tone);
    }
}

fn right_aligned_x(area: Rect, text: &str) -> u16 {
    let len = u16::try_from(text.chars().count()).unwrap_or(u16::MAX);
    area.x + area.width.saturating_sub(len)
}

/// Keeps the rightmost characters, marking a cut with `…`
fn fit_right(text: &str, width: usize) -> String {
    let count = text.chars().count();
    if count <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let tail: String = text.chars().skip(count - (width - 1)).collect();
    format!("…{tail}")
}

/// Keeps the leftmost characters
fn fit_left(text: &str, width: usize) -> String {
    text.chars().take(width).collect()
}
