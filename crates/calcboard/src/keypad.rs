//! Keypad layout
//!
//! The button grid shared by every front-end: which button sits where, which
//! [`InputEvent`] it sends, and which one is lit after a key press.
//!
//! ```text
//! [    AC    ] [DEL ] [ ÷  ]
//! [ 7  ] [ 8  ] [ 9  ] [ ×  ]
//! [ 4  ] [ 5  ] [ 6  ] [ −  ]
//! [ 1  ] [ 2  ] [ 3  ] [ +  ]
//! [ 0  ] [ .  ] [    =     ]
//! ```

use crate::core::Operation;
use crate::input::InputEvent;

/// Rectangle in terminal cells
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rect {
    /// Left column
    pub x: u16,
    /// Top row
    pub y: u16,
    /// Width in columns
    pub width: u16,
    /// Height in rows
    pub height: u16,
}

impl Rect {
    /// Creates a rectangle
    #[must_use]
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Returns the area inside a one-cell border
    #[must_use]
    pub const fn inner(&self) -> Self {
        Self {
            x: self.x.saturating_add(1),
            y: self.y.saturating_add(1),
            width: self.width.saturating_sub(2),
            height: self.height.saturating_sub(2),
        }
    }

    /// Returns true when the cell lies inside the rectangle
    #[must_use]
    pub const fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x
            && y >= self.y
            && (x - self.x) < self.width
            && (y - self.y) < self.height
    }

    /// First column past the right edge
    #[must_use]
    pub const fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    /// First row past the bottom edge
    #[must_use]
    pub const fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }
}

/// What a button does, used for styling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    /// A digit or the decimal point
    Digit,
    /// One of the four operators
    Operator,
    /// `=`
    Equals,
    /// `DEL`
    Delete,
    /// `AC`
    Clear,
}

/// A single keypad button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// Text drawn on the button
    pub label: &'static str,
    /// Event sent when the button is pressed
    pub event: InputEvent,
    /// Grid row
    pub row: usize,
    /// Leftmost grid column
    pub col: usize,
    /// Number of columns covered
    pub span: usize,
    /// Whether the button is currently highlighted
    pub pressed: bool,
}

impl KeypadButton {
    fn new(label: &'static str, event: InputEvent, row: usize, col: usize, span: usize) -> Self {
        Self {
            label,
            event,
            row,
            col,
            span,
            pressed: false,
        }
    }

    fn digit(label: &'static str, row: usize, col: usize) -> Self {
        let token = label.chars().next().unwrap_or('0');
        Self::new(label, InputEvent::Append(token), row, col, 1)
    }

    fn operator(op: Operation, row: usize) -> Self {
        Self::new(op.label(), InputEvent::Choose(op), row, 3, 1)
    }

    /// Returns the kind of button
    #[must_use]
    pub const fn kind(&self) -> ButtonKind {
        match self.event {
            InputEvent::Append(_) => ButtonKind::Digit,
            InputEvent::Choose(_) => ButtonKind::Operator,
            InputEvent::Compute => ButtonKind::Equals,
            InputEvent::Delete => ButtonKind::Delete,
            InputEvent::Clear => ButtonKind::Clear,
        }
    }

    /// Returns true when the button covers grid cell (row, col)
    #[must_use]
    pub const fn covers(&self, row: usize, col: usize) -> bool {
        self.row == row && col >= self.col && col < self.col + self.span
    }

    /// Sets the pressed state
    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }
}

/// The calculator keypad: 5 rows by 4 columns
#[derive(Debug, Clone)]
pub struct Keypad {
    buttons: Vec<KeypadButton>,
    rows: usize,
    cols: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard layout
    #[must_use]
    pub fn new() -> Self {
        let buttons = vec![
            KeypadButton::new("AC", InputEvent::Clear, 0, 0, 2),
            KeypadButton::new("DEL", InputEvent::Delete, 0, 2, 1),
            KeypadButton::operator(Operation::Divide, 0),
            KeypadButton::digit("7", 1, 0),
            KeypadButton::digit("8", 1, 1),
            KeypadButton::digit("9", 1, 2),
            KeypadButton::operator(Operation::Multiply, 1),
            KeypadButton::digit("4", 2, 0),
            KeypadButton::digit("5", 2, 1),
            KeypadButton::digit("6", 2, 2),
            KeypadButton::operator(Operation::Subtract, 2),
            KeypadButton::digit("1", 3, 0),
            KeypadButton::digit("2", 3, 1),
            KeypadButton::digit("3", 3, 2),
            KeypadButton::operator(Operation::Add, 3),
            KeypadButton::digit("0", 4, 0),
            KeypadButton::digit(".", 4, 1),
            KeypadButton::new("=", InputEvent::Compute, 4, 2, 2),
        ];
        Self {
            buttons,
            rows: 5,
            cols: 4,
        }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Gets a button by index
    #[must_use]
    pub fn get_button(&self, index: usize) -> Option<&KeypadButton> {
        self.buttons.get(index)
    }

    /// Returns an iterator over all buttons
    pub fn buttons(&self) -> impl Iterator<Item = &KeypadButton> {
        self.buttons.iter()
    }

    /// Finds the button covering grid cell (row, col)
    #[must_use]
    pub fn button_at(&self, row: usize, col: usize) -> Option<usize> {
        self.buttons.iter().position(|b| b.covers(row, col))
    }

    /// Finds the button sending `event`
    #[must_use]
    pub fn find_by_event(&self, event: InputEvent) -> Option<usize> {
        self.buttons.iter().position(|b| b.event == event)
    }

    /// Returns the index of the highlighted button
    #[must_use]
    pub fn pressed_button(&self) -> Option<usize> {
        self.buttons.iter().position(|b| b.pressed)
    }

    /// Highlights a button by index
    pub fn press_button(&mut self, index: usize) {
        if let Some(btn) = self.buttons.get_mut(index) {
            btn.set_pressed(true);
        }
    }

    /// Releases all buttons
    pub fn release_all(&mut self) {
        for btn in &mut self.buttons {
            btn.set_pressed(false);
        }
    }

    /// Highlights the button for `event`, releasing the others
    pub fn highlight(&mut self, event: InputEvent) {
        self.release_all();
        if let Some(idx) = self.find_by_event(event) {
            self.press_button(idx);
        }
    }

    /// Returns the cell area of a button inside a bordered keypad `area`
    #[must_use]
    pub fn button_rect(&self, area: Rect, index: usize) -> Option<Rect> {
        let btn = self.buttons.get(index)?;
        let (btn_width, btn_height) = self.cell_size(area)?;
        let inner = area.inner();
        Some(Rect::new(
            inner.x + to_u16(btn.col) * btn_width,
            inner.y + to_u16(btn.row) * btn_height,
            to_u16(btn.span) * btn_width,
            btn_height,
        ))
    }

    /// Converts a click position to a button index.
    ///
    /// `area` includes a one-cell border, which never hits a button.
    #[must_use]
    pub fn hit_test(&self, area: Rect, x: u16, y: u16) -> Option<usize> {
        let inner = area.inner();
        if !inner.contains(x, y) {
            return None;
        }
        let (btn_width, btn_height) = self.cell_size(area)?;
        let col = usize::from((x - inner.x) / btn_width);
        let row = usize::from((y - inner.y) / btn_height);
        if row < self.rows && col < self.cols {
            self.button_at(row, col)
        } else {
            None
        }
    }

    fn cell_size(&self, area: Rect) -> Option<(u16, u16)> {
        let inner = area.inner();
        let btn_width = inner.width / to_u16(self.cols);
        let btn_height = inner.height / to_u16(self.rows);
        (btn_width > 0 && btn_height > 0).then_some((btn_width, btn_height))
    }
}

fn to_u16(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== Layout tests =====

    #[test]
    fn test_keypad_dimensions() {
        let keypad = Keypad::new();
        assert_eq!(keypad.dimensions(), (5, 4));
        assert_eq!(keypad.button_count(), 18);
    }

    #[test]
    fn test_every_cell_covered_once() {
        let keypad = Keypad::new();
        for row in 0..5 {
            for col in 0..4 {
                let covering = keypad.buttons().filter(|b| b.covers(row, col)).count();
                assert_eq!(covering, 1, "cell ({row}, {col})");
            }
        }
    }

    #[test]
    fn test_spanning_buttons() {
        let keypad = Keypad::new();
        let ac = keypad.button_at(0, 1).and_then(|i| keypad.get_button(i)).unwrap();
        assert_eq!(ac.label, "AC");
        assert_eq!(ac.span, 2);
        let eq = keypad.button_at(4, 3).and_then(|i| keypad.get_button(i)).unwrap();
        assert_eq!(eq.event, InputEvent::Compute);
    }

    #[test]
    fn test_operator_column() {
        let keypad = Keypad::new();
        let labels: Vec<&str> = (0..4)
            .map(|row| keypad.get_button(keypad.button_at(row, 3).unwrap()).unwrap().label)
            .collect();
        assert_eq!(labels, vec!["÷", "×", "−", "+"]);
    }

    #[test]
    fn test_button_at_out_of_range() {
        let keypad = Keypad::new();
        assert_eq!(keypad.button_at(5, 0), None);
        assert_eq!(keypad.button_at(0, 4), None);
    }

    #[test]
    fn test_every_event_has_a_button() {
        let keypad = Keypad::new();
        for c in "0123456789.".chars() {
            assert!(keypad.find_by_event(InputEvent::Append(c)).is_some());
        }
        for op in Operation::ALL {
            assert!(keypad.find_by_event(InputEvent::Choose(op)).is_some());
        }
        for event in [InputEvent::Compute, InputEvent::Delete, InputEvent::Clear] {
            assert!(keypad.find_by_event(event).is_some());
        }
    }

    #[test]
    fn test_button_kinds() {
        let keypad = Keypad::new();
        let kind = |event| keypad.get_button(keypad.find_by_event(event).unwrap()).unwrap().kind();
        assert_eq!(kind(InputEvent::Append('5')), ButtonKind::Digit);
        assert_eq!(kind(InputEvent::Choose(Operation::Add)), ButtonKind::Operator);
        assert_eq!(kind(InputEvent::Compute), ButtonKind::Equals);
        assert_eq!(kind(InputEvent::Delete), ButtonKind::Delete);
        assert_eq!(kind(InputEvent::Clear), ButtonKind::Clear);
    }

    // ===== Highlight tests =====

    #[test]
    fn test_highlight_single_button() {
        let mut keypad = Keypad::new();
        keypad.highlight(InputEvent::Append('7'));
        let first = keypad.pressed_button().unwrap();
        keypad.highlight(InputEvent::Choose(Operation::Multiply));
        let second = keypad.pressed_button().unwrap();
        assert_ne!(first, second);
        assert_eq!(keypad.buttons().filter(|b| b.pressed).count(), 1);
    }

    #[test]
    fn test_release_all() {
        let mut keypad = Keypad::new();
        keypad.highlight(InputEvent::Compute);
        keypad.release_all();
        assert_eq!(keypad.pressed_button(), None);
    }

    #[test]
    fn test_press_button_out_of_range() {
        let mut keypad = Keypad::new();
        keypad.press_button(100);
        assert_eq!(keypad.pressed_button(), None);
    }

    // ===== Hit test tests =====

    // 4 columns of 6 and 5 rows of 2 inside the border
    fn area() -> Rect {
        Rect::new(10, 5, 26, 12)
    }

    #[test]
    fn test_hit_test_border_misses() {
        let keypad = Keypad::new();
        assert_eq!(keypad.hit_test(area(), 10, 5), None);
        assert_eq!(keypad.hit_test(area(), 35, 10), None);
        assert_eq!(keypad.hit_test(area(), 20, 16), None);
    }

    #[test]
    fn test_hit_test_outside_misses() {
        let keypad = Keypad::new();
        assert_eq!(keypad.hit_test(area(), 0, 0), None);
        assert_eq!(keypad.hit_test(area(), 100, 100), None);
    }

    #[test]
    fn test_hit_test_finds_buttons() {
        let keypad = Keypad::new();
        let event_at = |x, y| keypad.hit_test(area(), x, y).map(|i| keypad.get_button(i).unwrap().event);
        assert_eq!(event_at(11, 6), Some(InputEvent::Clear));
        assert_eq!(event_at(20, 6), Some(InputEvent::Clear));
        assert_eq!(event_at(23, 6), Some(InputEvent::Delete));
        assert_eq!(event_at(11, 8), Some(InputEvent::Append('7')));
        assert_eq!(event_at(30, 14), Some(InputEvent::Compute));
        assert_eq!(event_at(17, 14), Some(InputEvent::Append('.')));
    }

    #[test]
    fn test_hit_test_too_small() {
        let keypad = Keypad::new();
        assert_eq!(keypad.hit_test(Rect::new(0, 0, 4, 4), 1, 1), None);
    }

    #[test]
    fn test_button_rect_matches_hit_test() {
        let keypad = Keypad::new();
        for index in 0..keypad.button_count() {
            let rect = keypad.button_rect(area(), index).unwrap();
            assert_eq!(keypad.hit_test(area(), rect.x, rect.y), Some(index));
            assert_eq!(
                keypad.hit_test(area(), rect.right() - 1, rect.bottom() - 1),
                Some(index)
            );
        }
    }

    #[test]
    fn test_rect_contains() {
        let rect = Rect::new(2, 3, 4, 5);
        assert!(rect.contains(2, 3));
        assert!(rect.contains(5, 7));
        assert!(!rect.contains(6, 3));
        assert!(!rect.contains(1, 3));
        assert_eq!(rect.inner(), Rect::new(3, 4, 2, 3));
    }
}
