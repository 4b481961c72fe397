//! Character grid the screen is rendered into.
//!
//! Each cell holds a character and a [`Tone`]; the terminal loop maps tones
//! to colors, tests read the grid back as plain lines.

pub use crate::keypad::Rect;

/// Semantic color of a cell
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tone {
    /// Default foreground
    #[default]
    Normal,
    /// Dimmed text: borders, previous line, help row
    Muted,
    /// The current entry and `=`
    Accent,
    /// Operator buttons
    Operator,
    /// The error sentinel and `AC`
    Danger,
    /// A highlighted (pressed) button
    Highlight,
}

/// One grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// Character shown
    pub ch: char,
    /// Color of the character
    pub tone: Tone,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            tone: Tone::Normal,
        }
    }
}

/// Fixed-size character grid with row-major storage
#[derive(Debug, Clone)]
pub struct TextGrid {
    cells: Vec<Cell>,
    width: u16,
    height: u16,
}

impl TextGrid {
    /// Create a grid filled with blank cells.
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        let size = usize::from(width) * usize::from(height);
        Self {
            cells: vec![Cell::default(); size],
            width,
            height,
        }
    }

    /// Get the width of the grid.
    #[inline]
    #[must_use]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Get the height of the grid.
    #[inline]
    #[must_use]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// The whole grid as a rectangle
    #[must_use]
    pub const fn area(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    fn index(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| usize::from(y) * usize::from(self.width) + usize::from(x))
    }

    /// Get the cell at (x, y).
    #[must_use]
    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set the cell at (x, y); out-of-bounds writes are dropped.
    pub fn set(&mut self, x: u16, y: u16, ch: char, tone: Tone) {
        if let Some(idx) = self.index(x, y) {
            self.cells[idx] = Cell { ch, tone };
        }
    }

    /// Change only the tone of the cell at (x, y).
    pub fn set_tone(&mut self, x: u16, y: u16, tone: Tone) {
        if let Some(idx) = self.index(x, y) {
            self.cells[idx].tone = tone;
        }
    }

    /// Clear the grid.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    /// Resize the grid. Content is cleared.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.cells.clear();
        self.cells
            .resize(usize::from(width) * usize::from(height), Cell::default());
    }

    /// Write a string starting at (x, y), truncated at the grid edge.
    pub fn write_str(&mut self, x: u16, y: u16, s: &str, tone: Tone) {
        let mut pos_x = x;
        for ch in s.chars() {
            if pos_x >= self.width {
                break;
            }
            self.set(pos_x, y, ch, tone);
            pos_x += 1;
        }
    }

    /// Fill a rectangle with one character.
    pub fn fill_rect(&mut self, rect: Rect, ch: char, tone: Tone) {
        for row in rect.y..rect.bottom().min(self.height) {
            for col in rect.x..rect.right().min(self.width) {
                self.set(col, row, ch, tone);
            }
        }
    }

    /// Draw a single-line border around `rect` with an optional title.
    pub fn draw_box(&mut self, rect: Rect, title: Option<&str>, tone: Tone) {
        if rect.width < 2 || rect.height < 2 {
            return;
        }
        let right = rect.right() - 1;
        let bottom = rect.bottom() - 1;
        for col in rect.x + 1..right {
            self.set(col, rect.y, '─', tone);
            self.set(col, bottom, '─', tone);
        }
        for row in rect.y + 1..bottom {
            self.set(rect.x, row, '│', tone);
            self.set(right, row, '│', tone);
        }
        self.set(rect.x, rect.y, '┌', tone);
        self.set(right, rect.y, '┐', tone);
        self.set(rect.x, bottom, '└', tone);
        self.set(right, bottom, '┘', tone);

        if let Some(title) = title {
            let room = usize::from(rect.width.saturating_sub(4));
            let title: String = title.chars().take(room).collect();
            self.write_str(rect.x + 2, rect.y, &title, tone);
        }
    }

    /// Iterate over one row of cells.
    pub fn row(&self, y: u16) -> impl Iterator<Item = &Cell> {
        let start = usize::from(y.min(self.height)) * usize::from(self.width);
        let end = if y < self.height {
            start + usize::from(self.width)
        } else {
            start
        };
        self.cells[start..end].iter()
    }

    /// Convert the grid to lines with trailing spaces trimmed.
    #[must_use]
    pub fn to_lines(&self) -> Vec<String> {
        (0..self.height)
            .map(|y| {
                let line: String = self.row(y).map(|cell| cell.ch).collect();
                line.trim_end().to_string()
            })
            .collect()
    }

    /// Whole grid as one string, lines joined with `\n`.
    #[must_use]
    pub fn as_text(&self) -> String {
        self.to_lines().join("\n")
    }
}

impl Default for TextGrid {
    fn default() -> Self {
        Self::new(80, 24)
    }
}
