//! Terminal event loop
//!
//! Raw mode, alternate screen and (optionally) mouse capture are held by a
//! guard, so the terminal is restored on every exit path.

use super::app::CalculatorApp;
use super::grid::{TextGrid, Tone};
use super::ui::render;
use crate::error::{CalcboardError, CalcboardResult};
use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::style::{
    Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
};
use crossterm::terminal::{
    self, disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::{execute, queue};
use std::io::{self, Write};

/// Restores the terminal when dropped
#[derive(Debug)]
struct TerminalGuard {
    mouse: bool,
}

impl TerminalGuard {
    fn enter(mouse: bool) -> io::Result<Self> {
        enable_raw_mode()?;
        let guard = Self { mouse };
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, Hide)?;
        if mouse {
            execute!(stdout, EnableMouseCapture)?;
        }
        tracing::debug!(mouse, "terminal entered raw mode");
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        if self.mouse {
            let _ = execute!(stdout, DisableMouseCapture);
        }
        let _ = execute!(stdout, ResetColor, Show, LeaveAlternateScreen);
        let _ = disable_raw_mode();
        tracing::debug!("terminal restored");
    }
}

/// Runs the interactive keypad until the user quits
///
/// # Errors
///
/// Returns [`CalcboardError::Terminal`] if the terminal cannot be set up,
/// drawn to, or read from.
pub fn run(app: &mut CalculatorApp, mouse: bool) -> CalcboardResult<()> {
    let _guard = TerminalGuard::enter(mouse).map_err(CalcboardError::Terminal)?;
    event_loop(app).map_err(CalcboardError::Terminal)
}

fn event_loop(app: &mut CalculatorApp) -> io::Result<()> {
    let (width, height) = terminal::size()?;
    app.resize(width, height);
    let mut grid = TextGrid::new(width, height);
    let mut stdout = io::stdout();

    while !app.should_quit() {
        render(app, &mut grid);
        draw(&grid, &mut stdout)?;

        match event::read()? {
            Event::Key(key) => {
                app.handle_key(key);
            }
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                ..
            }) => {
                app.handle_click(column, row);
            }
            Event::Resize(width, height) => {
                tracing::trace!(width, height, "resize");
                app.resize(width, height);
                grid.resize(width, height);
            }
            _ => {}
        }
    }
    tracing::debug!("quit requested");
    Ok(())
}

/// Writes the grid to `out`, switching colors only where the tone changes
pub fn draw<W: Write>(grid: &TextGrid, out: &mut W) -> io::Result<()> {
    queue!(out, Clear(ClearType::All))?;
    for y in 0..grid.height() {
        queue!(out, MoveTo(0, y))?;
        let mut current: Option<Tone> = None;
        for cell in grid.row(y) {
            if current != Some(cell.tone) {
                apply_tone(out, cell.tone)?;
                current = Some(cell.tone);
            }
            queue!(out, Print(cell.ch))?;
        }
    }
    queue!(out, SetAttribute(Attribute::Reset), ResetColor)?;
    out.flush()
}

fn apply_tone<W: Write>(out: &mut W, tone: Tone) -> io::Result<()> {
    queue!(out, SetAttribute(Attribute::Reset), ResetColor)?;
    match tone {
        Tone::Normal => Ok(()),
        Tone::Muted => queue!(out, SetForegroundColor(Color::DarkGrey)),
        Tone::Accent => queue!(
            out,
            SetForegroundColor(Color::Cyan),
            SetAttribute(Attribute::Bold)
        ),
        Tone::Operator => queue!(out, SetForegroundColor(Color::Yellow)),
        Tone::Danger => queue!(
            out,
            SetForegroundColor(Color::Red),
            SetAttribute(Attribute::Bold)
        ),
        Tone::Highlight => queue!(
            out,
            SetForegroundColor(Color::Black),
            SetBackgroundColor(Color::Yellow),
            SetAttribute(Attribute::Bold)
        ),
    }
}
