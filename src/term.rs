use std::io::{stdout, Stdout, Write};

use crossterm::event::{read, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute, queue, terminal};
use tracing::{debug, warn};

use crate::error::Result;
use crate::input::{InputEvent, InputSource};
use crate::render::{Renderer, Style};
use crate::snake::Direction::*;
use crate::TermInt;

/// Rows drawn below the board for the score and help lines.
const STATUS_ROWS: TermInt = 5;

/// Draws on the real terminal through crossterm. Owns the alternate screen
/// and raw mode from construction until `close` or drop.
pub struct TermRenderer<W: Write = Stdout> {
    out: W,
    closed: bool,
}

impl TermRenderer<Stdout> {
    pub fn new(board_width: TermInt, board_height: TermInt) -> Result<Self> {
        TermRenderer::with_writer(stdout(), board_width, board_height)
    }
}

impl<W: Write> TermRenderer<W> {
    /// Sets the terminal up, writing control sequences to `out`. If any step
    /// fails the partly built renderer is dropped, which undoes the others.
    pub fn with_writer(out: W, board_width: TermInt, board_height: TermInt) -> Result<Self> {
        if let Ok((cols, rows)) = terminal::size() {
            if cols <= board_width || rows <= board_height + STATUS_ROWS {
                warn!(cols, rows, board_width, board_height, "terminal is smaller than the board");
            }
        }

        let mut renderer = TermRenderer { out, closed: false };
        execute!(renderer.out, EnterAlternateScreen)?;
        terminal::enable_raw_mode()?;
        execute!(renderer.out, cursor::Hide, cursor::DisableBlinking)?;

        Ok(renderer)
    }

    fn restore(&mut self) -> Result<()> {
        let raw = terminal::disable_raw_mode();
        execute!(self.out, cursor::Show, cursor::EnableBlinking, LeaveAlternateScreen)?;
        raw?;
        Ok(())
    }
}

impl<W: Write> Renderer for TermRenderer<W> {
    fn clear(&mut self) -> Result<()> {
        queue!(self.out, terminal::Clear(ClearType::All))?;
        Ok(())
    }

    fn draw_cell(&mut self, x: TermInt, y: TermInt, glyph: char, style: Style) -> Result<()> {
        let (fg, bg) = colors(style);
        queue!(
            self.out,
            cursor::MoveTo(x, y),
            SetForegroundColor(fg),
            SetBackgroundColor(bg),
            Print(glyph),
            ResetColor
        )?;
        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    fn sync(&mut self) -> Result<()> {
        let (cols, rows) = terminal::size()?;
        debug!(cols, rows, "terminal resized");
        execute!(self.out, terminal::Clear(ClearType::All))?;
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;
        self.restore()
    }
}

impl<W: Write> Drop for TermRenderer<W> {
    fn drop(&mut self) {
        if let Err(err) = self.close() {
            warn!(%err, "could not restore the terminal");
        }
    }
}

fn colors(style: Style) -> (Color, Color) {
    match style {
        Style::Text | Style::Frame => (Color::White, Color::Black),
        Style::Snake => (Color::White, Color::DarkGreen),
        Style::Apple => (Color::Red, Color::Black),
    }
}

/// Keyboard and resize events from the terminal.
pub struct TermInput;

impl InputSource for TermInput {
    fn next_event(&mut self) -> Result<InputEvent> {
        loop {
            if let Some(event) = classify(&read()?) {
                return Ok(event);
            }
        }
    }
}

/// Maps a raw terminal event to a game input, or `None` for anything the
/// game ignores.
pub fn classify(event: &Event) -> Option<InputEvent> {
    match event {
        Event::Resize(_, _) => Some(InputEvent::Resize),
        Event::Key(key) if key.kind != KeyEventKind::Release => classify_key(key),
        _ => None,
    }
}

fn classify_key(key: &KeyEvent) -> Option<InputEvent> {
    if is_ctrl_c(key) {
        return Some(InputEvent::Quit);
    }

    match key.code {
        KeyCode::Esc => Some(InputEvent::Quit),
        KeyCode::Enter => Some(InputEvent::Confirm),
        KeyCode::Char('w') | KeyCode::Up => Some(InputEvent::Move(Up)),
        KeyCode::Char('a') | KeyCode::Left => Some(InputEvent::Move(Left)),
        KeyCode::Char('s') | KeyCode::Down => Some(InputEvent::Move(Down)),
        KeyCode::Char('d') | KeyCode::Right => Some(InputEvent::Move(Right)),
        _ => None,
    }
}

fn is_ctrl_c(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}
