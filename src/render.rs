use crate::error::Result;
use crate::TermInt;

/// What a cell should look like. The renderer decides the actual colours.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Style {
    Text,
    Frame,
    Snake,
    Apple,
}

/// A drawing surface addressed in terminal cells.
pub trait Renderer {
    fn clear(&mut self) -> Result<()>;

    fn draw_cell(&mut self, x: TermInt, y: TermInt, glyph: char, style: Style) -> Result<()>;

    /// Makes everything drawn since the last `clear` visible.
    fn present(&mut self) -> Result<()>;

    /// Re-syncs with the terminal after a resize.
    fn sync(&mut self) -> Result<()>;

    fn close(&mut self) -> Result<()>;
}

/// Writes `text` starting at `(x1, y1)`, wrapping back to `x1` on the next
/// row when `x2` is reached and stopping past row `y2`.
pub fn draw_text<R: Renderer + ?Sized>(
    renderer: &mut R,
    (x1, y1): (TermInt, TermInt),
    (x2, y2): (TermInt, TermInt),
    text: &str,
) -> Result<()> {
    let (mut col, mut row) = (x1, y1);

    for ch in text.chars() {
        renderer.draw_cell(col, row, ch, Style::Text)?;
        col += 1;
        if col >= x2 {
            row += 1;
            col = x1;
        }
        if row > y2 {
            break;
        }
    }

    Ok(())
}

/// Box around `[0, width] x [0, height]`.
pub fn draw_frame<R: Renderer + ?Sized>(renderer: &mut R, width: TermInt, height: TermInt) -> Result<()> {
    renderer.draw_cell(0, 0, '┌', Style::Frame)?;
    renderer.draw_cell(width, 0, '┐', Style::Frame)?;
    renderer.draw_cell(0, height, '└', Style::Frame)?;
    renderer.draw_cell(width, height, '┘', Style::Frame)?;

    for x in 1..width {
        renderer.draw_cell(x, 0, '─', Style::Frame)?;
        renderer.draw_cell(x, height, '─', Style::Frame)?;
    }

    for y in 1..height {
        renderer.draw_cell(0, y, '│', Style::Frame)?;
        renderer.draw_cell(width, y, '│', Style::Frame)?;
    }

    Ok(())
}
