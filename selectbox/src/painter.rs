use std::io::Write;

use crossterm::{
    cursor, queue,
    style::{Attribute, Color as CtColor, Print, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};

use crate::buffer::{Buffer, Cell};
use crate::error::SelectError;
use crate::text::char_width;
use crate::types::{Rgb, TextStyle};

/// Writes buffers to a terminal, sending only the cells that changed since
/// the previous draw.
pub struct Painter<W: Write> {
    out: W,
    previous: Option<Buffer>,
}

impl<W: Write> Painter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            previous: None,
        }
    }

    /// Forget the last frame so the next draw repaints everything.
    pub fn invalidate(&mut self) {
        self.previous = None;
    }

    pub fn draw(&mut self, buf: &Buffer) -> Result<(), SelectError> {
        let baseline = match self.previous.take() {
            Some(prev) if prev.width() == buf.width() && prev.height() == buf.height() => prev,
            _ => {
                queue!(self.out, Clear(ClearType::All))?;
                Buffer::new(buf.width(), buf.height())
            }
        };

        let mut last_x = u16::MAX;
        let mut last_y = u16::MAX;
        let mut last_char_width: u16 = 1;
        // Reset leaves the terminal's own default colors, which are unknown
        let mut last_fg: Option<Rgb> = None;
        let mut last_bg: Option<Rgb> = None;
        let mut last_style = TextStyle::new();

        queue!(self.out, SetAttribute(Attribute::Reset))?;

        for (x, y, cell) in buf.diff(&baseline) {
            if cell.wide_continuation {
                continue;
            }

            if y != last_y || x != last_x.wrapping_add(last_char_width) {
                queue!(self.out, cursor::MoveTo(x, y))?;
            }

            if last_fg != Some(cell.fg) {
                queue!(self.out, SetForegroundColor(to_crossterm(cell.fg)))?;
                last_fg = Some(cell.fg);
            }
            if last_bg != Some(cell.bg) {
                queue!(self.out, SetBackgroundColor(to_crossterm(cell.bg)))?;
                last_bg = Some(cell.bg);
            }
            if cell.style != last_style {
                self.apply_style(cell)?;
                // Reset clears colors too
                queue!(
                    self.out,
                    SetForegroundColor(to_crossterm(cell.fg)),
                    SetBackgroundColor(to_crossterm(cell.bg))
                )?;
                last_style = cell.style;
            }

            queue!(self.out, Print(cell.char))?;

            last_x = x;
            last_y = y;
            last_char_width = char_width(cell.char).max(1) as u16;
        }

        queue!(self.out, SetAttribute(Attribute::Reset))?;
        self.out.flush()?;
        self.previous = Some(buf.clone());
        Ok(())
    }

    fn apply_style(&mut self, cell: &Cell) -> Result<(), SelectError> {
        queue!(self.out, SetAttribute(Attribute::Reset))?;
        if cell.style.bold {
            queue!(self.out, SetAttribute(Attribute::Bold))?;
        }
        if cell.style.dim {
            queue!(self.out, SetAttribute(Attribute::Dim))?;
        }
        if cell.style.italic {
            queue!(self.out, SetAttribute(Attribute::Italic))?;
        }
        if cell.style.underline {
            queue!(self.out, SetAttribute(Attribute::Underlined))?;
        }
        Ok(())
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

fn to_crossterm(rgb: Rgb) -> CtColor {
    CtColor::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}
