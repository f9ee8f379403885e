use crate::layout::Rect;
use crate::text::char_width;
use crate::types::{Rgb, TextStyle};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub char: char,
    pub fg: Rgb,
    pub bg: Rgb,
    pub style: TextStyle,
    pub wide_continuation: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            char: ' ',
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 0, 0),
            style: TextStyle::new(),
            wide_continuation: false,
        }
    }
}

impl Cell {
    pub fn new(char: char) -> Self {
        Self {
            char,
            ..Default::default()
        }
    }
}

/// Colors and attributes applied to a run of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pen {
    pub fg: Rgb,
    pub bg: Rgb,
    pub style: TextStyle,
}

impl Pen {
    pub const fn new(fg: Rgb, bg: Rgb) -> Self {
        Self {
            fg,
            bg,
            style: TextStyle::new(),
        }
    }

    pub const fn style(mut self, style: TextStyle) -> Self {
        self.style = style;
        self
    }
}

/// A grid of cells the widget draws into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Buffer {
    pub fn new(width: u16, height: u16) -> Self {
        let cells = vec![Cell::default(); (width as usize) * (height as usize)];
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn area(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        if x < self.width && y < self.height {
            Some(&self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        if x < self.width && y < self.height {
            let idx = self.index(x, y);
            Some(&mut self.cells[idx])
        } else {
            None
        }
    }

    fn index(&self, x: u16, y: u16) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// Paint every cell of `rect` blank with the pen's colors.
    pub fn fill(&mut self, rect: Rect, pen: Pen) {
        let rect = rect.intersection(self.area());
        for y in rect.y..rect.bottom() {
            for x in rect.x..rect.right() {
                if let Some(cell) = self.get_mut(x, y) {
                    *cell = Cell {
                        char: ' ',
                        fg: pen.fg,
                        bg: pen.bg,
                        style: pen.style,
                        wide_continuation: false,
                    };
                }
            }
        }
    }

    /// Write `text` starting at `(x, y)`, stopping at `max_x`.
    /// Returns the column after the last written character.
    pub fn set_str(&mut self, x: u16, y: u16, text: &str, max_x: u16, pen: Pen) -> u16 {
        let max_x = max_x.min(self.width);
        let mut cx = x;

        for ch in text.chars() {
            let w = char_width(ch) as u16;
            if w == 0 {
                continue;
            }
            if cx.saturating_add(w) > max_x {
                break;
            }
            if let Some(cell) = self.get_mut(cx, y) {
                *cell = Cell {
                    char: ch,
                    fg: pen.fg,
                    bg: pen.bg,
                    style: pen.style,
                    wide_continuation: false,
                };
            }
            for extra in 1..w {
                if let Some(cell) = self.get_mut(cx + extra, y) {
                    *cell = Cell {
                        char: ' ',
                        fg: pen.fg,
                        bg: pen.bg,
                        style: pen.style,
                        wide_continuation: true,
                    };
                }
            }
            cx += w;
        }

        cx
    }

    /// The visible characters of row `y`, with trailing blanks removed.
    pub fn row_text(&self, y: u16) -> String {
        let mut line = String::new();
        for x in 0..self.width {
            if let Some(cell) = self.get(x, y) {
                if !cell.wide_continuation {
                    line.push(cell.char);
                }
            }
        }
        line.trim_end().to_string()
    }

    pub fn diff<'a>(&'a self, other: &'a Buffer) -> impl Iterator<Item = (u16, u16, &'a Cell)> {
        self.cells
            .iter()
            .zip(other.cells.iter())
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(move |(i, (cell, _))| {
                let x = (i % self.width as usize) as u16;
                let y = (i / self.width as usize) as u16;
                (x, y, cell)
            })
    }

    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = Cell::default();
        }
    }
}
