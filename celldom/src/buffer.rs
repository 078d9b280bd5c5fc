use crate::cell::Cell;
use crate::rect::Rect;
use crate::style::{Rgb, TextStyle};
use crate::text::char_width;

/// A grid of styled cells, one frame of terminal output.
#[derive(Debug, Clone)]
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

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if x < self.width && y < self.height {
            let idx = self.index(x, y);
            self.cells[idx] = cell;
        }
    }

    fn index(&self, x: u16, y: u16) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// Write a string starting at (x, y), clipped to `clip`.
    ///
    /// Wide glyphs occupy two cells; the trailing cell is marked as a
    /// continuation so the flush pass skips it. Returns the x position
    /// after the last written column.
    pub fn draw_str(
        &mut self,
        x: u16,
        y: u16,
        text: &str,
        fg: Rgb,
        bg: Rgb,
        style: TextStyle,
        clip: Rect,
    ) -> u16 {
        if y < clip.top() || y >= clip.bottom() {
            return x;
        }
        let mut cx = x;
        for c in text.chars() {
            let w = char_width(c).max(1) as u16;
            if cx < clip.left() {
                cx += w;
                continue;
            }
            if cx + w > clip.right() {
                break;
            }
            self.set(
                cx,
                y,
                Cell {
                    char: c,
                    fg,
                    bg,
                    style,
                    wide_continuation: false,
                },
            );
            if w == 2 {
                self.set(
                    cx + 1,
                    y,
                    Cell {
                        char: ' ',
                        fg,
                        bg,
                        style,
                        wide_continuation: true,
                    },
                );
            }
            cx += w;
        }
        cx
    }

    /// Fill a rect with a background color, preserving nothing.
    pub fn fill(&mut self, rect: Rect, bg: Rgb) {
        for y in rect.top()..rect.bottom().min(self.height) {
            for x in rect.left()..rect.right().min(self.width) {
                self.set(x, y, Cell::default().with_bg(bg));
            }
        }
    }

    /// Cells that differ from `other`, as (x, y, cell).
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
