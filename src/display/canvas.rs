/// Cell frame buffer.
///
/// Draw commands arrive in world coordinates; the canvas scales them onto a
/// `cols × rows` grid of coloured glyphs.

use crate::geometry::{Rect, Rgb};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub fg: Rgb,
}

const BLANK: Cell = Cell { ch: ' ', fg: Rgb(0, 0, 0) };

#[derive(Clone, Debug)]
pub struct Canvas {
    cols: u16,
    rows: u16,
    world_w: i32,
    world_h: i32,
    cells: Vec<Cell>,
}

impl Canvas {
    pub fn new(cols: u16, rows: u16, world_w: i32, world_h: i32) -> Self {
        Canvas {
            cols,
            rows,
            world_w: world_w.max(1),
            world_h: world_h.max(1),
            cells: vec![BLANK; cols as usize * rows as usize],
        }
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn cell(&self, col: u16, row: u16) -> Option<Cell> {
        (col < self.cols && row < self.rows)
            .then(|| self.cells[row as usize * self.cols as usize + col as usize])
    }

    /// The glyphs of one row, for tests and debugging.
    pub fn row_text(&self, row: u16) -> String {
        (0..self.cols)
            .filter_map(|col| self.cell(col, row))
            .map(|c| c.ch)
            .collect()
    }

    pub fn col_for(&self, x: i32) -> i32 {
        (x as i64 * self.cols as i64).div_euclid(self.world_w as i64) as i32
    }

    pub fn row_for(&self, y: i32) -> i32 {
        (y as i64 * self.rows as i64).div_euclid(self.world_h as i64) as i32
    }

    fn set(&mut self, col: i32, row: i32, cell: Cell) {
        if col < 0 || row < 0 || col >= self.cols as i32 || row >= self.rows as i32 {
            return;
        }
        let idx = row as usize * self.cols as usize + col as usize;
        self.cells[idx] = cell;
    }

    /// Fill every cell the rectangle touches; a non-empty rectangle always
    /// covers at least one cell.
    pub fn fill_rect(&mut self, rect: Rect, ch: char, fg: Rgb) {
        if rect.w <= 0 || rect.h <= 0 {
            return;
        }
        let (c0, c1) = (self.col_for(rect.left()), self.col_for(rect.right() - 1));
        let (r0, r1) = (self.row_for(rect.top()), self.row_for(rect.bottom() - 1));
        for row in r0..=r1 {
            for col in c0..=c1 {
                self.set(col, row, Cell { ch, fg });
            }
        }
    }

    /// Fill cells whose centres fall inside the circle.  The centre cell is
    /// always marked so tiny circles stay visible.
    pub fn fill_circle(&mut self, center: (i32, i32), radius: i32, ch: char, fg: Rgb) {
        let (cx, cy) = center;
        let r = radius.max(0) as i64;
        let (c0, c1) = (self.col_for(cx - radius), self.col_for(cx + radius));
        let (r0, r1) = (self.row_for(cy - radius), self.row_for(cy + radius));
        for row in r0..=r1 {
            for col in c0..=c1 {
                let (wx, wy) = self.cell_center(col, row);
                let (dx, dy) = (wx - cx as i64, wy - cy as i64);
                if dx * dx + dy * dy <= r * r {
                    self.set(col, row, Cell { ch, fg });
                }
            }
        }
        let (col, row) = (self.col_for(cx), self.row_for(cy));
        self.set(col, row, Cell { ch, fg });
    }

    fn cell_center(&self, col: i32, row: i32) -> (i64, i64) {
        let w = self.world_w as i64;
        let h = self.world_h as i64;
        let x = (2 * col as i64 + 1) * w / (2 * self.cols.max(1) as i64);
        let y = (2 * row as i64 + 1) * h / (2 * self.rows.max(1) as i64);
        (x, y)
    }

    /// Write `text` starting at a cell position, clipped to the grid.
    pub fn put_text(&mut self, col: i32, row: i32, text: &str, fg: Rgb) {
        for (i, ch) in text.chars().enumerate() {
            self.set(col + i as i32, row, Cell { ch, fg });
        }
    }
}
