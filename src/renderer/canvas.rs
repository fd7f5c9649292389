//! Drawing surface abstraction

use super::text::{advance, glyph_index};

/// Rectangle in screen pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

/// Anything the game can draw onto
pub trait Canvas {
    fn fill_rect(&mut self, rect: PixelRect);

    fn stroke_rect(&mut self, rect: PixelRect);

    /// Draw `text` with its top-left corner at `(x, y)`, scaled by `size`
    fn draw_text(&mut self, text: &str, x: i32, y: i32, size: i32);
}

/// Character-grid canvas for headless snapshots.
///
/// Each cell stands for a block of screen pixels. Filled rectangles become
/// `#`, outlines `+`, `-` and `|`, and text is written one cell per glyph.
#[derive(Debug, Clone)]
pub struct AsciiCanvas {
    cols: usize,
    rows: usize,
    cell_w: f64,
    cell_h: f64,
    cells: Vec<char>,
}

impl AsciiCanvas {
    pub fn new(screen_width: u32, screen_height: u32, cols: usize, rows: usize) -> Self {
        let cols = cols.max(1);
        let rows = rows.max(1);
        Self {
            cols,
            rows,
            cell_w: screen_width.max(1) as f64 / cols as f64,
            cell_h: screen_height.max(1) as f64 / rows as f64,
            cells: vec![' '; cols * rows],
        }
    }

    pub fn clear(&mut self) {
        self.cells.fill(' ');
    }

    /// Character at a cell, if on the grid
    pub fn get(&self, col: usize, row: usize) -> Option<char> {
        (col < self.cols && row < self.rows).then(|| self.cells[row * self.cols + col])
    }

    /// Grid as text, one line per row with trailing blanks trimmed
    pub fn render(&self) -> String {
        self.cells
            .chunks(self.cols)
            .map(|row| row.iter().collect::<String>().trim_end().to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn put(&mut self, col: i64, row: i64, c: char) {
        if col >= 0 && row >= 0 && (col as usize) < self.cols && (row as usize) < self.rows {
            self.cells[row as usize * self.cols + col as usize] = c;
        }
    }

    fn col_of(&self, x: i32) -> i64 {
        (x as f64 / self.cell_w).floor() as i64
    }

    fn row_of(&self, y: i32) -> i64 {
        (y as f64 / self.cell_h).floor() as i64
    }

    /// Inclusive cell span covered by a rectangle
    fn span(&self, rect: PixelRect) -> (i64, i64, i64, i64) {
        let c0 = self.col_of(rect.x);
        let r0 = self.row_of(rect.y);
        let c1 = self.col_of(rect.x + rect.w.max(1) - 1).max(c0);
        let r1 = self.row_of(rect.y + rect.h.max(1) - 1).max(r0);
        (c0, r0, c1, r1)
    }
}

impl Canvas for AsciiCanvas {
    fn fill_rect(&mut self, rect: PixelRect) {
        let (c0, r0, c1, r1) = self.span(rect);
        for row in r0..=r1 {
            for col in c0..=c1 {
                self.put(col, row, '#');
            }
        }
    }

    fn stroke_rect(&mut self, rect: PixelRect) {
        let (c0, r0, c1, r1) = self.span(rect);
        for col in c0..=c1 {
            self.put(col, r0, '-');
            self.put(col, r1, '-');
        }
        for row in r0..=r1 {
            self.put(c0, row, '|');
            self.put(c1, row, '|');
        }
        for (col, row) in [(c0, r0), (c1, r0), (c0, r1), (c1, r1)] {
            self.put(col, row, '+');
        }
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32, size: i32) {
        let row = self.row_of(y);
        let step = advance(size);
        for (i, c) in text.chars().enumerate() {
            if glyph_index(c).is_none() {
                continue;
            }
            let col = self.col_of(x + i as i32 * step);
            self.put(col, row, c.to_ascii_lowercase());
        }
    }
}
