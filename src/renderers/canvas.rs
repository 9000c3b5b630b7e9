//! Character surface the text schedule is painted on.
//!
//! Coordinates are signed so a card that hangs above the first hour line can
//! be handed over as is; cells outside the surface are dropped.

use super::charset::{Arms, BoxChars, CharSet};

/// Cell-space rectangle; `right` and `bottom` are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

impl Rect {
    pub fn new(x: i64, y: i64, width: i64, height: i64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> i64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i64 {
        self.y + self.height
    }
}

#[derive(Debug, Clone, Copy)]
struct Cell {
    ch: char,
    /// Grid-line arms drawn here; empty once text lands on the cell.
    arms: Arms,
}

const BLANK: Cell = Cell {
    ch: ' ',
    arms: Arms::new(false, false, false, false),
};

pub struct Canvas {
    pub width: usize,
    pub height: usize,
    pub charset: CharSet,
    cells: Vec<Cell>,
}

impl Canvas {
    pub fn new(width: usize, height: usize, charset: CharSet) -> Self {
        Self {
            width,
            height,
            charset,
            cells: vec![BLANK; width * height],
        }
    }

    fn offset(&self, col: i64, row: i64) -> Option<usize> {
        let col = usize::try_from(col).ok().filter(|&c| c < self.width)?;
        let row = usize::try_from(row).ok().filter(|&r| r < self.height)?;
        Some(row * self.width + col)
    }

    pub fn get(&self, col: i64, row: i64) -> char {
        self.offset(col, row).map_or(' ', |i| self.cells[i].ch)
    }

    pub fn set(&mut self, col: i64, row: i64, ch: char) {
        if let Some(i) = self.offset(col, row) {
            self.cells[i] = Cell {
                ch,
                arms: Arms::default(),
            };
        }
    }

    /// Draw grid-line arms into a cell, joining whatever line is already
    /// there. Text under the arms is replaced.
    pub fn merge_arms(&mut self, col: i64, row: i64, arms: Arms) {
        let Some(i) = self.offset(col, row) else {
            return;
        };
        let cell = self.cells[i];
        let existing = if cell.arms.is_empty() {
            Arms::from_char(cell.ch).unwrap_or_default()
        } else {
            cell.arms
        };
        let merged = existing.merge(arms);
        self.cells[i] = Cell {
            ch: merged.to_char(self.charset),
            arms: merged,
        };
    }

    /// Horizontal grid line over columns `x1..=x2` of row `y`. End cells
    /// only reach inward, so a crossing vertical turns them into tees or
    /// corners.
    pub fn hline(&mut self, y: i64, x1: i64, x2: i64) {
        let (from, to) = (x1.min(x2), x1.max(x2));
        for x in from..=to {
            self.merge_arms(x, y, Arms::new(false, false, x > from, x < to));
        }
    }

    /// Vertical grid line over rows `y1..=y2` of column `x`.
    pub fn vline(&mut self, x: i64, y1: i64, y2: i64) {
        let (from, to) = (y1.min(y2), y1.max(y2));
        for y in from..=to {
            self.merge_arms(x, y, Arms::new(y > from, y < to, false, false));
        }
    }

    /// Put `ch` on every blank cell of row `y` between `x1` and `x2`.
    pub fn rule(&mut self, y: i64, x1: i64, x2: i64, ch: char) {
        for x in x1.min(x2)..=x1.max(x2) {
            if self.get(x, y) == ' ' {
                self.set(x, y, ch);
            }
        }
    }

    pub fn clear(&mut self, rect: Rect) {
        for y in rect.y..rect.bottom() {
            for x in rect.x..rect.right() {
                self.set(x, y, ' ');
            }
        }
    }

    /// Outline `rect` with the given glyphs. Rects under 2×2 are skipped.
    pub fn draw_box(&mut self, rect: Rect, bc: &BoxChars) {
        if rect.width < 2 || rect.height < 2 {
            return;
        }
        let (left, top) = (rect.x, rect.y);
        let (right, bottom) = (rect.right() - 1, rect.bottom() - 1);
        for x in left + 1..right {
            self.set(x, top, bc.horizontal);
            self.set(x, bottom, bc.horizontal);
        }
        for y in top + 1..bottom {
            self.set(left, y, bc.vertical);
            self.set(right, y, bc.vertical);
        }
        for (x, y, ch) in [
            (left, top, bc.top_left),
            (right, top, bc.top_right),
            (left, bottom, bc.bottom_left),
            (right, bottom, bc.bottom_right),
        ] {
            self.set(x, y, ch);
        }
    }

    pub fn write_str(&mut self, col: i64, row: i64, s: &str) {
        for (x, ch) in (col..).zip(s.chars()) {
            self.set(x, row, ch);
        }
    }

    /// Write at most `max` characters, marking a cut with `~`.
    pub fn write_fit(&mut self, col: i64, row: i64, s: &str, max: usize) {
        if max == 0 {
            return;
        }
        if s.chars().count() <= max {
            self.write_str(col, row, s);
        } else {
            let cut: String = s.chars().take(max - 1).chain(std::iter::once('~')).collect();
            self.write_str(col, row, &cut);
        }
    }

    /// Write `s` centered in the `span` cells starting at `col`.
    pub fn write_centered(&mut self, col: i64, row: i64, span: usize, s: &str) {
        let len = s.chars().count().min(span);
        let pad = (span - len) / 2;
        self.write_fit(col + pad as i64, row, s, span);
    }

    /// Rows joined by newlines, trailing blanks and blank last rows dropped.
    pub fn render_to_string(&self) -> String {
        let mut rows: Vec<String> = self
            .cells
            .chunks(self.width.max(1))
            .take(self.height)
            .map(|row| {
                let line: String = row.iter().map(|c| c.ch).collect();
                line.trim_end().to_string()
            })
            .collect();
        while rows.last().is_some_and(|r| r.is_empty()) {
            rows.pop();
        }
        rows.join("\n") + "\n"
    }
}

impl std::fmt::Display for Canvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render_to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers_canvas.rs"]
mod tests;
