//! Text renderer: draws the weekly grid with box-drawing characters.
//!
//! Pixel geometry from the layout is mapped proportionally onto character
//! cells: each day column is `day_width` cells wide and each hour is
//! `rows_per_hour` rows tall.

use super::Renderer;
use super::canvas::{Canvas, Rect};
use super::charset::{BoxChars, CharSet};
use crate::config::CellSize;
use crate::layout::types::{CourseBlock, LayoutConfig, ScheduleLayout};
use crate::schedule::types::{DAY_COUNT, Day, Schedule};

/// Rows above the first hour line: two title rows, a blank, the day headers.
const BODY_TOP: i64 = 4;
const DAY_HEADER_ROW: i64 = 3;

/// Renders a schedule layout to ASCII/Unicode text.
pub struct AsciiRenderer {
    pub unicode: bool,
    pub cells: CellSize,
}

impl AsciiRenderer {
    pub fn new(unicode: bool) -> Self {
        Self {
            unicode,
            cells: CellSize::default(),
        }
    }

    pub fn with_cells(unicode: bool, cells: CellSize) -> Self {
        Self { unicode, cells }
    }

    fn charset(&self) -> CharSet {
        if self.unicode {
            CharSet::Unicode
        } else {
            CharSet::Ascii
        }
    }

    fn bullet(&self) -> &'static str {
        if self.unicode { " • " } else { " | " }
    }
}

impl Renderer for AsciiRenderer {
    fn render(&self, schedule: &Schedule, layout: &ScheduleLayout) -> String {
        let grid = CellGrid::new(&layout.config, self.cells);
        let mut canvas = Canvas::new(grid.width(), grid.footer_row() as usize + 1, self.charset());

        paint_title(&mut canvas, schedule, self.bullet());
        paint_grid(&mut canvas, &grid, &layout.time_labels);
        for block in &layout.blocks {
            paint_block(&mut canvas, &grid, block);
        }
        paint_footer(&mut canvas, schedule, &grid, self.bullet());

        canvas.render_to_string()
    }
}

// ─── Cell geometry ───────────────────────────────────────────────────────────

/// Maps canvas pixels onto character cells.
struct CellGrid<'a> {
    config: &'a LayoutConfig,
    cells: CellSize,
}

impl<'a> CellGrid<'a> {
    fn new(config: &'a LayoutConfig, cells: CellSize) -> Self {
        let cells = CellSize {
            day_width: cells.day_width.max(4),
            rows_per_hour: cells.rows_per_hour.max(1),
            time_width: cells.time_width.max(6),
        };
        Self { config, cells }
    }

    fn width(&self) -> usize {
        self.cells.time_width + DAY_COUNT * self.cells.day_width + 1
    }

    /// Column of the separator left of `day` (`day == DAY_COUNT` is the right edge).
    fn separator(&self, day: usize) -> i64 {
        (self.cells.time_width + day * self.cells.day_width) as i64
    }

    fn hour_row(&self, k: u32) -> i64 {
        BODY_TOP + (k as usize * self.cells.rows_per_hour) as i64
    }

    fn body_bottom(&self) -> i64 {
        self.hour_row(self.config.hour_range())
    }

    fn footer_row(&self) -> i64 {
        self.body_bottom() + 2
    }

    fn col_at(&self, px: f64) -> i64 {
        let days = (px - self.config.time_column_width) / self.config.day_column_width;
        (self.cells.time_width as f64 + days * self.cells.day_width as f64).round() as i64
    }

    fn row_at(&self, px: f64) -> i64 {
        let hours = (px - self.config.grid_top()) / self.config.hour_height;
        (BODY_TOP as f64 + hours * self.cells.rows_per_hour as f64).round() as i64
    }

    /// Card rectangle for a block, clipped to its day column and the grid
    /// body. None when nothing of it is visible.
    fn block_rect(&self, block: &CourseBlock) -> Option<Rect> {
        let pad = self.config.block_padding;
        let col_lo = self.separator(block.column) + 1;
        let col_hi = self.separator(block.column + 1) - 1;
        let x0 = self.col_at(block.left + pad).max(col_lo);
        let x1 = (self.col_at(block.left + pad + block.width) - 1).min(col_hi);

        let end_px = block.top + block.height + 2.0 * pad;
        let y0 = self.row_at(block.top).max(BODY_TOP);
        let y1 = (self.row_at(end_px) - 1).min(self.body_bottom());

        (x1 >= x0 && y1 >= y0).then(|| Rect::new(x0, y0, x1 - x0 + 1, y1 - y0 + 1))
    }
}

// ─── Painting ────────────────────────────────────────────────────────────────

fn paint_title(canvas: &mut Canvas, schedule: &Schedule, bullet: &str) {
    canvas.write_str(0, 0, &schedule.student_name);
    let subtitle = format!(
        "Academic Schedule{bullet}{}{bullet}{} course(s)",
        schedule.semester,
        schedule.courses.len()
    );
    canvas.write_str(0, 1, &subtitle);
}

fn paint_grid(canvas: &mut Canvas, grid: &CellGrid, time_labels: &[String]) {
    let bc = BoxChars::for_charset(canvas.charset);
    let top = BODY_TOP;
    let bottom = grid.body_bottom();
    let left = grid.separator(0);
    let right = grid.separator(DAY_COUNT);

    for day in 0..=DAY_COUNT {
        canvas.vline(grid.separator(day), top, bottom);
    }
    canvas.hline(top, left, right);
    canvas.hline(bottom, left, right);
    for k in 1..grid.config.hour_range() {
        canvas.rule(grid.hour_row(k), left, right, bc.hour_rule);
    }

    for (k, label) in time_labels.iter().enumerate() {
        canvas.write_str(0, grid.hour_row(k as u32), label);
    }

    let span = grid.cells.day_width - 1;
    for day in Day::ALL {
        let name = if day.label().len() <= span {
            day.label()
        } else {
            day.short()
        };
        canvas.write_centered(grid.separator(day.index()) + 1, DAY_HEADER_ROW, span, name);
    }
}

fn paint_block(canvas: &mut Canvas, grid: &CellGrid, block: &CourseBlock) {
    let Some(rect) = grid.block_rect(block) else {
        return;
    };
    canvas.clear(rect);
    let course = &block.course;

    if rect.height < 2 || rect.width < 2 {
        canvas.write_fit(rect.x, rect.y, &course.name, rect.width as usize);
        return;
    }

    canvas.draw_box(rect, &BoxChars::card(canvas.charset));
    let inner_w = (rect.width - 2) as usize;
    let inner_rows = (rect.height - 2) as usize;
    let x = rect.x + 1;

    if inner_rows == 1 {
        canvas.write_fit(x, rect.y + 1, &course.name, inner_w);
        return;
    }

    let time = format!("{}-{}", course.start_time, course.end_time);
    let details: Vec<&str> = [
        course.name.as_str(),
        course.lecturer.as_str(),
        course.room.as_str(),
    ]
    .into_iter()
    .filter(|s| !s.is_empty())
    .collect();

    for (i, line) in details.iter().take(inner_rows - 1).enumerate() {
        canvas.write_fit(x, rect.y + 1 + i as i64, line, inner_w);
    }
    canvas.write_fit(x, rect.y + inner_rows as i64, &time, inner_w);
}

fn paint_footer(canvas: &mut Canvas, schedule: &Schedule, grid: &CellGrid, bullet: &str) {
    let summary = schedule.summary();
    let footer = format!(
        "{} course(s){bullet}{} active day(s)",
        summary.total_courses, summary.active_days
    );
    canvas.write_str(grid.separator(0), grid.footer_row(), &footer);
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers_ascii.rs"]
mod tests;
