//! Layout types: GridSpec, LayoutConfig, CourseBlock, ScheduleLayout.

use serde::{Deserialize, Serialize};

use super::overlap::OverlapStrategy;
use crate::schedule::types::{Course, DAY_COUNT};

// ─── GridSpec ────────────────────────────────────────────────────────────────

/// Fixed grid constants, in pixels at scale 1.
///
/// One value is shared by the configurator and every renderer so the two
/// never disagree about hour height or padding.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridSpec {
    pub canvas_width: f64,
    pub header_height: f64,
    pub day_header_height: f64,
    pub footer_height: f64,
    pub time_column_width: f64,
    pub hour_height: f64,
    pub padding: f64,
    pub block_padding: f64,
    pub card_radius: f64,
    /// Range used when there is nothing to lay out.
    pub default_start_hour: u32,
    pub default_end_hour: u32,
    /// Earliest visible hour; earlier courses are clipped.
    pub display_floor: u32,
    /// Latest visible hour; later courses are clipped.
    pub display_ceiling: u32,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            canvas_width: 2480.0,
            header_height: 240.0,
            day_header_height: 70.0,
            footer_height: 80.0,
            time_column_width: 120.0,
            hour_height: 160.0,
            padding: 30.0,
            block_padding: 8.0,
            card_radius: 16.0,
            default_start_hour: 7,
            default_end_hour: 18,
            display_floor: 6,
            display_ceiling: 22,
        }
    }
}

// ─── LayoutConfig ────────────────────────────────────────────────────────────

/// Grid metrics derived from a course set. Recomputed on every request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutConfig {
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub header_height: f64,
    pub day_header_height: f64,
    pub footer_height: f64,
    pub time_column_width: f64,
    pub day_column_width: f64,
    pub hour_height: f64,
    pub start_hour: u32,
    pub end_hour: u32,
    pub padding: f64,
    pub block_padding: f64,
    pub card_radius: f64,
}

impl LayoutConfig {
    pub fn hour_range(&self) -> u32 {
        self.end_hour - self.start_hour
    }

    /// y of the first hour line (below both headers).
    pub fn grid_top(&self) -> f64 {
        self.header_height + self.day_header_height
    }

    /// Height of the hour rows between headers and footer.
    pub fn grid_height(&self) -> f64 {
        self.hour_range() as f64 * self.hour_height
    }

    /// x of a day column's left edge.
    pub fn column_left(&self, column: usize) -> f64 {
        self.time_column_width + column as f64 * self.day_column_width
    }

    /// Usable width of a day column once both block paddings are removed.
    pub fn lane_width(&self) -> f64 {
        self.day_column_width - 2.0 * self.block_padding
    }

    pub fn day_count(&self) -> usize {
        DAY_COUNT
    }
}

// ─── CourseBlock ─────────────────────────────────────────────────────────────

/// A course placed on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseBlock {
    pub course: Course,
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
    /// Zero-based weekday index.
    pub column: usize,
}

impl CourseBlock {
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }
}

// ─── LayoutOptions ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LayoutOptions {
    pub grid: GridSpec,
    pub overlap: OverlapStrategy,
}

// ─── ScheduleLayout ──────────────────────────────────────────────────────────

/// Everything a renderer needs for one schedule.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleLayout {
    pub config: LayoutConfig,
    pub blocks: Vec<CourseBlock>,
    pub time_labels: Vec<String>,
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_types.rs"]
mod tests;
