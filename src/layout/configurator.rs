//! Layout configurator: grid metrics from the hours a course set uses.

use super::types::{GridSpec, LayoutConfig};
use crate::schedule::time::hour_of;
use crate::schedule::types::{Course, DAY_COUNT};

/// Compute grid metrics with the default grid constants.
pub fn get_layout_config(courses: &[Course]) -> LayoutConfig {
    get_layout_config_with(courses, &GridSpec::default())
}

/// Compute grid metrics for `courses`.
///
/// The visible range runs from the earliest start hour to one past the
/// latest end hour, clamped to the grid's display floor and ceiling. Courses
/// whose times do not parse do not contribute.
pub fn get_layout_config_with(courses: &[Course], grid: &GridSpec) -> LayoutConfig {
    let (start_hour, end_hour) = visible_hours(courses, grid);
    let hour_range = (end_hour - start_hour) as f64;

    LayoutConfig {
        canvas_width: grid.canvas_width,
        canvas_height: grid.header_height
            + grid.day_header_height
            + hour_range * grid.hour_height
            + grid.footer_height,
        header_height: grid.header_height,
        day_header_height: grid.day_header_height,
        footer_height: grid.footer_height,
        time_column_width: grid.time_column_width,
        day_column_width: (grid.canvas_width - grid.time_column_width) / DAY_COUNT as f64,
        hour_height: grid.hour_height,
        start_hour,
        end_hour,
        padding: grid.padding,
        block_padding: grid.block_padding,
        card_radius: grid.card_radius,
    }
}

fn visible_hours(courses: &[Course], grid: &GridSpec) -> (u32, u32) {
    let scanned = courses
        .iter()
        .filter_map(|c| Some((hour_of(&c.start_time)?, hour_of(&c.end_time)?)))
        .fold(None, |acc: Option<(u32, u32)>, (start, end)| {
            let (lo, hi) = acc.unwrap_or((u32::MAX, 0));
            Some((lo.min(start), hi.max(end.saturating_add(1))))
        });

    let (min_hour, max_hour) =
        scanned.unwrap_or((grid.default_start_hour, grid.default_end_hour));

    let mut start = min_hour.max(grid.display_floor);
    let mut end = max_hour.min(grid.display_ceiling);

    // Everything clipped away: keep a single visible row.
    if end <= start {
        start = start.min(grid.display_ceiling.saturating_sub(1));
        end = start + 1;
    }

    (start, end)
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_configurator.rs"]
mod tests;
