//! Block placement: course times to pixel rectangles.

use log::{debug, warn};

use super::configurator::get_layout_config_with;
use super::overlap::{OverlapStrategy, resolve_overlaps};
use super::types::{CourseBlock, LayoutConfig, LayoutOptions};
use crate::schedule::time::time_to_decimal;
use crate::schedule::types::Course;

/// Place courses with the default grid and overlap strategy.
pub fn calculate_layout(courses: &[Course]) -> Vec<CourseBlock> {
    calculate_layout_with(courses, &LayoutOptions::default())
}

pub fn calculate_layout_with(courses: &[Course], options: &LayoutOptions) -> Vec<CourseBlock> {
    let config = get_layout_config_with(courses, &options.grid);
    place_blocks(courses, &config, options.overlap)
}

/// Place courses on an already computed grid, then resolve overlaps.
///
/// Courses with an unknown day or unreadable times are left out; the input
/// slice is never modified.
pub fn place_blocks(
    courses: &[Course],
    config: &LayoutConfig,
    strategy: OverlapStrategy,
) -> Vec<CourseBlock> {
    let blocks: Vec<CourseBlock> = courses
        .iter()
        .filter_map(|course| place_course(course, config))
        .collect();
    resolve_overlaps(blocks, config, strategy)
}

/// Raw rectangle for one course, before any overlap adjustment.
pub fn place_course(course: &Course, config: &LayoutConfig) -> Option<CourseBlock> {
    let Some(day) = course.weekday() else {
        debug!("skipping course '{}': unknown day '{}'", course.id, course.day);
        return None;
    };
    let (Some(start), Some(end)) = (
        time_to_decimal(&course.start_time),
        time_to_decimal(&course.end_time),
    ) else {
        warn!(
            "skipping course '{}': unreadable time range '{}'-'{}'",
            course.id, course.start_time, course.end_time
        );
        return None;
    };

    let column = day.index();
    Some(CourseBlock {
        course: course.clone(),
        top: config.grid_top() + (start - config.start_hour as f64) * config.hour_height,
        left: config.column_left(column),
        width: config.lane_width(),
        height: (end - start) * config.hour_height - 2.0 * config.block_padding,
        column,
    })
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_placement.rs"]
mod tests;
