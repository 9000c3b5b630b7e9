//! Layout engine: convenience API for a full schedule layout.
//!
//! `full_layout` computes the grid once and feeds the same `LayoutConfig` to
//! placement and label generation, so renderers can draw both from one value.

pub mod configurator;
pub mod overlap;
pub mod placement;
pub mod types;

pub use configurator::{get_layout_config, get_layout_config_with};
pub use overlap::OverlapStrategy;
pub use placement::{calculate_layout, calculate_layout_with, place_blocks};
pub use types::{CourseBlock, GridSpec, LayoutConfig, LayoutOptions, ScheduleLayout};

use log::debug;

use crate::error::LayoutError;
use crate::schedule::types::{Course, Schedule};
use crate::schedule::validate::validate_schedule;

/// `"HH:00"` for every hour from start to end of the visible range, inclusive.
pub fn generate_time_labels(courses: &[Course]) -> Vec<String> {
    time_labels_for(&get_layout_config(courses))
}

pub fn time_labels_for(config: &LayoutConfig) -> Vec<String> {
    (config.start_hour..=config.end_hour)
        .map(|h| format!("{h:02}:00"))
        .collect()
}

/// Run the full layout pipeline. Never fails; bad courses are skipped.
pub fn full_layout(courses: &[Course], options: &LayoutOptions) -> ScheduleLayout {
    let config = get_layout_config_with(courses, &options.grid);
    let blocks = place_blocks(courses, &config, options.overlap);
    debug!(
        "laid out {} of {} course(s) over {:02}:00-{:02}:00",
        blocks.len(),
        courses.len(),
        config.start_hour,
        config.end_hour
    );
    ScheduleLayout {
        config,
        time_labels: time_labels_for(&config),
        blocks,
    }
}

/// Validate first, then lay out. Any schedule error or rejected course fails
/// the whole request.
pub fn strict_layout(
    schedule: &Schedule,
    options: &LayoutOptions,
) -> Result<ScheduleLayout, LayoutError> {
    let report = validate_schedule(schedule, &options.grid);
    if !report.schedule_errors.is_empty() {
        return Err(LayoutError::InvalidSchedule(report.schedule_errors));
    }
    if !report.rejected.is_empty() {
        return Err(LayoutError::RejectedCourses(report.rejected));
    }
    Ok(full_layout(&report.accepted, options))
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_properties.rs"]
mod tests;
