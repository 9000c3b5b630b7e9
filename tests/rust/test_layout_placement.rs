use super::*;

use approx::assert_relative_eq;

use crate::layout::configurator::get_layout_config;

#[test]
fn test_single_course_geometry() {
    let courses = vec![Course::new("c1", "monday", "08:00", "09:30")];
    let blocks = calculate_layout(&courses);
    assert_eq!(blocks.len(), 1);
    let b = &blocks[0];
    let config = get_layout_config(&courses);
    assert_eq!(config.start_hour, 8);
    assert_relative_eq!(b.top, 310.0);
    assert_relative_eq!(b.left, 120.0);
    assert_relative_eq!(b.width, config.lane_width());
    assert_relative_eq!(b.height, 1.5 * 160.0 - 16.0);
    assert_eq!(b.column, 0);
}

#[test]
fn test_column_from_day() {
    let courses = vec![Course::new("c1", "thursday", "10:00", "11:00")];
    let config = get_layout_config(&courses);
    let b = place_course(&courses[0], &config).unwrap();
    assert_eq!(b.column, 3);
    assert_relative_eq!(b.left, config.column_left(3));
}

#[test]
fn test_minutes_offset_top() {
    let courses = vec![
        Course::new("a", "friday", "08:00", "09:00"),
        Course::new("b", "friday", "09:15", "10:00"),
    ];
    let blocks = calculate_layout(&courses);
    assert_relative_eq!(blocks[1].top - blocks[0].top, 1.25 * 160.0);
    assert_relative_eq!(blocks[1].height, 0.75 * 160.0 - 16.0);
}

#[test]
fn test_unknown_day_skipped() {
    let courses = vec![
        Course::new("ok", "monday", "08:00", "09:00"),
        Course::new("sun", "sunday", "08:00", "09:00"),
    ];
    let blocks = calculate_layout(&courses);
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].course.id, "ok");
}

#[test]
fn test_unreadable_times_skipped() {
    let courses = vec![
        Course::new("ok", "monday", "08:00", "09:00"),
        Course::new("bad", "monday", "eight", "09:00"),
    ];
    let blocks = calculate_layout(&courses);
    assert_eq!(blocks.len(), 1);
}

#[test]
fn test_input_not_modified() {
    let courses = vec![
        Course::new("a", "monday", "08:00", "10:00"),
        Course::new("b", "monday", "09:00", "10:00"),
    ];
    let before = courses.clone();
    let _ = calculate_layout(&courses);
    assert_eq!(courses, before);
}

#[test]
fn test_early_course_above_grid_after_clamp() {
    let courses = vec![Course::new("dawn", "monday", "05:00", "07:00")];
    let config = get_layout_config(&courses);
    assert_eq!(config.start_hour, 6);
    let b = place_course(&courses[0], &config).unwrap();
    // Starts one hour above the first visible line; renderers clip it.
    assert_relative_eq!(b.top, config.grid_top() - 160.0);
}

#[test]
fn test_options_pick_strategy() {
    let courses = vec![
        Course::new("a", "monday", "08:00", "10:00"),
        Course::new("b", "monday", "09:00", "11:00"),
        Course::new("c", "monday", "10:30", "12:00"),
    ];
    let clustered = calculate_layout_with(
        &courses,
        &LayoutOptions {
            overlap: OverlapStrategy::Clustered,
            ..LayoutOptions::default()
        },
    );
    let anchored = calculate_layout_with(
        &courses,
        &LayoutOptions {
            overlap: OverlapStrategy::Anchored,
            ..LayoutOptions::default()
        },
    );
    assert_ne!(clustered[2].left, anchored[2].left);
}
