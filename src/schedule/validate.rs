//! Boundary validation for schedules.
//!
//! Produces a report instead of failing, so callers decide between rejecting
//! the document (strict layout) and logging findings (lenient layout).

use std::collections::HashSet;

use serde::Serialize;

use super::time::ClockTime;
use super::types::{Course, Day, Schedule};
use crate::error::{RejectedCourse, ValidationError};
use crate::layout::types::GridSpec;

/// An accepted course that will not be fully visible in the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClipWarning {
    pub course_id: String,
    pub start_time: String,
    pub end_time: String,
    pub visible_from: u32,
    pub visible_to: u32,
}

impl std::fmt::Display for ClipWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "course '{}' ({}-{}) extends outside the {:02}:00-{:02}:00 display range and will be clipped",
            self.course_id, self.start_time, self.end_time, self.visible_from, self.visible_to
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub schedule_errors: Vec<ValidationError>,
    pub accepted: Vec<Course>,
    pub rejected: Vec<RejectedCourse>,
    pub warnings: Vec<ClipWarning>,
}

impl ValidationReport {
    /// No schedule errors and no rejected courses. Warnings do not count.
    pub fn is_clean(&self) -> bool {
        self.schedule_errors.is_empty() && self.rejected.is_empty()
    }
}

/// Validate a whole schedule against the grid's display bounds.
pub fn validate_schedule(schedule: &Schedule, grid: &GridSpec) -> ValidationReport {
    let mut report = ValidationReport::default();

    if schedule.student_name.trim().is_empty() {
        report
            .schedule_errors
            .push(ValidationError::EmptyField { field: "studentName" });
    }
    if schedule.semester.trim().is_empty() {
        report
            .schedule_errors
            .push(ValidationError::EmptyField { field: "semester" });
    }

    let mut seen_ids: HashSet<&str> = HashSet::new();
    for course in &schedule.courses {
        let mut reasons = match validate_course(course) {
            Ok(_) => Vec::new(),
            Err(reasons) => reasons,
        };
        if !course.id.is_empty() && !seen_ids.insert(course.id.as_str()) {
            reasons.push(ValidationError::DuplicateId(course.id.clone()));
        }

        if reasons.is_empty() {
            if let Some(w) = clip_warning(course, grid) {
                report.warnings.push(w);
            }
            report.accepted.push(course.clone());
        } else {
            report.rejected.push(RejectedCourse {
                course: course.clone(),
                reasons,
            });
        }
    }

    report
}

/// Check one course in isolation, returning its day and parsed times.
pub fn validate_course(
    course: &Course,
) -> Result<(Day, ClockTime, ClockTime), Vec<ValidationError>> {
    let mut reasons = Vec::new();

    for (field, value) in [
        ("id", &course.id),
        ("name", &course.name),
        ("room", &course.room),
        ("lecturer", &course.lecturer),
    ] {
        if value.trim().is_empty() {
            reasons.push(ValidationError::EmptyField { field });
        }
    }

    let day = course.weekday();
    if day.is_none() {
        reasons.push(ValidationError::UnknownDay(course.day.clone()));
    }

    let start = parse_field("startTime", &course.start_time, &mut reasons);
    let end = parse_field("endTime", &course.end_time, &mut reasons);
    if let (Some(s), Some(e)) = (start, end) {
        if e <= s {
            reasons.push(ValidationError::NonPositiveDuration {
                start: course.start_time.clone(),
                end: course.end_time.clone(),
            });
        }
    }

    match (day, start, end) {
        (Some(d), Some(s), Some(e)) if reasons.is_empty() => Ok((d, s, e)),
        _ => Err(reasons),
    }
}

fn parse_field(
    field: &'static str,
    value: &str,
    reasons: &mut Vec<ValidationError>,
) -> Option<ClockTime> {
    match value.parse::<ClockTime>() {
        Ok(t) => Some(t),
        Err(_) => {
            reasons.push(ValidationError::MalformedTime {
                field,
                value: value.to_string(),
            });
            None
        }
    }
}

fn clip_warning(course: &Course, grid: &GridSpec) -> Option<ClipWarning> {
    let start: ClockTime = course.start_time.parse().ok()?;
    let end: ClockTime = course.end_time.parse().ok()?;
    let floor = grid.display_floor * 60;
    let ceiling = grid.display_ceiling * 60;
    if start.minutes_since_midnight() < floor || end.minutes_since_midnight() > ceiling {
        Some(ClipWarning {
            course_id: course.id.clone(),
            start_time: course.start_time.clone(),
            end_time: course.end_time.clone(),
            visible_from: grid.display_floor,
            visible_to: grid.display_ceiling,
        })
    } else {
        None
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_schedule_validate.rs"]
mod tests;
