//! Error types for parsing, validating and laying out schedules.
//!
//! The layout core itself never fails; these errors live at the boundary
//! (reading a document, strict validation, CLI I/O).

use thiserror::Error;

use crate::schedule::types::Course;

/// Result type alias for boundary operations.
pub type Result<T> = std::result::Result<T, ScheduleError>;

/// Why a schedule or a course was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} must not be empty")]
    EmptyField { field: &'static str },

    #[error("unknown day '{0}' (expected monday through saturday)")]
    UnknownDay(String),

    #[error("{field} '{value}' is not a valid HH:MM time")]
    MalformedTime { field: &'static str, value: String },

    #[error("end time {end} is not after start time {start}")]
    NonPositiveDuration { start: String, end: String },

    #[error("duplicate course id '{0}'")]
    DuplicateId(String),
}

/// A course that failed validation, with every reason found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedCourse {
    pub course: Course,
    pub reasons: Vec<ValidationError>,
}

impl std::fmt::Display for RejectedCourse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let reasons: Vec<String> = self.reasons.iter().map(ToString::to_string).collect();
        write!(f, "course '{}': {}", self.course.id, reasons.join("; "))
    }
}

/// Strict layout refused the input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("invalid schedule: {}", join(.0))]
    InvalidSchedule(Vec<ValidationError>),

    #[error("{} course(s) rejected: {}", .0.len(), join(.0))]
    RejectedCourses(Vec<RejectedCourse>),
}

fn join<T: std::fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Errors surfaced by the public API and the CLI.
#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("invalid JSON schedule: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid TOML schedule: {0}")]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error("unsupported {kind} '{value}'")]
    UnsupportedFormat { kind: &'static str, value: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
