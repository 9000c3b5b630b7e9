//! Schedule model, time parsing and boundary validation.

pub mod time;
pub mod types;
pub mod validate;

pub use time::{ClockTime, time_to_decimal};
pub use types::{Course, DAY_COUNT, Day, Schedule, ScheduleSummary};
pub use validate::{ClipWarning, ValidationReport, validate_course, validate_schedule};
