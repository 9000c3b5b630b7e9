//! Parser trait shared by the schedule document formats.

use crate::error::Result;
use crate::schedule::types::Schedule;

/// Trait for schedule document parsers.
///
/// Each format (JSON, TOML) implements this trait. Parsers only check the
/// document shape; course-level rules are left to validation.
pub trait Parser {
    /// Parse the input source string into a Schedule.
    fn parse(&self, src: &str) -> Result<Schedule>;
}
