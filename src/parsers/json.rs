//! JSON schedule documents.
//!
//! ```json
//! { "studentName": "Ayu", "semester": "2024/1",
//!   "courses": [ { "id": "c1", "name": "Calculus", "room": "B201",
//!                  "lecturer": "Dr. Sari", "day": "monday",
//!                  "startTime": "08:00", "endTime": "09:40", "color": "#3b82f6" } ] }
//! ```

use super::Parser;
use crate::error::Result;
use crate::schedule::types::Schedule;

pub struct JsonParser;

impl Parser for JsonParser {
    fn parse(&self, src: &str) -> Result<Schedule> {
        Ok(serde_json::from_str(src)?)
    }
}
