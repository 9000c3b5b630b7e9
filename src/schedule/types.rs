//! Schedule data model: Day, Course, Schedule, ScheduleSummary.
//!
//! Field names serialize in camelCase so JSON and TOML documents use
//! `studentName`, `startTime`, `endTime`.

use serde::{Deserialize, Serialize};

// ─── Day ─────────────────────────────────────────────────────────────────────

/// Number of weekday columns in the grid (Monday through Saturday).
pub const DAY_COUNT: usize = 6;

/// A weekday column of the grid. There is no Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Day {
    pub const ALL: [Day; DAY_COUNT] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
    ];

    /// Look up a day by its exact lowercase tag (`"monday"`).
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.tag() == tag)
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Zero-based column index.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn tag(self) -> &'static str {
        match self {
            Day::Monday => "monday",
            Day::Tuesday => "tuesday",
            Day::Wednesday => "wednesday",
            Day::Thursday => "thursday",
            Day::Friday => "friday",
            Day::Saturday => "saturday",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
        }
    }

    pub fn short(self) -> &'static str {
        match self {
            Day::Monday => "MON",
            Day::Tuesday => "TUE",
            Day::Wednesday => "WED",
            Day::Thursday => "THU",
            Day::Friday => "FRI",
            Day::Saturday => "SAT",
        }
    }
}

impl std::fmt::Display for Day {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// ─── Course ──────────────────────────────────────────────────────────────────

/// One scheduled class occurrence.
///
/// `day` stays a raw tag so documents with an unknown day still load; the
/// layout core skips such courses and validation reports them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: String,
    pub name: String,
    pub room: String,
    pub lecturer: String,
    pub day: String,
    /// `HH:MM`, 24-hour.
    pub start_time: String,
    /// `HH:MM`, 24-hour.
    pub end_time: String,
    /// Hex color token, opaque to layout.
    #[serde(default)]
    pub color: String,
}

impl Course {
    pub fn new(
        id: impl Into<String>,
        day: impl Into<String>,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
    ) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            room: String::new(),
            lecturer: String::new(),
            day: day.into(),
            start_time: start_time.into(),
            end_time: end_time.into(),
            color: String::new(),
        }
    }

    /// The recognized weekday, if the tag is one of the six known days.
    pub fn weekday(&self) -> Option<Day> {
        Day::from_tag(&self.day)
    }
}

// ─── Schedule ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    pub student_name: String,
    pub semester: String,
    #[serde(default)]
    pub courses: Vec<Course>,
}

impl Schedule {
    pub fn new(student_name: impl Into<String>, semester: impl Into<String>) -> Self {
        Self {
            student_name: student_name.into(),
            semester: semester.into(),
            courses: Vec::new(),
        }
    }

    pub fn summary(&self) -> ScheduleSummary {
        let active_days = Day::ALL
            .iter()
            .filter(|day| self.courses.iter().any(|c| c.day == day.tag()))
            .count();
        ScheduleSummary {
            total_courses: self.courses.len(),
            active_days,
        }
    }
}

/// Footer figures of the printable grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleSummary {
    pub total_courses: usize,
    pub active_days: usize,
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
#[path = "../../tests/rust/test_schedule_types.rs"]
mod tests;
