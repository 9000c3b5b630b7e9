//! Wall-clock times in `HH:MM` form.
//!
//! `time_to_decimal` is the lenient reader used by the layout core (any `H:M`
//! pair of numbers). `ClockTime` is the strict type used by validation
//! (exactly two digits each, within a day).

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static HHMM: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d{2}):(\d{2})$").expect("valid regex"));

/// Convert `"HH:MM"` to fractional hours (`"09:30"` → 9.5).
///
/// Returns None when either side is not a number.
pub fn time_to_decimal(time: &str) -> Option<f64> {
    let (hours, minutes) = split_hm(time)?;
    Some(hours as f64 + minutes as f64 / 60.0)
}

/// Integer hour part of `"HH:MM"`.
pub fn hour_of(time: &str) -> Option<u32> {
    split_hm(time).map(|(h, _)| h)
}

fn split_hm(time: &str) -> Option<(u32, u32)> {
    let (h, m) = time.trim().split_once(':')?;
    Some((h.parse().ok()?, m.parse().ok()?))
}

// ─── ClockTime ───────────────────────────────────────────────────────────────

/// A validated 24-hour time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ClockTime {
    pub hour: u32,
    pub minute: u32,
}

impl ClockTime {
    pub fn new(hour: u32, minute: u32) -> Option<Self> {
        (hour < 24 && minute < 60).then_some(Self { hour, minute })
    }

    pub fn as_decimal(self) -> f64 {
        self.hour as f64 + self.minute as f64 / 60.0
    }

    pub fn minutes_since_midnight(self) -> u32 {
        self.hour * 60 + self.minute
    }
}

impl FromStr for ClockTime {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = HHMM
            .captures(s)
            .ok_or_else(|| format!("'{s}' is not in HH:MM form"))?;
        let hour: u32 = caps[1].parse().map_err(|_| format!("bad hour in '{s}'"))?;
        let minute: u32 = caps[2].parse().map_err(|_| format!("bad minute in '{s}'"))?;
        ClockTime::new(hour, minute).ok_or_else(|| format!("'{s}' is outside 00:00-23:59"))
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_schedule_time.rs"]
mod tests;
