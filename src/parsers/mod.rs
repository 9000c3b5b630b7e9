//! Parser registry: detect the document format and dispatch to its parser.

pub mod base;
pub mod json;
pub mod toml_file;

pub use base::Parser;
pub use json::JsonParser;
pub use toml_file::TomlParser;

use std::path::Path;
use std::str::FromStr;

use crate::error::{Result, ScheduleError};
use crate::schedule::types::Schedule;

/// Schedule document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Json,
    Toml,
}

impl FromStr for SourceFormat {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "toml" => Ok(Self::Toml),
            other => Err(ScheduleError::UnsupportedFormat {
                kind: "input format",
                value: other.to_string(),
            }),
        }
    }
}

impl SourceFormat {
    /// Format implied by a file extension, if it names one.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_lowercase().as_str() {
            "json" => Some(Self::Json),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }
}

/// Guess the format from the content: a document opening with `{` is JSON,
/// anything else is read as TOML.
pub fn detect_format(src: &str) -> SourceFormat {
    if src.trim_start().starts_with('{') {
        SourceFormat::Json
    } else {
        SourceFormat::Toml
    }
}

/// Parse a schedule document, detecting its format.
pub fn parse(src: &str) -> Result<Schedule> {
    parse_as(src, detect_format(src))
}

pub fn parse_as(src: &str, format: SourceFormat) -> Result<Schedule> {
    match format {
        SourceFormat::Json => JsonParser.parse(src),
        SourceFormat::Toml => TomlParser.parse(src),
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_parsers.rs"]
mod tests;
