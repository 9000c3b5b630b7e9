//! schedule-grid: weekly class schedule layout and rendering.
//!
//! Public API: `render_schedule()` for the whole pipeline, `layout_schedule()`
//! when a caller wants geometry only.
//!
//! Pipeline: parse (JSON/TOML) → validate → configure grid → place blocks →
//! resolve overlaps → render (text, SVG or JSON).

pub mod config;
pub mod error;
pub mod export;
pub mod layout;
pub mod parsers;
pub mod renderers;
pub mod schedule;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use config::{CellSize, OutputFormat, RenderConfig};
pub use error::{LayoutError, Result, ScheduleError, ValidationError};
pub use layout::{CourseBlock, GridSpec, LayoutConfig, OverlapStrategy, ScheduleLayout};
pub use schedule::{Course, Day, Schedule};

use log::warn;

use crate::layout::{full_layout, strict_layout};
use crate::renderers::renderer_for;
use crate::schedule::validate_schedule;

/// Parse a schedule document and render it.
///
/// # Arguments
/// * `src` - JSON or TOML schedule document (format detected from content)
/// * `config` - output format, overlap strategy and strictness
pub fn render_schedule(src: &str, config: &RenderConfig) -> Result<String> {
    let schedule = parsers::parse(src)?;
    let layout = layout_schedule(&schedule, config)?;
    Ok(render_with(&schedule, &layout, config))
}

/// Lay out an already parsed schedule.
///
/// In strict mode any validation failure is an error. Otherwise findings are
/// logged and every course goes to the layout core, which skips what it
/// cannot place.
pub fn layout_schedule(schedule: &Schedule, config: &RenderConfig) -> Result<ScheduleLayout> {
    let options = config.layout_options();
    if config.strict {
        return Ok(strict_layout(schedule, &options)?);
    }

    let report = validate_schedule(schedule, &options.grid);
    for err in &report.schedule_errors {
        warn!("{err}");
    }
    for rejected in &report.rejected {
        warn!("{rejected}");
    }
    for clipped in &report.warnings {
        warn!("{clipped}");
    }
    Ok(full_layout(&schedule.courses, &options))
}

/// Render a computed layout in the configured output format.
pub fn render_with(schedule: &Schedule, layout: &ScheduleLayout, config: &RenderConfig) -> String {
    renderer_for(config).render(schedule, layout)
}

#[cfg(test)]
#[path = "../tests/rust/test_api.rs"]
mod tests;
