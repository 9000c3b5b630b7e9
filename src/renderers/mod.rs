//! Renderer registry and Renderer trait.

pub mod ascii;
pub mod canvas;
pub mod charset;
pub mod json;
pub mod svg;

pub use ascii::AsciiRenderer;
pub use json::JsonRenderer;
pub use svg::SvgRenderer;

use crate::config::{OutputFormat, RenderConfig};
use crate::layout::types::ScheduleLayout;
use crate::schedule::types::Schedule;

/// Trait for schedule renderers.
///
/// Renderers read geometry only from the layout's `LayoutConfig` and blocks;
/// the schedule supplies header and footer text.
pub trait Renderer {
    fn render(&self, schedule: &Schedule, layout: &ScheduleLayout) -> String;
}

/// Pick the renderer for a configured output format.
pub fn renderer_for(config: &RenderConfig) -> Box<dyn Renderer> {
    match config.format {
        OutputFormat::Text => Box::new(AsciiRenderer::with_cells(config.unicode, config.cells)),
        OutputFormat::Svg => Box::new(SvgRenderer::new(config.scale)),
        OutputFormat::Json => Box::new(JsonRenderer::new(true)),
    }
}
