//! Configuration for the rendering pipeline.
//!
//! Grid geometry lives in `GridSpec`; `RenderConfig` carries the choices about
//! how a laid-out schedule is turned into output.

use std::str::FromStr;

use crate::layout::{GridSpec, LayoutOptions, OverlapStrategy};

/// Output produced by `render_schedule`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Character grid (Unicode box drawing or plain ASCII).
    #[default]
    Text,
    Svg,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "ascii" | "txt" => Ok(Self::Text),
            "svg" => Ok(Self::Svg),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown output format '{other}'; use text, svg or json")),
        }
    }
}

/// Character cells used by the text renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellSize {
    /// Columns per day (including the separator on its left).
    pub day_width: usize,
    /// Rows per hour; 4 gives quarter-hour resolution.
    pub rows_per_hour: usize,
    /// Columns of the time-label gutter.
    pub time_width: usize,
}

impl Default for CellSize {
    fn default() -> Self {
        Self {
            day_width: 18,
            rows_per_hour: 4,
            time_width: 6,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub format: OutputFormat,
    /// Use Unicode box-drawing characters (true) or plain ASCII (false).
    pub unicode: bool,
    /// SVG output scale; 1.0 is full canvas size.
    pub scale: f64,
    pub overlap: OverlapStrategy,
    /// Reject the schedule when validation finds any problem.
    pub strict: bool,
    pub cells: CellSize,
    pub grid: GridSpec,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            unicode: true,
            scale: 1.0,
            overlap: OverlapStrategy::default(),
            strict: false,
            cells: CellSize::default(),
            grid: GridSpec::default(),
        }
    }
}

impl RenderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn layout_options(&self) -> LayoutOptions {
        LayoutOptions {
            grid: self.grid,
            overlap: self.overlap,
        }
    }
}
