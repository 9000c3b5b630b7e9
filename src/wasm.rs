//! WASM bindings for schedule-grid.
//!
//! Exposes `layoutSchedule` and `renderSvg` to JavaScript via wasm-bindgen.

use wasm_bindgen::prelude::*;

use crate::config::{OutputFormat, RenderConfig};

/// Lay out a schedule document and return the JSON layout document.
#[wasm_bindgen(js_name = "layoutSchedule")]
pub fn layout_schedule(src: &str) -> Result<String, JsError> {
    let config = RenderConfig {
        format: OutputFormat::Json,
        ..RenderConfig::default()
    };
    crate::render_schedule(src, &config).map_err(|e| JsError::new(&e.to_string()))
}

/// Render a schedule document to SVG.
///
/// - `scale`: output size multiplier; the viewBox stays at canvas size
#[wasm_bindgen(js_name = "renderSvg")]
pub fn render_svg(src: &str, scale: f64) -> Result<String, JsError> {
    let config = RenderConfig {
        format: OutputFormat::Svg,
        scale,
        ..RenderConfig::default()
    };
    crate::render_schedule(src, &config).map_err(|e| JsError::new(&e.to_string()))
}
