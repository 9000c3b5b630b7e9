//! Export planning for the external rasterizer.
//!
//! The crate does not produce bitmaps. It tells the capture step how large to
//! rasterize the canvas, in which format, and where the bitmap goes on a PDF
//! page. PDF pages letterbox the image instead of stretching it.

use std::str::FromStr;

use serde::Serialize;

use crate::error::ScheduleError;
use crate::layout::types::LayoutConfig;

pub const CAPTURE_BACKGROUND: &str = "#ffffff";
pub const JPEG_QUALITY: f64 = 0.95;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Png,
    Jpeg,
    Pdf,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] = [ExportFormat::Png, ExportFormat::Jpeg, ExportFormat::Pdf];

    /// Device pixel ratio used for capture.
    pub fn capture_scale(self) -> f64 {
        match self {
            ExportFormat::Png | ExportFormat::Jpeg => 3.0,
            ExportFormat::Pdf => 2.0,
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            ExportFormat::Png => "image/png",
            ExportFormat::Jpeg => "image/jpeg",
            ExportFormat::Pdf => "application/pdf",
        }
    }

    pub fn default_file_name(self) -> &'static str {
        match self {
            ExportFormat::Png => "schedule.png",
            ExportFormat::Jpeg => "schedule.jpg",
            ExportFormat::Pdf => "schedule.pdf",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "png" => Ok(Self::Png),
            "jpg" | "jpeg" => Ok(Self::Jpeg),
            "pdf" => Ok(Self::Pdf),
            other => Err(ScheduleError::UnsupportedFormat {
                kind: "export format",
                value: other.to_string(),
            }),
        }
    }
}

// ─── Page placement ──────────────────────────────────────────────────────────

/// A page size in millimetres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSize {
    pub width_mm: f64,
    pub height_mm: f64,
}

impl PageSize {
    pub const A4_LANDSCAPE: PageSize = PageSize {
        width_mm: 297.0,
        height_mm: 210.0,
    };
}

/// Where the captured image is drawn on the page, in millimetres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PagePlacement {
    pub page: PageSize,
    pub x_mm: f64,
    pub y_mm: f64,
    pub width_mm: f64,
    pub height_mm: f64,
}

/// Fit an image onto a page keeping its aspect ratio, centered, with the
/// spare space split evenly on both sides.
pub fn fit_to_page(image_width: f64, image_height: f64, page: PageSize) -> PagePlacement {
    if image_width <= 0.0 || image_height <= 0.0 {
        return PagePlacement {
            page,
            x_mm: 0.0,
            y_mm: 0.0,
            width_mm: page.width_mm,
            height_mm: page.height_mm,
        };
    }
    let scale = (page.width_mm / image_width).min(page.height_mm / image_height);
    let width_mm = image_width * scale;
    let height_mm = image_height * scale;
    PagePlacement {
        page,
        x_mm: (page.width_mm - width_mm) / 2.0,
        y_mm: (page.height_mm - height_mm) / 2.0,
        width_mm,
        height_mm,
    }
}

// ─── ExportPlan ──────────────────────────────────────────────────────────────

/// Instructions for one capture of the rendered canvas.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportPlan {
    pub format: ExportFormat,
    pub mime_type: &'static str,
    pub file_name: &'static str,
    pub capture_scale: f64,
    pub pixel_width: u32,
    pub pixel_height: u32,
    pub background: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<PagePlacement>,
}

impl ExportPlan {
    pub fn for_format(format: ExportFormat, config: &LayoutConfig) -> Self {
        let scale = format.capture_scale();
        let pixel_width = (config.canvas_width * scale).round() as u32;
        let pixel_height = (config.canvas_height * scale).round() as u32;
        Self {
            format,
            mime_type: format.mime_type(),
            file_name: format.default_file_name(),
            capture_scale: scale,
            pixel_width,
            pixel_height,
            background: CAPTURE_BACKGROUND,
            quality: (format == ExportFormat::Jpeg).then_some(JPEG_QUALITY),
            page: (format == ExportFormat::Pdf).then(|| {
                fit_to_page(
                    pixel_width as f64,
                    pixel_height as f64,
                    PageSize::A4_LANDSCAPE,
                )
            }),
        }
    }

    /// One plan per supported format.
    pub fn all(config: &LayoutConfig) -> Vec<Self> {
        ExportFormat::ALL
            .into_iter()
            .map(|f| Self::for_format(f, config))
            .collect()
    }
}

#[cfg(test)]
#[path = "../tests/rust/test_export.rs"]
mod tests;
