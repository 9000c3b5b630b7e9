//! SVG renderer: draws the printable grid at canvas pixel coordinates.
//!
//! The document's viewBox is the full canvas; `scale` only changes the
//! reported width and height, so an external rasterizer can capture at any
//! resolution from the same markup.

use log::warn;

use super::Renderer;
use crate::layout::types::{CourseBlock, LayoutConfig, ScheduleLayout};
use crate::schedule::types::{Day, Schedule};

// ── Constants ────────────────────────────────────────────────────────────────

const FONT_FAMILY: &str = "Inter, Helvetica, Arial, sans-serif";
const BACKGROUND: &str = "#f8fafc";
const HEADER_FILL: &str = "#4f46e5";
const GRID_STROKE: &str = "#e2e8f0";
const LABEL_FILL: &str = "#334155";
const MUTED_FILL: &str = "#64748b";
const DEFAULT_COURSE_COLOR: &str = "#3b82f6";
/// Card background and border alpha over the course color.
const CARD_FILL_OPACITY: f64 = 0.08;
const CARD_STROKE_OPACITY: f64 = 0.19;
const ACCENT_WIDTH: f64 = 4.0;

// ── Helpers ──────────────────────────────────────────────────────────────────

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn font(size: f64, weight: u32) -> String {
    format!(r#"font-family="{FONT_FAMILY}" font-size="{}" font-weight="{weight}""#, num(size))
}

/// Format a coordinate without trailing zeros.
fn num(v: f64) -> String {
    let rounded = (v * 100.0).round() / 100.0;
    if rounded == rounded.trunc() {
        format!("{}", rounded as i64)
    } else {
        format!("{rounded}")
    }
}

fn course_color(color: &str) -> String {
    if color.trim().is_empty() {
        DEFAULT_COURSE_COLOR.to_string()
    } else {
        escape(color.trim())
    }
}

/// Title size shrinks for short cards: between 18 and 24 px.
pub fn title_font_size(height: f64) -> f64 {
    (height / 5.0).clamp(18.0, 24.0)
}

// ── Sections ─────────────────────────────────────────────────────────────────

fn render_header(schedule: &Schedule, c: &LayoutConfig) -> String {
    let w = num(c.canvas_width);
    let h = num(c.header_height);
    let title_y = num(c.header_height * 0.45);
    let sub_y = num(c.header_height * 0.45 + 44.0);
    let x = num(c.padding * 2.0);
    let count_x = num(c.canvas_width - c.padding * 2.0);
    let count = schedule.courses.len();
    [
        format!(r#"<rect x="0" y="0" width="{w}" height="{h}" fill="{HEADER_FILL}"/>"#),
        format!(
            r#"<text x="{x}" y="{title_y}" fill="white" {}>{}</text>"#,
            font(60.0, 900),
            escape(&schedule.student_name)
        ),
        format!(
            r#"<text x="{x}" y="{sub_y}" fill="white" fill-opacity="0.9" {}>Academic Schedule • {}</text>"#,
            font(20.0, 600),
            escape(&schedule.semester)
        ),
        format!(
            r#"<text x="{count_x}" y="{title_y}" fill="white" text-anchor="end" {}>{count}</text>"#,
            font(36.0, 900)
        ),
        format!(
            r#"<text x="{count_x}" y="{sub_y}" fill="white" fill-opacity="0.8" text-anchor="end" {}>Total Courses</text>"#,
            font(14.0, 500)
        ),
    ]
    .join("\n")
}

fn render_day_headers(c: &LayoutConfig) -> String {
    let inset = 8.0;
    Day::ALL
        .iter()
        .map(|day| {
            let x = c.column_left(day.index());
            let cx = num(x + c.day_column_width / 2.0);
            let y = c.header_height;
            format!(
                "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" rx=\"12\" fill=\"white\" stroke=\"{GRID_STROKE}\" stroke-width=\"2\"/>\n\
                 <text x=\"{cx}\" y=\"{}\" text-anchor=\"middle\" fill=\"{MUTED_FILL}\" {}>{}</text>\n\
                 <text x=\"{cx}\" y=\"{}\" text-anchor=\"middle\" fill=\"{LABEL_FILL}\" {}>{}</text>",
                num(x + inset),
                num(y + inset / 2.0),
                num(c.day_column_width - 2.0 * inset),
                num(c.day_header_height - inset),
                num(y + c.day_header_height * 0.4),
                font(12.0, 700),
                day.short(),
                num(y + c.day_header_height * 0.75),
                font(18.0, 900),
                day.label()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_time_grid(c: &LayoutConfig, time_labels: &[String]) -> String {
    let mut parts = Vec::new();
    let x0 = num(c.time_column_width);
    let x1 = num(c.canvas_width);
    let label_x = num(c.time_column_width - 16.0);
    for (k, label) in time_labels.iter().enumerate() {
        let y = c.grid_top() + k as f64 * c.hour_height;
        let yy = num(y);
        parts.push(format!(
            r#"<line x1="{x0}" y1="{yy}" x2="{x1}" y2="{yy}" stroke="{GRID_STROKE}" stroke-width="1"/>"#
        ));
        parts.push(format!(
            r#"<text x="{label_x}" y="{}" text-anchor="end" fill="{LABEL_FILL}" {}>{}</text>"#,
            num(y + 32.0),
            font(30.0, 700),
            escape(label)
        ));
    }
    parts.join("\n")
}

fn render_block(block: &CourseBlock, c: &LayoutConfig) -> String {
    let course = &block.course;
    let color = course_color(&course.color);
    let x = block.left + c.block_padding;
    let w = (block.width - 2.0 * c.block_padding).max(0.0);
    let h = block.height.max(0.0);
    let (sx, sy, sw, sh) = (num(x), num(block.top), num(w), num(h));
    let r = num(c.card_radius.min(w / 2.0).min(h / 2.0));
    let title_size = title_font_size(block.height);
    let tx = num(x + ACCENT_WIDTH + 12.0);
    let line = |offset: f64| num(block.top + offset);

    let mut parts = vec![
        format!(r#"<g class="course" data-id="{}">"#, escape(&course.id)),
        format!(
            r#"<rect x="{sx}" y="{sy}" width="{sw}" height="{sh}" rx="{r}" fill="{color}" fill-opacity="{CARD_FILL_OPACITY}" stroke="{color}" stroke-opacity="{CARD_STROKE_OPACITY}"/>"#
        ),
        format!(
            r#"<rect x="{sx}" y="{sy}" width="{}" height="{sh}" fill="{color}"/>"#,
            num(ACCENT_WIDTH.min(w))
        ),
        format!(
            r#"<text x="{tx}" y="{}" fill="{color}" {}>{}</text>"#,
            line(12.0 + title_size),
            font(title_size, 900),
            escape(&course.name)
        ),
        format!(
            r#"<text x="{tx}" y="{}" fill="{color}" {}>{}</text>"#,
            line(title_size + 40.0),
            font(14.0, 600),
            escape(&course.lecturer)
        ),
        format!(
            r#"<text x="{tx}" y="{}" fill="{color}" {}>{}</text>"#,
            line(title_size + 60.0),
            font(14.0, 500),
            escape(&course.room)
        ),
        format!(
            r#"<text x="{tx}" y="{}" fill="{color}" {}>{} – {}</text>"#,
            num(block.top + h - 12.0),
            font(14.0, 700),
            escape(&course.start_time),
            escape(&course.end_time)
        ),
    ];
    parts.push("</g>".to_string());
    parts.join("\n")
}

fn render_footer(schedule: &Schedule, c: &LayoutConfig) -> String {
    let y = c.canvas_height - c.footer_height;
    let summary = schedule.summary();
    let text_y = num(y + c.footer_height / 2.0 + 5.0);
    [
        format!(
            r##"<rect x="0" y="{}" width="{}" height="{}" fill="#f1f5f9"/>"##,
            num(y),
            num(c.canvas_width),
            num(c.footer_height)
        ),
        format!(
            r#"<text x="{}" y="{text_y}" text-anchor="end" fill="{MUTED_FILL}" {}>{} courses • {} active days</text>"#,
            num(c.canvas_width - c.padding * 2.0),
            font(14.0, 500),
            summary.total_courses,
            summary.active_days
        ),
    ]
    .join("\n")
}

// ── Renderer ─────────────────────────────────────────────────────────────────

pub struct SvgRenderer {
    pub scale: f64,
}

impl SvgRenderer {
    pub fn new(scale: f64) -> Self {
        Self { scale }
    }
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl Renderer for SvgRenderer {
    fn render(&self, schedule: &Schedule, layout: &ScheduleLayout) -> String {
        let c = &layout.config;
        let scale = if self.scale.is_finite() && self.scale > 0.0 {
            self.scale
        } else {
            warn!("ignoring svg scale {}, drawing at 1.0", self.scale);
            1.0
        };
        let (vw, vh) = (num(c.canvas_width), num(c.canvas_height));

        let mut parts = vec![
            format!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {vw} {vh}">"#,
                num(c.canvas_width * scale),
                num(c.canvas_height * scale)
            ),
            format!(r#"<rect width="{vw}" height="{vh}" fill="{BACKGROUND}"/>"#),
            render_header(schedule, c),
            render_day_headers(c),
            render_time_grid(c, &layout.time_labels),
        ];
        // Cards on top of grid lines.
        parts.extend(layout.blocks.iter().map(|b| render_block(b, c)));
        parts.push(render_footer(schedule, c));
        parts.push("</svg>".to_string());
        parts.join("\n")
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers_svg.rs"]
mod tests;
