//! JSON renderer: the layout as data for an external drawing component.

use serde::Serialize;

use super::Renderer;
use crate::export::ExportPlan;
use crate::layout::types::{CourseBlock, LayoutConfig, ScheduleLayout};
use crate::schedule::types::{Schedule, ScheduleSummary};

/// Serialized shape of a laid-out schedule.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutDocument<'a> {
    pub student_name: &'a str,
    pub semester: &'a str,
    pub summary: ScheduleSummary,
    pub config: &'a LayoutConfig,
    pub time_labels: &'a [String],
    pub blocks: &'a [CourseBlock],
    pub exports: Vec<ExportPlan>,
}

impl<'a> LayoutDocument<'a> {
    pub fn new(schedule: &'a Schedule, layout: &'a ScheduleLayout) -> Self {
        Self {
            student_name: &schedule.student_name,
            semester: &schedule.semester,
            summary: schedule.summary(),
            config: &layout.config,
            time_labels: &layout.time_labels,
            blocks: &layout.blocks,
            exports: ExportPlan::all(&layout.config),
        }
    }
}

pub struct JsonRenderer {
    pub pretty: bool,
}

impl JsonRenderer {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl Renderer for JsonRenderer {
    fn render(&self, schedule: &Schedule, layout: &ScheduleLayout) -> String {
        let doc = LayoutDocument::new(schedule, layout);
        let encoded = if self.pretty {
            serde_json::to_string_pretty(&doc)
        } else {
            serde_json::to_string(&doc)
        };
        // Every field is a plain struct, number or string; encoding cannot fail.
        encoded.unwrap_or_default()
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers_json.rs"]
mod tests;
