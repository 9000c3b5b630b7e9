use super::*;

use serde_json::Value;

use crate::layout::{LayoutOptions, full_layout};
use crate::schedule::types::Course;

fn render(pretty: bool) -> Value {
    let mut schedule = Schedule::new("Ayu", "2024/1");
    schedule.courses = vec![
        Course::new("a", "tuesday", "08:00", "10:00"),
        Course::new("b", "tuesday", "09:00", "09:30"),
        Course::new("ghost", "sunday", "09:00", "09:30"),
    ];
    let layout = full_layout(&schedule.courses, &LayoutOptions::default());
    let out = JsonRenderer::new(pretty).render(&schedule, &layout);
    serde_json::from_str(&out).unwrap()
}

#[test]
fn test_document_fields() {
    let doc = render(true);
    assert_eq!(doc["studentName"], "Ayu");
    assert_eq!(doc["semester"], "2024/1");
    assert_eq!(doc["summary"]["totalCourses"], 3);
    assert_eq!(doc["summary"]["activeDays"], 1);
    assert_eq!(doc["config"]["startHour"], 8);
    assert_eq!(doc["config"]["endHour"], 11);
    assert_eq!(doc["timeLabels"][0], "08:00");
    assert_eq!(doc["timeLabels"].as_array().unwrap().len(), 4);
}

#[test]
fn test_blocks_carry_course_and_geometry() {
    let doc = render(false);
    let blocks = doc["blocks"].as_array().unwrap();
    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks[0]["course"]["id"], "a");
    assert_eq!(blocks[0]["course"]["startTime"], "08:00");
    assert_eq!(blocks[0]["column"], 1);
    assert_eq!(blocks[0]["top"], 310.0);
    assert!(blocks[1]["left"].as_f64().unwrap() > blocks[0]["left"].as_f64().unwrap());
}

#[test]
fn test_export_plans_included() {
    let doc = render(true);
    let exports = doc["exports"].as_array().unwrap();
    let formats: Vec<&str> = exports.iter().map(|e| e["format"].as_str().unwrap()).collect();
    assert_eq!(formats, vec!["png", "jpeg", "pdf"]);
    assert_eq!(exports[1]["quality"], 0.95);
    assert!(exports[0].get("quality").is_none());
    assert!(exports[2]["page"].is_object());
}

#[test]
fn test_nested_keys_are_camel_case() {
    let doc = render(false);
    assert_eq!(doc["config"]["canvasWidth"], 2480.0);
    assert_eq!(doc["config"]["dayColumnWidth"], 2360.0 / 6.0);
    assert!(doc["config"].get("canvas_width").is_none());
    assert_eq!(doc["exports"][0]["mimeType"], "image/png");
    assert_eq!(doc["exports"][0]["fileName"], "schedule.png");
    assert_eq!(doc["exports"][0]["captureScale"], 3.0);
    assert!(doc["exports"][2]["page"]["widthMm"].is_number());
    assert!(doc["exports"][2]["page"]["page"]["heightMm"].is_number());
}

#[test]
fn test_pretty_vs_compact() {
    let mut schedule = Schedule::new("Ayu", "2024/1");
    schedule.courses = vec![Course::new("a", "monday", "08:00", "09:00")];
    let layout = full_layout(&schedule.courses, &LayoutOptions::default());
    let pretty = JsonRenderer::new(true).render(&schedule, &layout);
    let compact = JsonRenderer::new(false).render(&schedule, &layout);
    assert!(pretty.contains('\n'));
    assert!(!compact.contains('\n'));
}
