use super::*;

use crate::layout::{LayoutOptions, full_layout};
use crate::schedule::types::Course;

fn sample() -> (Schedule, ScheduleLayout) {
    let mut schedule = Schedule::new("Ayu & Co", "2024/1");
    let mut c = Course::new("c1", "monday", "08:00", "09:40");
    c.name = "Calculus <I>".to_string();
    c.room = "B201".to_string();
    c.lecturer = "Dr. Sari".to_string();
    c.color = "#ef4444".to_string();
    schedule.courses = vec![c, Course::new("c2", "wednesday", "10:00", "11:00")];
    let layout = full_layout(&schedule.courses, &LayoutOptions::default());
    (schedule, layout)
}

#[test]
fn test_num_formatting() {
    assert_eq!(num(120.0), "120");
    assert_eq!(num(393.3333333), "393.33");
    assert_eq!(num(-8.5), "-8.5");
}

#[test]
fn test_escape() {
    assert_eq!(escape(r#"<a & "b">"#), "&lt;a &amp; &quot;b&quot;&gt;");
}

#[test]
fn test_title_font_size_bounds() {
    assert_eq!(title_font_size(40.0), 18.0);
    assert_eq!(title_font_size(100.0), 20.0);
    assert_eq!(title_font_size(500.0), 24.0);
}

#[test]
fn test_document_size_and_viewbox() {
    let (schedule, layout) = sample();
    let svg = SvgRenderer::default().render(&schedule, &layout);
    assert!(svg.starts_with("<svg"));
    assert!(svg.ends_with("</svg>"));
    // 08:00-12:00 visible: 240 + 70 + 4 * 160 + 80.
    assert!(svg.contains(r#"width="2480" height="1030" viewBox="0 0 2480 1030""#));
}

#[test]
fn test_scale_changes_size_not_viewbox() {
    let (schedule, layout) = sample();
    let svg = SvgRenderer::new(0.5).render(&schedule, &layout);
    assert!(svg.contains(r#"width="1240" height="515" viewBox="0 0 2480 1030""#));
    for bad in [0.0, -2.0, f64::NAN, f64::INFINITY] {
        let fallback = SvgRenderer::new(bad).render(&schedule, &layout);
        assert!(fallback.contains(r#"width="2480" height="1030""#), "scale {bad}");
    }
}

#[test]
fn test_course_cards() {
    let (schedule, layout) = sample();
    let svg = SvgRenderer::default().render(&schedule, &layout);
    assert_eq!(svg.matches(r#"<g class="course""#).count(), 2);
    assert!(svg.contains(r#"data-id="c1""#));
    assert!(svg.contains("Calculus &lt;I&gt;"));
    assert!(svg.contains(r##"fill="#ef4444" fill-opacity="0.08""##));
    // Missing color falls back to the default accent.
    assert!(svg.contains(r##"fill="#3b82f6""##));
    assert!(svg.contains("08:00 – 09:40"));
}

#[test]
fn test_card_inset_by_block_padding() {
    let (schedule, layout) = sample();
    let svg = SvgRenderer::default().render(&schedule, &layout);
    // Monday card: left 120 + padding 8, top 310.
    assert!(svg.contains(r#"<rect x="128" y="310""#));
}

#[test]
fn test_header_footer_and_labels() {
    let (schedule, layout) = sample();
    let svg = SvgRenderer::default().render(&schedule, &layout);
    assert!(svg.contains("Ayu &amp; Co"));
    assert!(svg.contains("Academic Schedule • 2024/1"));
    assert!(svg.contains("2 courses • 2 active days"));
    for label in ["08:00", "09:00", "10:00", "11:00", "12:00"] {
        assert!(svg.contains(&format!(">{label}</text>")), "missing {label}");
    }
    for day in Day::ALL {
        assert!(svg.contains(&format!(">{}</text>", day.label())));
    }
}
