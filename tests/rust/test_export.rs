use super::*;

use approx::assert_relative_eq;

use crate::layout::get_layout_config;

#[test]
fn test_format_from_str() {
    assert_eq!("PNG".parse::<ExportFormat>().unwrap(), ExportFormat::Png);
    assert_eq!("jpg".parse::<ExportFormat>().unwrap(), ExportFormat::Jpeg);
    assert_eq!("jpeg".parse::<ExportFormat>().unwrap(), ExportFormat::Jpeg);
    assert_eq!("pdf".parse::<ExportFormat>().unwrap(), ExportFormat::Pdf);
    let err = "gif".parse::<ExportFormat>().unwrap_err();
    assert_eq!(err.to_string(), "unsupported export format 'gif'");
}

#[test]
fn test_png_plan() {
    let config = get_layout_config(&[]);
    let plan = ExportPlan::for_format(ExportFormat::Png, &config);
    assert_eq!(plan.capture_scale, 3.0);
    assert_eq!(plan.pixel_width, 7440);
    assert_eq!(plan.pixel_height, (config.canvas_height * 3.0) as u32);
    assert_eq!(plan.file_name, "schedule.png");
    assert_eq!(plan.mime_type, "image/png");
    assert_eq!(plan.background, "#ffffff");
    assert_eq!(plan.quality, None);
    assert_eq!(plan.page, None);
}

#[test]
fn test_jpeg_plan_has_quality() {
    let plan = ExportPlan::for_format(ExportFormat::Jpeg, &get_layout_config(&[]));
    assert_eq!(plan.quality, Some(0.95));
    assert_eq!(plan.file_name, "schedule.jpg");
}

#[test]
fn test_pdf_plan_letterboxed() {
    let config = get_layout_config(&[]);
    let plan = ExportPlan::for_format(ExportFormat::Pdf, &config);
    assert_eq!(plan.capture_scale, 2.0);
    let page = plan.page.unwrap();
    assert_eq!(page.page, PageSize::A4_LANDSCAPE);
    let aspect = config.canvas_width / config.canvas_height;
    assert_relative_eq!(page.width_mm / page.height_mm, aspect, epsilon = 1e-9);
    assert!(page.width_mm <= 297.0 + 1e-9 && page.height_mm <= 210.0 + 1e-9);
}

#[test]
fn test_fit_wide_image_bars_top_and_bottom() {
    let p = fit_to_page(2970.0, 1000.0, PageSize::A4_LANDSCAPE);
    assert_relative_eq!(p.width_mm, 297.0);
    assert_relative_eq!(p.height_mm, 100.0);
    assert_relative_eq!(p.x_mm, 0.0);
    assert_relative_eq!(p.y_mm, 55.0);
}

#[test]
fn test_fit_tall_image_bars_left_and_right() {
    let p = fit_to_page(1000.0, 2100.0, PageSize::A4_LANDSCAPE);
    assert_relative_eq!(p.height_mm, 210.0);
    assert_relative_eq!(p.width_mm, 100.0);
    assert_relative_eq!(p.x_mm, 98.5);
    assert_relative_eq!(p.y_mm, 0.0);
}

#[test]
fn test_fit_exact_aspect_fills_page() {
    let p = fit_to_page(2970.0, 2100.0, PageSize::A4_LANDSCAPE);
    assert_relative_eq!(p.width_mm, 297.0);
    assert_relative_eq!(p.height_mm, 210.0);
    assert_relative_eq!(p.x_mm, 0.0);
    assert_relative_eq!(p.y_mm, 0.0);
}

#[test]
fn test_fit_empty_image_fills_page() {
    let p = fit_to_page(0.0, 100.0, PageSize::A4_LANDSCAPE);
    assert_eq!((p.width_mm, p.height_mm), (297.0, 210.0));
}

#[test]
fn test_all_plans() {
    let plans = ExportPlan::all(&get_layout_config(&[]));
    let formats: Vec<ExportFormat> = plans.iter().map(|p| p.format).collect();
    assert_eq!(formats, ExportFormat::ALL.to_vec());
}
