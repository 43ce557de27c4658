// File: crates/speed-chart-core/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing SVG and PNG files.

use speed_chart_core::{clean, ContainerSize, RawRecord, SpeedChart};

#[test]
fn render_smoke_png() {
    let ds = clean(vec![
        RawRecord::new("Cheetah", "120", "carnivore"),
        RawRecord::new("Ostrich", "70", "omnivore"),
        RawRecord::new("Sloth", "0.27", "herbivore"),
    ]);
    let chart = SpeedChart::default();
    let container = ContainerSize::new(640, 420);

    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    chart.render_to_png(&ds, container, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = chart.render_to_png_bytes(&ds, container).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
    let img = image::load_from_memory(&bytes).expect("decode png").to_rgba8();
    assert_eq!(img.dimensions(), (640, 420));
    // Opaque background in the top-left corner.
    assert_eq!(img.get_pixel(0, 0)[3], 255);
}

#[test]
fn render_smoke_svg() {
    let ds = clean(vec![RawRecord::new("Hare", "70", "herbivore")]);
    let out = std::path::PathBuf::from("target/test_out/smoke.svg");
    SpeedChart::default()
        .render_to_svg(&ds, ContainerSize::unknown(), &out)
        .expect("write svg");
    let text = std::fs::read_to_string(&out).expect("read back");
    assert!(text.trim_end().ends_with("</svg>"));
}

#[test]
fn oversized_surface_is_an_error_not_a_wrap() {
    let surface = speed_chart_core::Surface::new(u32::MAX, 400);
    let err = speed_chart_core::raster::to_png_bytes(&surface, &speed_chart_core::Theme::default())
        .expect_err("width beyond i32 must fail");
    assert!(err.to_string().contains("width"));
}
