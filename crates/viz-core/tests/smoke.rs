// File: crates/viz-core/tests/smoke.rs
// Purpose: End-to-end render smoke tests writing SVG and PNG files.

use viz_core::{RasterOptions, ScatterChart, Table, Theme};

const WORLD: &str = "time,location,fertility_rate,life_expectancy,pop_mlns
1990,AUS,1.9,77.0,17.1
2000,AUS,1.8,79.2,19.2
2010,AUS,1.9,81.7,22.0
";

fn scene() -> viz_core::Scene {
    let table = Table::from_reader(WORLD.as_bytes()).expect("parse csv");
    ScatterChart::new(&table, Theme::light()).expect("scatter").build("AUS").expect("scene")
}

#[test]
fn render_smoke_svg() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("nested/scatter.svg");
    scene().render_to_svg(&out).expect("render should succeed");

    let text = std::fs::read_to_string(&out).expect("output exists");
    assert!(text.starts_with("<svg"));
    assert!(text.trim_end().ends_with("</svg>"));
    assert_eq!(text.matches("class=\"dot\"").count(), 3);
    assert!(text.contains("<title>"));
}

#[test]
fn render_smoke_png() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("scatter.png");
    let opts = RasterOptions::default();

    scene().render_to_png(&opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    let bytes = scene().render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn raster_scale_and_pixels() {
    let opts = RasterOptions { scale: 2.0, draw_labels: false };
    let scene = scene();

    let (pixels, w, h, stride) = scene.render_to_rgba8(&opts).expect("rgba8");
    assert_eq!((w, h), (1000, 1000));
    assert_eq!(stride, 4000);
    assert_eq!(pixels.len(), stride * h as usize);

    // corner is background, opaque white in the light theme
    assert_eq!(&pixels[..4], &[255, 255, 255, 255]);

    let png = scene.render_to_png_bytes(&opts).expect("png bytes");
    let img = image::load_from_memory(&png).expect("decode png").to_rgba8();
    assert_eq!(img.dimensions(), (1000, 1000));
    let blue = viz_core::Theme::light().point;
    let has_dot = img.pixels().any(|p| p.0[0] == blue.r && p.0[1] == blue.g && p.0[2] == blue.b);
    assert!(has_dot, "expected point colour somewhere in the raster");
}
