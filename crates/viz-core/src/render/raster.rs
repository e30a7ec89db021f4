// File: crates/viz-core/src/render/raster.rs
// Summary: Headless raster rendering of a scene using Skia CPU surfaces (PNG file, PNG bytes, RGBA8).

use std::path::Path;

use anyhow::{Context, Result};
use skia_safe as skia;
use tracing::info;

use crate::scene::{Anchor, Scene, Shape, Stroke, TextStyle};
use crate::theme::Rgba;

#[derive(Clone, Copy, Debug)]
pub struct RasterOptions {
    /// Device pixels per scene unit.
    pub scale: f32,
    /// Text output depends on installed fonts; tests switch it off.
    pub draw_labels: bool,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self { scale: 1.0, draw_labels: true }
    }
}

impl RasterOptions {
    fn size(&self, scene: &Scene) -> (i32, i32) {
        let s = self.scale.max(0.1);
        (
            ((scene.width as f32) * s).round().max(1.0) as i32,
            ((scene.height as f32) * s).round().max(1.0) as i32,
        )
    }
}

impl Scene {
    /// Render the scene to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(&self, opts: &RasterOptions, output_png_path: impl AsRef<Path>) -> Result<()> {
        let path = output_png_path.as_ref();
        let bytes = self.render_to_png_bytes(opts)?;
        super::ensure_parent(path).with_context(|| format!("creating directory for {}", path.display()))?;
        std::fs::write(path, &bytes).with_context(|| format!("writing {}", path.display()))?;
        info!(path = %path.display(), bytes = bytes.len(), "wrote png");
        Ok(())
    }

    pub fn render_to_png_bytes(&self, opts: &RasterOptions) -> Result<Vec<u8>> {
        let mut surface = skia::surfaces::raster_n32_premul(opts.size(self))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        self.paint(surface.canvas(), opts);

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Straight-alpha RGBA8 pixels as (buffer, width, height, row stride in bytes).
    pub fn render_to_rgba8(&self, opts: &RasterOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        let (w, h) = opts.size(self);
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let mut surface = skia::surfaces::raster(&info, None, None)
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        self.paint(surface.canvas(), opts);

        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            anyhow::bail!("reading back {}x{} pixels failed", w, h);
        }
        Ok((pixels, w as u32, h as u32, stride))
    }

    fn paint(&self, canvas: &skia::Canvas, opts: &RasterOptions) {
        canvas.clear(color(self.background));
        canvas.save();
        canvas.scale((opts.scale, opts.scale));
        for element in &self.elements {
            match &element.shape {
                Shape::Rect { x, y, width, height, fill, stroke } => {
                    let rect = skia::Rect::from_xywh(*x, *y, *width, height.max(0.0));
                    if let Some(fill) = fill {
                        canvas.draw_rect(rect, &fill_paint(*fill));
                    }
                    if let Some(stroke) = stroke {
                        canvas.draw_rect(rect, &stroke_paint(stroke));
                    }
                }
                Shape::Circle { cx, cy, r, fill } => {
                    canvas.draw_circle((*cx, *cy), *r, &fill_paint(*fill));
                }
                Shape::Line { x1, y1, x2, y2, stroke } => {
                    canvas.draw_line((*x1, *y1), (*x2, *y2), &stroke_paint(stroke));
                }
                Shape::Path { points, stroke } => {
                    let Some(&(x0, y0)) = points.first() else { continue };
                    let mut path = skia::Path::new();
                    path.move_to((x0, y0));
                    for &(x, y) in points.iter().skip(1) {
                        path.line_to((x, y));
                    }
                    canvas.draw_path(&path, &stroke_paint(stroke));
                }
                Shape::Text { x, y, content, style, anchor, rotate, fill } => {
                    if opts.draw_labels {
                        draw_text(canvas, content, *x, *y, style, *anchor, *rotate, *fill);
                    }
                }
            }
        }
        canvas.restore();
    }
}

// ---- helpers ----------------------------------------------------------------

fn color(c: Rgba) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn fill_paint(c: Rgba) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(color(c));
    paint
}

fn stroke_paint(stroke: &Stroke) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(stroke.width);
    paint.set_color(color(stroke.color));
    if let Some((on, off)) = stroke.dash {
        paint.set_path_effect(skia::PathEffect::dash(&[on, off], 0.0));
    }
    paint
}

fn make_font(style: &TextStyle) -> skia::Font {
    let size = style.size.px();
    let font_style = if style.bold { skia::FontStyle::bold() } else { skia::FontStyle::normal() };
    let family = style.family.as_deref();
    match skia::FontMgr::default().legacy_make_typeface(family, font_style) {
        Some(typeface) => skia::Font::new(typeface, size),
        None => {
            let mut font = skia::Font::default();
            font.set_size(size);
            font
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn draw_text(
    canvas: &skia::Canvas,
    text: &str,
    x: f32,
    y: f32,
    style: &TextStyle,
    anchor: Anchor,
    rotate: f32,
    fill: Rgba,
) {
    let font = make_font(style);
    let paint = fill_paint(fill);
    let (width, _) = font.measure_str(text, Some(&paint));
    let dx = match anchor {
        Anchor::Start => 0.0,
        Anchor::Middle => -width * 0.5,
        Anchor::End => -width,
    };
    canvas.save();
    canvas.translate((x, y));
    if rotate != 0.0 {
        canvas.rotate(rotate, None);
    }
    canvas.draw_str(text, (dx, 0.0), &font, &paint);
    canvas.restore();
}
