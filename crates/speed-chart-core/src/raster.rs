// File: crates/speed-chart-core/src/raster.rs
// Summary: Rasterize a Surface to PNG using a Skia CPU raster surface.

use anyhow::{Context, Result};
use skia_safe as skia;

use crate::scene::{Layer, Shape, Stroke, Surface};
use crate::text::TextShaper;
use crate::theme::{Rgba, Theme};

fn color(c: Rgba) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn stroke_paint(stroke: &Stroke) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(stroke.width);
    paint.set_color(color(stroke.color));
    paint
}

/// Paint every layer, in order, onto `canvas`.
pub fn paint(canvas: &skia::Canvas, surface: &Surface, theme: &Theme) {
    canvas.clear(color(theme.background));
    let shaper = TextShaper::new();

    for layer in Layer::ALL {
        for shape in surface.layer(layer) {
            match shape {
                Shape::Rect { x, y, width, height, fill, stroke, corner_radius } => {
                    let rect = skia::Rect::from_xywh(*x, *y, *width, *height);
                    let rrect = skia::RRect::new_rect_xy(rect, *corner_radius, *corner_radius);
                    let mut body = skia::Paint::default();
                    body.set_anti_alias(true);
                    body.set_style(skia::paint::Style::Fill);
                    body.set_color(color(*fill));
                    canvas.draw_rrect(&rrect, &body);
                    if let Some(stroke) = stroke {
                        canvas.draw_rrect(&rrect, &stroke_paint(stroke));
                    }
                }
                Shape::Line { from, to, stroke } => {
                    canvas.draw_line(*from, *to, &stroke_paint(stroke));
                }
                Shape::Text { pivot, offset, rotate_deg, content, style } => {
                    canvas.save();
                    canvas.translate(*pivot);
                    if *rotate_deg != 0.0 {
                        canvas.rotate(*rotate_deg, None);
                    }
                    shaper.draw(
                        canvas,
                        content,
                        *offset,
                        style.size,
                        color(style.color),
                        style.bold,
                        style.anchor,
                        style.baseline,
                    );
                    canvas.restore();
                }
            }
        }
    }
}

/// Rasterize `surface` at its own size and encode it as PNG.
pub fn to_png_bytes(surface: &Surface, theme: &Theme) -> Result<Vec<u8>> {
    let w = i32::try_from(surface.width().max(1)).context("surface width exceeds raster limits")?;
    let h = i32::try_from(surface.height().max(1)).context("surface height exceeds raster limits")?;
    let mut raster = skia::surfaces::raster_n32_premul((w, h))
        .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
    paint(raster.canvas(), surface, theme);

    let image = raster.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
    Ok(data.as_bytes().to_vec())
}

/// Rasterize and write a PNG to `path`, creating parent directories.
pub fn write_png(surface: &Surface, theme: &Theme, path: impl AsRef<std::path::Path>) -> Result<()> {
    let bytes = to_png_bytes(surface, theme)?;
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, bytes)?;
    Ok(())
}
