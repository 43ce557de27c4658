// File: crates/speed-chart-core/src/svg.rs
// Summary: Serialize a Surface into a standalone SVG document, one <g> per layer.

use std::fmt::Write as _;

use anyhow::Result;

use crate::scene::{Anchor, Baseline, Layer, Shape, Stroke, Surface};
use crate::theme::Theme;

/// Serialize `surface` as SVG. Layers keep paint order; empty layers are omitted.
pub fn to_svg_string(surface: &Surface, theme: &Theme) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="sans-serif" style="background:{bg}">"#,
        w = surface.width(),
        h = surface.height(),
        bg = theme.background,
    );
    for layer in Layer::ALL {
        let mut shapes = surface.layer(layer).peekable();
        if shapes.peek().is_none() {
            continue;
        }
        let _ = writeln!(out, r#"  <g class="{}">"#, layer.id());
        for shape in shapes {
            out.push_str("    ");
            write_shape(&mut out, layer, shape);
            out.push('\n');
        }
        out.push_str("  </g>\n");
    }
    out.push_str("</svg>\n");
    out
}

/// Write the SVG document to `path`, creating parent directories.
pub fn write_svg(surface: &Surface, theme: &Theme, path: impl AsRef<std::path::Path>) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, to_svg_string(surface, theme))?;
    Ok(())
}

fn stroke_attrs(stroke: &Stroke) -> String {
    let mut s = format!(r#" stroke="{}" stroke-width="{}""#, stroke.color, num(stroke.width));
    if stroke.color.a < 255 {
        let _ = write!(s, r#" stroke-opacity="{}""#, num(stroke.color.opacity()));
    }
    s
}

fn write_shape(out: &mut String, layer: Layer, shape: &Shape) {
    match shape {
        Shape::Rect { x, y, width, height, fill, stroke, corner_radius } => {
            let class = if layer == Layer::Bars { r#" class="bar""# } else { "" };
            let _ = write!(
                out,
                r#"<rect{class} x="{}" y="{}" width="{}" height="{}" rx="{}" fill="{}""#,
                num(*x),
                num(*y),
                num(*width),
                num(*height),
                num(*corner_radius),
                fill,
            );
            if let Some(stroke) = stroke {
                out.push_str(&stroke_attrs(stroke));
            }
            out.push_str("/>");
        }
        Shape::Line { from, to, stroke } => {
            let _ = write!(
                out,
                r#"<line x1="{}" y1="{}" x2="{}" y2="{}"{}/>"#,
                num(from.0),
                num(from.1),
                num(to.0),
                num(to.1),
                stroke_attrs(stroke),
            );
        }
        Shape::Text { pivot, offset, rotate_deg, content, style } => {
            let mut transform = String::new();
            if *pivot != (0.0, 0.0) {
                let _ = write!(transform, "translate({},{})", num(pivot.0), num(pivot.1));
            }
            if *rotate_deg != 0.0 {
                if !transform.is_empty() {
                    transform.push(' ');
                }
                let _ = write!(transform, "rotate({})", num(*rotate_deg));
            }
            out.push_str("<text");
            if !transform.is_empty() {
                let _ = write!(out, r#" transform="{transform}""#);
            }
            let _ = write!(
                out,
                r#" x="{}" y="{}" font-size="{}" fill="{}" text-anchor="{}" dominant-baseline="{}""#,
                num(offset.0),
                num(offset.1),
                num(style.size),
                style.color,
                anchor_attr(style.anchor),
                baseline_attr(style.baseline),
            );
            if style.bold {
                out.push_str(r#" font-weight="bold""#);
            }
            let _ = write!(out, ">{}</text>", escape(content));
        }
    }
}

fn anchor_attr(anchor: Anchor) -> &'static str {
    match anchor {
        Anchor::Start => "start",
        Anchor::Middle => "middle",
        Anchor::End => "end",
    }
}

fn baseline_attr(baseline: Baseline) -> &'static str {
    match baseline {
        Baseline::Alphabetic => "alphabetic",
        Baseline::Central => "central",
        Baseline::Hanging => "hanging",
        Baseline::AfterEdge => "text-after-edge",
    }
}

/// Compact number formatting: at most two decimals, no trailing zeros.
fn num(v: f32) -> String {
    let s = format!("{:.2}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}
