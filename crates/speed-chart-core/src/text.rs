// File: crates/speed-chart-core/src/text.rs
// Summary: Text shaper/renderer using Skia textlayout, with anchor and baseline placement.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

use crate::scene::{Anchor, Baseline};

pub struct TextShaper {
    fonts: FontCollection,
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color, bold: bool) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        if bold {
            ts.set_font_style(skia::FontStyle::bold());
        }
        ts.set_font_families(&["Segoe UI", "Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"]);
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color, bold: bool) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&Self::make_style(size, color, bold));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// Draw `text` so that (x, y) sits at the requested anchor and baseline.
    #[allow(clippy::too_many_arguments)]
    pub fn draw(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        (x, y): (f32, f32),
        size: f32,
        color: skia::Color,
        bold: bool,
        anchor: Anchor,
        baseline: Baseline,
    ) {
        let mut p = self.layout(text, size, color, bold);
        let w = p.longest_line();
        let left = match anchor {
            Anchor::Start => x,
            Anchor::Middle => x - w * 0.5,
            Anchor::End => x - w,
        };
        // Paragraph paints from its top-left corner.
        let top = match baseline {
            Baseline::Alphabetic => y - p.alphabetic_baseline(),
            Baseline::Central => y - p.height() * 0.5,
            Baseline::Hanging => y,
            Baseline::AfterEdge => y - p.height(),
        };
        p.paint(canvas, (left, top));
    }
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}
