// File: crates/speed-chart-core/src/scene.rs
// Summary: Retained drawing surface: an arena of shapes tagged by layer, reset before each draw.

use crate::theme::Rgba;

/// Drawing layers, in paint order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Layer {
    Bars,
    XAxis,
    YAxis,
    AxisTitles,
    Legend,
    Title,
}

impl Layer {
    pub const ALL: [Layer; 6] =
        [Layer::Bars, Layer::XAxis, Layer::YAxis, Layer::AxisTitles, Layer::Legend, Layer::Title];

    /// Stable identifier (used as the SVG group class).
    pub const fn id(self) -> &'static str {
        match self {
            Layer::Bars => "bars",
            Layer::XAxis => "x-axis",
            Layer::YAxis => "y-axis",
            Layer::AxisTitles => "axis-titles",
            Layer::Legend => "legend",
            Layer::Title => "title",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Baseline {
    Alphabetic,
    /// Vertically centered on `y`.
    Central,
    /// Top of the glyphs at `y`.
    Hanging,
    /// Bottom of the glyphs (descenders included) at `y`.
    AfterEdge,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: Rgba,
    pub width: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    pub size: f32,
    pub bold: bool,
    pub color: Rgba,
    pub anchor: Anchor,
    pub baseline: Baseline,
}

/// A shape in absolute surface coordinates.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        fill: Rgba,
        stroke: Option<Stroke>,
        corner_radius: f32,
    },
    Line {
        from: (f32, f32),
        to: (f32, f32),
        stroke: Stroke,
    },
    /// Text is placed by translating to `pivot`, rotating by `rotate_deg`
    /// and then offsetting by `offset` in the rotated frame.
    Text {
        pivot: (f32, f32),
        offset: (f32, f32),
        rotate_deg: f32,
        content: String,
        style: TextStyle,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    pub layer: Layer,
    pub shape: Shape,
}

/// The renderer's exclusively owned drawing target.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Surface {
    width: u32,
    height: u32,
    elements: Vec<Element>,
}

impl Surface {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height, elements: Vec::new() }
    }

    /// Drop everything drawn so far and adopt a new size.
    pub fn reset(&mut self, width: u32, height: u32) {
        self.elements.clear();
        self.width = width;
        self.height = height;
    }

    pub fn clear(&mut self) {
        self.elements.clear();
    }

    pub fn push(&mut self, layer: Layer, shape: Shape) {
        self.elements.push(Element { layer, shape });
    }

    pub fn width(&self) -> u32 { self.width }
    pub fn height(&self) -> u32 { self.height }
    pub fn len(&self) -> usize { self.elements.len() }
    pub fn is_empty(&self) -> bool { self.elements.is_empty() }
    pub fn elements(&self) -> &[Element] { &self.elements }

    pub fn layer(&self, layer: Layer) -> impl Iterator<Item = &Shape> {
        self.elements.iter().filter(move |e| e.layer == layer).map(|e| &e.shape)
    }

    /// Number of elements drawn into `layer`.
    pub fn count(&self, layer: Layer) -> usize {
        self.layer(layer).count()
    }

    /// Texts drawn into `layer`, in draw order.
    pub fn texts(&self, layer: Layer) -> Vec<&str> {
        self.layer(layer)
            .filter_map(|s| match s {
                Shape::Text { content, .. } => Some(content.as_str()),
                _ => None,
            })
            .collect()
    }
}
