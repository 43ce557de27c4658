// File: crates/speed-chart-core/src/chart.rs
// Summary: Bar-chart renderer: lays out bars, axes, titles and legend onto a Surface, plus SVG/PNG output.

use anyhow::Result;
use tracing::debug;

use crate::geometry::{ChartGeometry, ContainerSize};
use crate::grid::tick_format;
use crate::record::Dataset;
use crate::scale::Scales;
use crate::scene::{Anchor, Baseline, Layer, Shape, Stroke, Surface, TextStyle};
use crate::theme::Theme;
use crate::types::{Insets, TOP_N};
use crate::{raster, svg};

const BAR_RADIUS: f32 = 2.0;
const TICK_SIZE: f32 = 6.0;
const Y_TICKS: usize = 8;
const X_LABEL_SIZE: f32 = 10.0;
const Y_LABEL_SIZE: f32 = 11.0;
const AXIS_TITLE_SIZE: f32 = 14.0;
const LEGEND_LABEL_SIZE: f32 = 12.0;
const TITLE_SIZE: f32 = 18.0;
const LEGEND_SWATCH: f32 = 15.0;
const LEGEND_ROW_SPACING: f32 = 25.0;

#[derive(Clone, Debug, PartialEq)]
pub struct ChartOptions {
    pub insets: Insets,
    pub theme: Theme,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// How many records the cleaner keeps; never more than [`TOP_N`].
    pub top_n: usize,
}

impl ChartOptions {
    pub fn default_title(top_n: usize) -> String {
        format!("Top {} Fastest Animals by Speed", top_n.min(TOP_N))
    }
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            insets: Insets::default(),
            theme: Theme::default(),
            title: Self::default_title(TOP_N),
            x_label: "Animal".to_string(),
            y_label: "Speed (km/h)".to_string(),
            top_n: TOP_N,
        }
    }
}

/// Stateless renderer; every call fully replaces the surface content.
#[derive(Clone, Debug, Default)]
pub struct SpeedChart {
    pub options: ChartOptions,
}

impl SpeedChart {
    pub fn new(options: ChartOptions) -> Self {
        Self { options }
    }

    pub fn geometry(&self, container: ContainerSize) -> ChartGeometry {
        ChartGeometry::from_container(container, self.options.insets)
    }

    /// Recompute geometry and scales, then redraw. Returns the geometry used.
    pub fn render(&self, surface: &mut Surface, dataset: &Dataset, container: ContainerSize) -> ChartGeometry {
        let geometry = self.geometry(container);
        match Scales::build(dataset, &geometry) {
            Some(scales) => self.draw(surface, dataset, &geometry, &scales),
            None => surface.reset(geometry.width, geometry.height),
        }
        geometry
    }

    /// Clear `surface` and draw every layer. An empty dataset leaves it empty.
    pub fn draw(&self, surface: &mut Surface, dataset: &Dataset, geometry: &ChartGeometry, scales: &Scales) {
        surface.reset(geometry.width, geometry.height);
        if dataset.is_empty() {
            return;
        }
        self.draw_bars(surface, dataset, geometry, scales);
        self.draw_x_axis(surface, geometry, scales);
        self.draw_y_axis(surface, geometry, scales);
        self.draw_axis_titles(surface, geometry);
        self.draw_legend(surface, geometry, scales);
        self.draw_title(surface, geometry);
        debug!(bars = dataset.len(), elements = surface.len(), "chart drawn");
    }

    fn text_style(&self, size: f32, bold: bool, anchor: Anchor, baseline: Baseline) -> TextStyle {
        TextStyle { size, bold, color: self.options.theme.foreground, anchor, baseline }
    }

    fn axis_stroke(&self) -> Stroke {
        Stroke { color: self.options.theme.axis_line, width: 1.0 }
    }

    fn draw_bars(&self, surface: &mut Surface, dataset: &Dataset, g: &ChartGeometry, scales: &Scales) {
        let (left, top) = (g.left(), g.top());
        let chart_h = g.chart_height();
        let outline = Stroke { color: self.options.theme.outline, width: 1.0 };
        for d in dataset {
            let Some(x) = scales.x.position(d.name()) else { continue };
            let y = scales.y.apply(d.value());
            surface.push(
                Layer::Bars,
                Shape::Rect {
                    x: (left + x) as f32,
                    y: (top + y) as f32,
                    width: scales.x.bandwidth() as f32,
                    height: (chart_h - y).max(0.0) as f32,
                    fill: scales.color.color(d.category()),
                    stroke: Some(outline),
                    corner_radius: BAR_RADIUS,
                },
            );
        }
    }

    fn draw_x_axis(&self, surface: &mut Surface, g: &ChartGeometry, scales: &Scales) {
        let left = g.left() as f32;
        let base = (g.top() + g.chart_height()) as f32;
        let stroke = self.axis_stroke();
        let (r0, r1) = scales.x.range();
        surface.push(
            Layer::XAxis,
            Shape::Line { from: (left + r0 as f32, base), to: (left + r1 as f32, base), stroke },
        );
        for name in scales.x.domain() {
            let Some(cx) = scales.x.center(name) else { continue };
            let x = left + cx as f32;
            surface.push(Layer::XAxis, Shape::Line { from: (x, base), to: (x, base + TICK_SIZE), stroke });
            surface.push(
                Layer::XAxis,
                Shape::Text {
                    pivot: (x, base),
                    offset: (-10.0, 10.0),
                    rotate_deg: -45.0,
                    content: name.to_string(),
                    style: self.text_style(X_LABEL_SIZE, false, Anchor::End, Baseline::Hanging),
                },
            );
        }
    }

    fn draw_y_axis(&self, surface: &mut Surface, g: &ChartGeometry, scales: &Scales) {
        let left = g.left() as f32;
        let top = g.top() as f32;
        let stroke = self.axis_stroke();
        surface.push(
            Layer::YAxis,
            Shape::Line { from: (left, top), to: (left, top + g.chart_height() as f32), stroke },
        );
        let step = scales.y.tick_step(Y_TICKS);
        for v in scales.y.ticks(Y_TICKS) {
            let y = top + scales.y.apply(v) as f32;
            surface.push(Layer::YAxis, Shape::Line { from: (left - TICK_SIZE, y), to: (left, y), stroke });
            surface.push(
                Layer::YAxis,
                Shape::Text {
                    pivot: (left, y),
                    offset: (-(TICK_SIZE + 3.0), 0.0),
                    rotate_deg: 0.0,
                    content: tick_format(v, step),
                    style: self.text_style(Y_LABEL_SIZE, false, Anchor::End, Baseline::Central),
                },
            );
        }
    }

    fn draw_axis_titles(&self, surface: &mut Surface, g: &ChartGeometry) {
        let (w, h) = (g.width_f() as f32, g.height_f() as f32);
        surface.push(
            Layer::AxisTitles,
            Shape::Text {
                pivot: (w / 2.0, h),
                offset: (0.0, 0.0),
                rotate_deg: 0.0,
                content: self.options.x_label.clone(),
                style: self.text_style(AXIS_TITLE_SIZE, true, Anchor::Middle, Baseline::AfterEdge),
            },
        );
        surface.push(
            Layer::AxisTitles,
            Shape::Text {
                pivot: (0.0, 0.0),
                offset: (-h / 2.0, g.left() as f32 / 2.0 - 10.0),
                rotate_deg: -90.0,
                content: self.options.y_label.clone(),
                style: self.text_style(AXIS_TITLE_SIZE, true, Anchor::Middle, Baseline::Alphabetic),
            },
        );
    }

    fn draw_legend(&self, surface: &mut Surface, g: &ChartGeometry, scales: &Scales) {
        let x0 = (g.width_f() - g.right() + 20.0) as f32;
        let y0 = g.top() as f32;
        let outline = Stroke { color: self.options.theme.outline, width: 1.0 };
        for (i, (category, color)) in scales.color.entries().iter().enumerate() {
            let y = y0 + i as f32 * LEGEND_ROW_SPACING;
            surface.push(
                Layer::Legend,
                Shape::Rect {
                    x: x0,
                    y,
                    width: LEGEND_SWATCH,
                    height: LEGEND_SWATCH,
                    fill: *color,
                    stroke: Some(outline),
                    corner_radius: BAR_RADIUS,
                },
            );
            surface.push(
                Layer::Legend,
                Shape::Text {
                    pivot: (x0, y),
                    offset: (20.0, 12.0),
                    rotate_deg: 0.0,
                    content: category.label().to_string(),
                    style: self.text_style(LEGEND_LABEL_SIZE, false, Anchor::Start, Baseline::Central),
                },
            );
        }
    }

    fn draw_title(&self, surface: &mut Surface, g: &ChartGeometry) {
        surface.push(
            Layer::Title,
            Shape::Text {
                pivot: (g.width_f() as f32 / 2.0, g.top() as f32 / 2.0),
                offset: (0.0, 0.0),
                rotate_deg: 0.0,
                content: self.options.title.clone(),
                style: self.text_style(TITLE_SIZE, true, Anchor::Middle, Baseline::Alphabetic),
            },
        );
    }

    /// Render `dataset` into a fresh surface and serialize it as SVG.
    pub fn render_to_svg_string(&self, dataset: &Dataset, container: ContainerSize) -> String {
        let mut surface = Surface::default();
        self.render(&mut surface, dataset, container);
        svg::to_svg_string(&surface, &self.options.theme)
    }

    /// Render `dataset` and write an SVG document to `path`.
    pub fn render_to_svg(&self, dataset: &Dataset, container: ContainerSize, path: impl AsRef<std::path::Path>) -> Result<()> {
        let mut surface = Surface::default();
        self.render(&mut surface, dataset, container);
        svg::write_svg(&surface, &self.options.theme, path)
    }

    /// Render `dataset` and rasterize it to PNG bytes.
    pub fn render_to_png_bytes(&self, dataset: &Dataset, container: ContainerSize) -> Result<Vec<u8>> {
        let mut surface = Surface::default();
        self.render(&mut surface, dataset, container);
        raster::to_png_bytes(&surface, &self.options.theme)
    }

    /// Render `dataset` and write a PNG to `path`.
    pub fn render_to_png(&self, dataset: &Dataset, container: ContainerSize, path: impl AsRef<std::path::Path>) -> Result<()> {
        let mut surface = Surface::default();
        self.render(&mut surface, dataset, container);
        raster::write_png(&surface, &self.options.theme, path)
    }
}
