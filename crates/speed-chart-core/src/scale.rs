// File: crates/speed-chart-core/src/scale.rs
// Summary: Band (x), linear value (y) and category color scales derived from a dataset.

use indexmap::IndexSet;

use crate::geometry::ChartGeometry;
use crate::grid::{tick_increment, tick_step, ticks};
use crate::record::{Category, Dataset};
use crate::theme::Rgba;
use crate::types::{FALLBACK_MAX_VALUE, VALUE_HEADROOM};

/// Categorical position scale: partitions `[r0, r1)` into equal padded bands,
/// one per distinct domain value, in first-seen order.
#[derive(Clone, Debug)]
pub struct BandScale {
    domain: IndexSet<String>,
    range: (f64, f64),
    padding_inner: f64,
    padding_outer: f64,
    step: f64,
    bandwidth: f64,
    start: f64,
}

impl BandScale {
    pub fn new<I, S>(domain: I, range: (f64, f64), padding_inner: f64, padding_outer: f64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut s = Self {
            domain: domain.into_iter().map(Into::into).collect(),
            range,
            padding_inner: padding_inner.clamp(0.0, 1.0),
            padding_outer: padding_outer.max(0.0),
            step: 0.0,
            bandwidth: 0.0,
            start: range.0,
        };
        s.rescale();
        s
    }

    fn rescale(&mut self) {
        let n = self.domain.len() as f64;
        let (r0, r1) = self.range;
        let span = r1 - r0;
        self.step = span / (n - self.padding_inner + self.padding_outer * 2.0).max(1.0);
        // Center the bands (align 0.5).
        self.start = r0 + (span - self.step * (n - self.padding_inner)) * 0.5;
        self.bandwidth = self.step * (1.0 - self.padding_inner);
    }

    /// Left edge of the band for `key`, or `None` if it is not in the domain.
    pub fn position(&self, key: &str) -> Option<f64> {
        self.domain
            .get_index_of(key)
            .map(|i| self.start + self.step * i as f64)
    }

    /// Horizontal center of the band for `key`.
    pub fn center(&self, key: &str) -> Option<f64> {
        self.position(key).map(|x| x + self.bandwidth * 0.5)
    }

    pub fn bandwidth(&self) -> f64 { self.bandwidth }
    pub fn step(&self) -> f64 { self.step }
    pub fn range(&self) -> (f64, f64) { self.range }

    pub fn domain(&self) -> impl Iterator<Item = &str> {
        self.domain.iter().map(String::as_str)
    }
}

/// Continuous linear scale `domain -> range`. The range may be inverted
/// (y axes map larger values to smaller pixel offsets).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Extend the domain outward to round tick boundaries.
    pub fn nice(mut self, count: usize) -> Self {
        let (d0, d1) = self.domain;
        let reversed = d1 < d0;
        let (mut start, mut stop) = if reversed { (d1, d0) } else { (d0, d1) };
        let mut prestep = None;

        for _ in 0..10 {
            let step = tick_increment(start, stop, count);
            if prestep == Some(step) {
                break;
            }
            if step > 0.0 {
                start = (start / step).floor() * step;
                stop = (stop / step).ceil() * step;
            } else if step < 0.0 {
                start = (start * step).ceil() / step;
                stop = (stop * step).floor() / step;
            } else {
                break;
            }
            prestep = Some(step);
        }
        if !start.is_finite() || !stop.is_finite() {
            return self;
        }
        self.domain = if reversed { (stop, start) } else { (start, stop) };
        self
    }

    pub fn apply(&self, v: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        if span.abs() < 1e-12 {
            return (r0 + r1) * 0.5;
        }
        r0 + (v - d0) / span * (r1 - r0)
    }

    pub fn domain(&self) -> (f64, f64) { self.domain }
    pub fn range(&self) -> (f64, f64) { self.range }

    pub fn ticks(&self, count: usize) -> Vec<f64> {
        ticks(self.domain.0, self.domain.1, count)
    }

    /// Distance between the values returned by [`LinearScale::ticks`].
    pub fn tick_step(&self, count: usize) -> f64 {
        tick_step(self.domain.0, self.domain.1, count)
    }
}

/// Fixed category -> color table. The domain is always all three
/// categories, whatever the dataset contains.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorScale {
    table: [(Category, Rgba); 3],
}

impl ColorScale {
    pub const HERBIVORE: Rgba = Rgba::rgb(0x22, 0xc5, 0x5e); // green
    pub const OMNIVORE: Rgba = Rgba::rgb(0xea, 0xb3, 0x08); // yellow
    pub const CARNIVORE: Rgba = Rgba::rgb(0xef, 0x44, 0x44); // red

    pub const fn new() -> Self {
        Self {
            table: [
                (Category::Herbivore, Self::HERBIVORE),
                (Category::Omnivore, Self::OMNIVORE),
                (Category::Carnivore, Self::CARNIVORE),
            ],
        }
    }

    pub fn color(&self, category: Category) -> Rgba {
        match category {
            Category::Herbivore => self.table[0].1,
            Category::Omnivore => self.table[1].1,
            Category::Carnivore => self.table[2].1,
        }
    }

    /// Domain entries with their colors, in legend order.
    pub fn entries(&self) -> &[(Category, Rgba)] {
        &self.table
    }
}

impl Default for ColorScale {
    fn default() -> Self {
        Self::new()
    }
}

/// The three scales for one render pass.
#[derive(Clone, Debug)]
pub struct Scales {
    pub x: BandScale,
    pub y: LinearScale,
    pub color: ColorScale,
}

impl Scales {
    pub const PADDING_INNER: f64 = 0.2;
    pub const PADDING_OUTER: f64 = 0.1;
    pub const NICE_COUNT: usize = 10;

    /// Build the scales in chart-area coordinates. `None` for an empty dataset.
    pub fn build(dataset: &Dataset, geometry: &ChartGeometry) -> Option<Self> {
        if dataset.is_empty() {
            return None;
        }
        let chart_w = geometry.chart_width();
        let chart_h = geometry.chart_height();

        let x = BandScale::new(dataset.names(), (0.0, chart_w), Self::PADDING_INNER, Self::PADDING_OUTER);
        let y = LinearScale::new((0.0, value_upper_bound(dataset)), (chart_h, 0.0)).nice(Self::NICE_COUNT);
        Some(Self { x, y, color: ColorScale::new() })
    }
}

/// Top of the value domain before niceing: the largest value plus headroom.
pub fn value_upper_bound(dataset: &Dataset) -> f64 {
    dataset.max_value().unwrap_or(FALLBACK_MAX_VALUE) * VALUE_HEADROOM
}
