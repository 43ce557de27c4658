// File: crates/speed-chart-core/src/geometry.rs
// Summary: Chart geometry derived from the container size, with minimums and fixed margins.

use crate::types::{Insets, DEFAULT_HEIGHT, DEFAULT_WIDTH, MIN_HEIGHT, MIN_WIDTH};

/// Size reported by the container hosting the chart. `None` means the
/// container could not report a size yet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ContainerSize {
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl ContainerSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width: Some(width), height: Some(height) }
    }

    pub const fn unknown() -> Self {
        Self { width: None, height: None }
    }
}

/// Surface size, margins and the inner chart area for one render pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChartGeometry {
    pub width: u32,
    pub height: u32,
    pub insets: Insets,
}

impl ChartGeometry {
    /// Resolve the container size against the defaults and minimums.
    pub fn from_container(container: ContainerSize, insets: Insets) -> Self {
        let width = container.width.unwrap_or(DEFAULT_WIDTH).max(MIN_WIDTH);
        let height = container.height.unwrap_or(DEFAULT_HEIGHT).max(MIN_HEIGHT);
        Self { width, height, insets }
    }

    /// Width of the area inside the margins.
    pub fn chart_width(&self) -> f64 {
        f64::from(self.width.saturating_sub(self.insets.hsum()))
    }

    /// Height of the area inside the margins.
    pub fn chart_height(&self) -> f64 {
        f64::from(self.height.saturating_sub(self.insets.vsum()))
    }

    pub fn left(&self) -> f64 { f64::from(self.insets.left) }
    pub fn top(&self) -> f64 { f64::from(self.insets.top) }
    pub fn right(&self) -> f64 { f64::from(self.insets.right) }
    pub fn width_f(&self) -> f64 { f64::from(self.width) }
    pub fn height_f(&self) -> f64 { f64::from(self.height) }
}

impl Default for ChartGeometry {
    fn default() -> Self {
        Self::from_container(ContainerSize::unknown(), Insets::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_container_is_clamped_to_minimum() {
        let g = ChartGeometry::from_container(ContainerSize::new(0, 120), Insets::default());
        assert_eq!((g.width, g.height), (MIN_WIDTH, MIN_HEIGHT));
        assert_eq!(g.chart_width(), 350.0);
        assert_eq!(g.chart_height(), 230.0);
    }

    #[test]
    fn unknown_container_uses_defaults() {
        let g = ChartGeometry::default();
        assert_eq!((g.width, g.height), (DEFAULT_WIDTH, DEFAULT_HEIGHT));
    }
}
