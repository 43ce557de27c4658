// File: crates/speed-chart-core/src/types.rs
// Summary: Shared constants and the margin type used to lay out the chart.

/// Container width assumed when the container reports no size.
pub const DEFAULT_WIDTH: u32 = 800;
/// Container height assumed when the container reports no size.
pub const DEFAULT_HEIGHT: u32 = 500;

/// Smallest surface width ever drawn.
pub const MIN_WIDTH: u32 = 600;
/// Smallest surface height ever drawn.
pub const MIN_HEIGHT: u32 = 400;

/// Number of records kept after sorting.
pub const TOP_N: usize = 40;

/// Upper value used for the y domain when there is no data to measure.
pub const FALLBACK_MAX_VALUE: f64 = 120.0;

/// Headroom multiplier applied to the largest value before niceing.
pub const VALUE_HEADROOM: f64 = 1.1;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    /// Room for rotated names below, the legend on the right and the title above.
    fn default() -> Self {
        Self::new(100, 150, 70, 100)
    }
}
