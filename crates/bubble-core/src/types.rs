// File: crates/bubble-core/src/types.rs
// Summary: Shared layout constants (surface size, margins, legend and mark bounds).

/// Default surface width in pixels (margins included).
pub const WIDTH: i32 = 650;
/// Default surface height in pixels (margins included).
pub const HEIGHT: i32 = 500;

/// Smallest bubble radius, hit at the minimum population.
pub const MIN_RADIUS: f32 = 5.0;
/// Largest bubble radius, hit at the maximum population.
pub const MAX_RADIUS: f32 = 20.0;
/// Fixed fill opacity of every mark.
pub const MARK_OPACITY: f32 = 0.5;

/// Legend origin: distance from the right edge of the chart area.
pub const LEGEND_RIGHT_OFFSET: f32 = 150.0;
/// Legend origin: baseline of the first row inside the chart area.
pub const LEGEND_TOP: f32 = 300.0;
/// Vertical distance between legend rows.
pub const LEGEND_ROW_HEIGHT: f32 = 16.0;

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
    /// Same margin on every side.
    pub const fn uniform(px: u32) -> Self {
        Self::new(px, px, px, px)
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    fn default() -> Self {
        Self::uniform(40)
    }
}
