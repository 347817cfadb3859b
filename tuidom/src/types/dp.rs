//! Density-independent measurements.
//!
//! Values are stored exactly as given, negative or fractional included. Only
//! the layout boundary converts them to terminal cells, where a row is
//! roughly twice as tall as a column is wide.

/// Density-independent units per terminal row.
pub const DP_PER_ROW: f32 = 8.0;

/// Density-independent units per terminal column.
pub const DP_PER_COLUMN: f32 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Dp(pub f32);

impl Dp {
    pub const ZERO: Dp = Dp(0.0);

    pub const fn new(value: f32) -> Self {
        Self(value)
    }

    pub const fn value(self) -> f32 {
        self.0
    }

    /// Whole rows covered by this measurement. Negative and NaN values collapse to zero.
    pub fn rows(self) -> u16 {
        to_cells(self.0, DP_PER_ROW)
    }

    /// Whole columns covered by this measurement. Negative and NaN values collapse to zero.
    pub fn cols(self) -> u16 {
        to_cells(self.0, DP_PER_COLUMN)
    }
}

fn to_cells(value: f32, per_cell: f32) -> u16 {
    if value.is_nan() || value <= 0.0 {
        return 0;
    }
    (value / per_cell).floor().min(u16::MAX as f32) as u16
}

impl From<f32> for Dp {
    fn from(value: f32) -> Self {
        Self(value)
    }
}

impl From<i32> for Dp {
    fn from(value: i32) -> Self {
        Self(value as f32)
    }
}

/// `16.dp()` shorthand.
pub trait IntoDp {
    fn dp(self) -> Dp;
}

impl IntoDp for i32 {
    fn dp(self) -> Dp {
        Dp(self as f32)
    }
}

impl IntoDp for f32 {
    fn dp(self) -> Dp {
        Dp(self)
    }
}
