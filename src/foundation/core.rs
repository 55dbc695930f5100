use crate::foundation::error::{ChartError, ChartResult};

pub use kurbo::{BezPath, Point, Rect};

/// Width and height of the plot area in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dimensions {
    /// Plot width.
    pub width: f64,
    /// Plot height.
    pub height: f64,
}

impl Dimensions {
    /// Build dimensions, rejecting non-positive or non-finite sizes.
    pub fn new(width: f64, height: f64) -> ChartResult<Self> {
        if !(width.is_finite() && width > 0.0 && height.is_finite() && height > 0.0) {
            return Err(ChartError::validation(format!(
                "dimensions must be positive and finite, got {width}x{height}"
            )));
        }
        Ok(Self { width, height })
    }

    /// Center of the plot area in screen space.
    pub fn center(self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// Half of the shorter side; the default pie radius.
    pub fn half_min_side(self) -> f64 {
        self.width.min(self.height) / 2.0
    }

    /// Convert a chart-space y (origin bottom-left) to screen space (origin top-left).
    pub fn flip_y(self, y: f64) -> f64 {
        self.height - y
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            width: 500.0,
            height: 200.0,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
