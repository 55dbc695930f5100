use crate::scene::{Orientation, Scene};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Layout and formatting controls for SVG output.
pub struct RenderOptions {
    /// Space reserved left or right of the plot for a vertical axis.
    pub axis_margin_x: f64,
    /// Space reserved above or below the plot for a horizontal axis.
    pub axis_margin_y: f64,
    /// Space around everything.
    pub canvas_margin: f64,
    /// Target tick count for linear axes.
    pub tick_count: usize,
    /// Tick length in pixels.
    pub tick_size: f64,
    /// Decimal places kept for coordinates in markup.
    pub decimals: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            axis_margin_x: 40.0,
            axis_margin_y: 25.0,
            canvas_margin: 10.0,
            tick_count: 10,
            tick_size: 5.0,
            decimals: 3,
        }
    }
}

/// Offsets of the plot inside the SVG canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Margins {
    pub(crate) left: f64,
    pub(crate) right: f64,
    pub(crate) top: f64,
    pub(crate) bottom: f64,
}

impl RenderOptions {
    /// Axis margins only apply on sides that carry an axis.
    pub(crate) fn margins(&self, scene: &Scene) -> Margins {
        let has = |o: Orientation| scene.axes.iter().any(|a| a.orientation == o);
        let side = |o: Orientation, m: f64| self.canvas_margin + if has(o) { m } else { 0.0 };
        Margins {
            left: side(Orientation::Left, self.axis_margin_x),
            right: side(Orientation::Right, self.axis_margin_x),
            top: side(Orientation::Top, self.axis_margin_y),
            bottom: side(Orientation::Bottom, self.axis_margin_y),
        }
    }
}
