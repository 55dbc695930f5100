use crate::foundation::core::{BezPath, Dimensions, Point, Rect};
use kurbo::{Circle, Shape};

/// Mark families.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MarkKind {
    /// Polyline through records.
    Line,
    /// One rectangle per record.
    Bar,
    /// One circle per record.
    Point,
    /// One annular sector per record.
    Pie,
}

impl MarkKind {
    /// Lowercase name as used in specs.
    pub fn as_str(self) -> &'static str {
        match self {
            MarkKind::Line => "line",
            MarkKind::Bar => "bar",
            MarkKind::Point => "point",
            MarkKind::Pie => "pie",
        }
    }
}

/// Side of the plot an axis is drawn on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Along x at the top edge.
    Top,
    /// Along x at the bottom edge.
    Bottom,
    /// Along y at the left edge.
    Left,
    /// Along y at the right edge.
    Right,
}

impl Orientation {
    /// Lowercase name as used in specs.
    pub fn as_str(self) -> &'static str {
        match self {
            Orientation::Top => "top",
            Orientation::Bottom => "bottom",
            Orientation::Left => "left",
            Orientation::Right => "right",
        }
    }

    /// Whether the axis runs along x.
    pub fn is_horizontal(self) -> bool {
        matches!(self, Orientation::Top | Orientation::Bottom)
    }
}

/// Coordinate space of a mark's geometry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Space {
    /// Origin bottom-left, y up.
    Chart,
    /// Origin top-left, y down.
    Screen,
}

/// Stroke paint.
#[derive(Clone, Debug, PartialEq)]
pub struct Stroke {
    /// CSS color.
    pub color: String,
    /// Line width in pixels.
    pub width: f64,
}

/// Annular sector of a pie, angles in radians, clockwise on screen from the +x axis.
#[derive(Clone, Debug, PartialEq)]
pub struct Sector {
    /// Pie center.
    pub center: Point,
    /// Inner radius; zero for a full wedge.
    pub inner_radius: f64,
    /// Outer radius.
    pub outer_radius: f64,
    /// Start angle.
    pub start_angle: f64,
    /// Angular span; never negative.
    pub sweep_angle: f64,
    /// CSS fill color.
    pub fill: String,
}

impl Sector {
    /// Outline as a path, flattened to kurbo's arc approximation at `tolerance`.
    pub fn to_path(&self, tolerance: f64) -> BezPath {
        Circle::new(self.center, self.outer_radius)
            .segment(self.inner_radius, self.start_angle, self.sweep_angle)
            .to_path(tolerance)
    }
}

/// One drawable element.
#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    /// Open polyline; may hold several subpaths when records are missing.
    Path {
        /// Geometry.
        path: BezPath,
        /// Stroke paint.
        stroke: Stroke,
    },
    /// Axis-aligned rectangle.
    Rect {
        /// Geometry.
        rect: Rect,
        /// CSS fill color.
        fill: String,
    },
    /// Filled circle.
    Circle {
        /// Center.
        center: Point,
        /// Radius.
        radius: f64,
        /// CSS fill color.
        fill: String,
    },
    /// Pie slice.
    Sector(Sector),
}

/// Geometry produced by one mark.
#[derive(Clone, Debug, PartialEq)]
pub struct MarkGeometry {
    /// Mark family.
    pub kind: MarkKind,
    /// Space the primitives are expressed in.
    pub space: Space,
    /// Primitives in record order.
    pub primitives: Vec<Primitive>,
}

/// One axis tick.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    /// Chart-space coordinate along the axis.
    pub position: f64,
    /// Label text.
    pub label: String,
}

/// Axis baseline and ticks in chart space.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisGeometry {
    /// Side of the plot.
    pub orientation: Orientation,
    /// Scale the axis is drawn for.
    pub scale: String,
    /// Chart-space coordinate of the baseline across the axis: y for top/bottom, x for left/right.
    pub offset: f64,
    /// Baseline extent along the axis: the scale range.
    pub extent: [f64; 2],
    /// Ticks in domain order.
    pub ticks: Vec<Tick>,
}

/// Everything needed to draw a chart.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    /// Plot size.
    pub dimensions: Dimensions,
    /// Mark geometry in spec order.
    pub marks: Vec<MarkGeometry>,
    /// Axes in spec order.
    pub axes: Vec<AxisGeometry>,
}

impl Scene {
    /// Total primitives across all marks.
    pub fn primitive_count(&self) -> usize {
        self.marks.iter().map(|m| m.primitives.len()).sum()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
