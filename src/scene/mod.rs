//! Scene model shared by geometry builders and renderers.

pub(crate) mod model;

pub use model::{
    AxisGeometry, MarkGeometry, MarkKind, Orientation, Primitive, Scene, Sector, Space, Stroke,
    Tick,
};
