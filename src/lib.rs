//! chartflow turns declarative JSON chart documents into SVG.
//!
//! A document names its data sources, scales, axes and marks. Building a [`View`] resolves all of
//! them into a [`Scene`]; rendering writes SVG markup into a container; later
//! [`View::set_data`] calls swap a source's records and redraw only what depends on it.
//!
//! - Parse and validate a [`ChartSpec`]
//! - Build a [`View`]
//! - Render into a [`RenderTarget`] and push new data with [`View::set_data`]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub(crate) mod axis;
pub(crate) mod data;
pub(crate) mod expression;
pub(crate) mod foundation;
pub(crate) mod geometry;
pub(crate) mod render;
pub(crate) mod scale;
/// Scene model produced by building a chart.
pub mod scene;
pub(crate) mod spec;
pub(crate) mod view;

pub use crate::data::value::{Record, Value, records_from_json};
pub use crate::expression::Expression;
pub use crate::foundation::core::{BezPath, Dimensions, Point, Rect};
pub use crate::foundation::error::{ChartError, ChartResult};
pub use crate::render::{Document, MountTarget, RenderOptions, RenderOutcome, RenderTarget};
pub use crate::scale::{BandScale, LinearScale, LogScale, Scale, ScaleKind};
pub use crate::scene::{
    AxisGeometry, MarkGeometry, MarkKind, Orientation, Primitive, Scene, Sector, Space, Stroke,
    Tick,
};
pub use crate::spec::ChartSpec;
pub use crate::view::View;
