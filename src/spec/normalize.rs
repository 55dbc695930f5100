use crate::data::value::Value;
use crate::foundation::core::Dimensions;
use crate::foundation::error::ChartResult;
use crate::scale::ScaleSpec;
use crate::scene::{MarkKind, Orientation};
use crate::spec::model::{ChannelDef, DataDef, MarkKindDef, OrientationDef, SpecDef};
use std::collections::BTreeMap;

/// A mark property after normalization.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Channel {
    Field { field: String, scale: Option<String> },
    Literal(Value),
}

impl Channel {
    pub(crate) fn scale(&self) -> Option<&str> {
        match self {
            Channel::Field { scale, .. } => scale.as_deref(),
            Channel::Literal(_) => None,
        }
    }

    fn literal(v: impl Into<Value>) -> Self {
        Channel::Literal(v.into())
    }
}

impl From<&ChannelDef> for Channel {
    fn from(def: &ChannelDef) -> Self {
        match def {
            ChannelDef::Field { field, scale } => Channel::Field {
                field: field.clone(),
                scale: scale.clone(),
            },
            ChannelDef::Literal(v) => Channel::Literal(v.clone()),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct LineProps {
    pub(crate) x: Channel,
    pub(crate) y: Channel,
    pub(crate) stroke: Channel,
    pub(crate) stroke_width: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct BarProps {
    pub(crate) x: Option<Channel>,
    pub(crate) y: Option<Channel>,
    pub(crate) width: Option<Channel>,
    pub(crate) height: Option<Channel>,
    pub(crate) fill: Channel,
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct PointProps {
    pub(crate) x: Channel,
    pub(crate) y: Channel,
    pub(crate) color: Option<Channel>,
    pub(crate) size: Channel,
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct PieProps {
    pub(crate) value: Channel,
    pub(crate) pad_angle: f64,
    pub(crate) inner_radius: f64,
    pub(crate) outer_radius: Option<Channel>,
    pub(crate) fill: Option<Channel>,
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum MarkProps {
    Line(LineProps),
    Bar(BarProps),
    Point(PointProps),
    Pie(PieProps),
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct MarkSpec {
    pub(crate) from: String,
    pub(crate) props: MarkProps,
}

impl MarkSpec {
    pub(crate) fn kind(&self) -> MarkKind {
        match self.props {
            MarkProps::Line(_) => MarkKind::Line,
            MarkProps::Bar(_) => MarkKind::Bar,
            MarkProps::Point(_) => MarkKind::Point,
            MarkProps::Pie(_) => MarkKind::Pie,
        }
    }

    /// Scales referenced by any channel of this mark.
    pub(crate) fn scales(&self) -> Vec<&str> {
        let channels: Vec<Option<&Channel>> = match &self.props {
            MarkProps::Line(p) => vec![Some(&p.x), Some(&p.y)],
            MarkProps::Bar(p) => vec![
                p.x.as_ref(),
                p.y.as_ref(),
                p.width.as_ref(),
                p.height.as_ref(),
            ],
            MarkProps::Point(p) => vec![Some(&p.x), Some(&p.y), Some(&p.size)],
            MarkProps::Pie(p) => vec![Some(&p.value), p.outer_radius.as_ref()],
        };
        let mut out: Vec<&str> = Vec::new();
        for s in channels.into_iter().flatten().filter_map(Channel::scale) {
            if !out.contains(&s) {
                out.push(s);
            }
        }
        out
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct AxisSpec {
    pub(crate) orientation: Orientation,
    pub(crate) scale: String,
}

/// Validated chart document in runtime form.
#[derive(Clone, Debug)]
pub(crate) struct ChartModel {
    pub(crate) dimensions: Dimensions,
    pub(crate) data: Vec<DataDef>,
    pub(crate) scales: Vec<ScaleSpec>,
    pub(crate) axes: Vec<AxisSpec>,
    pub(crate) marks: Vec<MarkSpec>,
}

/// Convert a validated document. Legacy marks land after `visual.shapes`.
pub(crate) fn normalize(def: &SpecDef) -> ChartResult<ChartModel> {
    let dimensions = Dimensions::new(def.dimensions.width, def.dimensions.height)?;
    let scales = def.scales.iter().map(ScaleSpec::from_def).collect();
    let axes = def
        .visual
        .axes
        .iter()
        .map(|a| AxisSpec {
            orientation: match a.orientation {
                OrientationDef::Top => Orientation::Top,
                OrientationDef::Bottom => Orientation::Bottom,
                OrientationDef::Left => Orientation::Left,
                OrientationDef::Right => Orientation::Right,
            },
            scale: a.scale.clone(),
        })
        .collect();
    let marks = def
        .all_marks()
        .into_iter()
        .map(|(_, m)| MarkSpec {
            props: props_for(m.kind, &m.properties),
            from: m.from,
        })
        .collect();

    Ok(ChartModel {
        dimensions,
        data: def.data.clone(),
        scales,
        axes,
        marks,
    })
}

fn props_for(kind: MarkKindDef, props: &BTreeMap<String, ChannelDef>) -> MarkProps {
    let get = |name: &str| props.get(name).map(Channel::from);
    let number = |name: &str, default: f64| {
        props
            .get(name)
            .and_then(|c| match c {
                ChannelDef::Literal(v) => v.as_number(),
                ChannelDef::Field { .. } => None,
            })
            .unwrap_or(default)
    };
    let required = |name: &str| get(name).unwrap_or(Channel::Literal(Value::Empty));

    match kind {
        MarkKindDef::Line => MarkProps::Line(LineProps {
            x: required("x"),
            y: required("y"),
            stroke: get("stroke").unwrap_or_else(|| Channel::literal("black")),
            stroke_width: number("strokeWidth", 1.0),
        }),
        MarkKindDef::Bar => MarkProps::Bar(BarProps {
            x: get("x"),
            y: get("y"),
            width: get("width"),
            height: get("height"),
            fill: get("fill").unwrap_or_else(|| Channel::literal("black")),
        }),
        MarkKindDef::Point => MarkProps::Point(PointProps {
            x: required("x"),
            y: required("y"),
            color: get("color"),
            size: get("size").unwrap_or_else(|| Channel::literal(5.0)),
        }),
        MarkKindDef::Pie => MarkProps::Pie(PieProps {
            value: required("value"),
            pad_angle: number("padAngle", 0.0),
            inner_radius: number("innerRadius", 0.0),
            outer_radius: get("outerRadius"),
            fill: get("fill"),
        }),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/spec/normalize.rs"]
mod tests;
