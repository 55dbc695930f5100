use crate::data::value::{Record, Value};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Root of a chart document as written by users.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub(crate) struct SpecDef {
    #[serde(default)]
    pub(crate) dimensions: DimensionsDef,
    #[serde(default)]
    pub(crate) data: Vec<DataDef>,
    #[serde(default)]
    pub(crate) scales: Vec<ScaleDef>,
    #[serde(default)]
    pub(crate) visual: VisualDef,
    /// Legacy mark list; entries carry `on.update` instead of `properties`.
    #[serde(default)]
    pub(crate) marks: Vec<LegacyMarkDef>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub(crate) struct DimensionsDef {
    #[serde(default = "default_width")]
    pub(crate) width: f64,
    #[serde(default = "default_height")]
    pub(crate) height: f64,
}

fn default_width() -> f64 {
    500.0
}

fn default_height() -> f64 {
    200.0
}

impl Default for DimensionsDef {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct DataDef {
    pub(crate) name: String,
    #[serde(default)]
    pub(crate) values: Vec<Record>,
    #[serde(default)]
    pub(crate) transform: Vec<TransformDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub(crate) enum TransformDef {
    Map {
        #[serde(rename = "fn")]
        expr: String,
        output: String,
    },
    Filter {
        #[serde(rename = "fn")]
        expr: String,
    },
    Group {
        by: String,
        #[serde(default)]
        op: GroupOpDef,
        #[serde(default = "default_group_output")]
        output: String,
    },
}

fn default_group_output() -> String {
    "count".to_owned()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum GroupOpDef {
    #[default]
    Count,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub(crate) enum ScaleDef {
    Linear(ContinuousScaleDef),
    Log(ContinuousScaleDef),
    Band(BandScaleDef),
}

impl ScaleDef {
    pub(crate) fn name(&self) -> &str {
        match self {
            ScaleDef::Linear(s) | ScaleDef::Log(s) => &s.name,
            ScaleDef::Band(s) => &s.name,
        }
    }

    pub(crate) fn domain(&self) -> &DomainDef {
        match self {
            ScaleDef::Linear(s) | ScaleDef::Log(s) => &s.domain,
            ScaleDef::Band(s) => &s.domain,
        }
    }

    pub(crate) fn range(&self) -> [f64; 2] {
        match self {
            ScaleDef::Linear(s) | ScaleDef::Log(s) => s.range,
            ScaleDef::Band(s) => s.range,
        }
    }

    pub(crate) fn kind_str(&self) -> &'static str {
        match self {
            ScaleDef::Linear(_) => "linear",
            ScaleDef::Log(_) => "log",
            ScaleDef::Band(_) => "band",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct ContinuousScaleDef {
    pub(crate) name: String,
    #[serde(default)]
    pub(crate) domain: DomainDef,
    #[serde(default = "unit_range")]
    pub(crate) range: [f64; 2],
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct BandScaleDef {
    pub(crate) name: String,
    #[serde(default)]
    pub(crate) domain: DomainDef,
    #[serde(default = "unit_range")]
    pub(crate) range: [f64; 2],
    #[serde(default)]
    pub(crate) padding: f64,
}

fn unit_range() -> [f64; 2] {
    [0.0, 1.0]
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub(crate) enum DomainDef {
    // Listed first: a two-string array must not be read as `{data, field}`.
    Literal(Vec<Value>),
    Data { data: String, field: String },
}

impl Default for DomainDef {
    fn default() -> Self {
        DomainDef::Literal(vec![Value::Number(0.0), Value::Number(1.0)])
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub(crate) struct VisualDef {
    #[serde(default)]
    pub(crate) axes: Vec<AxisDef>,
    #[serde(default)]
    pub(crate) shapes: Vec<ShapeDef>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum OrientationDef {
    Top,
    Bottom,
    Left,
    Right,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct AxisDef {
    pub(crate) orientation: OrientationDef,
    pub(crate) scale: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum MarkKindDef {
    Line,
    Bar,
    Point,
    Pie,
}

impl MarkKindDef {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            MarkKindDef::Line => "line",
            MarkKindDef::Bar => "bar",
            MarkKindDef::Point => "point",
            MarkKindDef::Pie => "pie",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct ShapeDef {
    pub(crate) from: String,
    #[serde(rename = "type")]
    pub(crate) kind: MarkKindDef,
    #[serde(default)]
    pub(crate) properties: BTreeMap<String, ChannelDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct LegacyMarkDef {
    pub(crate) from: String,
    #[serde(rename = "type")]
    pub(crate) kind: MarkKindDef,
    #[serde(default)]
    pub(crate) on: LegacyEventsDef,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub(crate) struct LegacyEventsDef {
    #[serde(default)]
    pub(crate) update: BTreeMap<String, ChannelDef>,
}

/// A mark property: a record field optionally routed through a scale, or a literal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub(crate) enum ChannelDef {
    Field {
        field: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        scale: Option<String>,
    },
    Literal(Value),
}

impl ChannelDef {
    pub(crate) fn scale(&self) -> Option<&str> {
        match self {
            ChannelDef::Field { scale, .. } => scale.as_deref(),
            ChannelDef::Literal(_) => None,
        }
    }
}

/// A shape after legacy normalization: one representation for both source forms.
#[derive(Debug, Clone)]
pub(crate) struct MarkDef {
    pub(crate) from: String,
    pub(crate) kind: MarkKindDef,
    pub(crate) properties: BTreeMap<String, ChannelDef>,
}

impl SpecDef {
    /// `visual.shapes` followed by legacy `marks`, each tagged with its JSON path prefix.
    pub(crate) fn all_marks(&self) -> Vec<(MarkPath, MarkDef)> {
        let shapes = self.visual.shapes.iter().enumerate().map(|(i, s)| {
            (
                MarkPath::Shape(i),
                MarkDef {
                    from: s.from.clone(),
                    kind: s.kind,
                    properties: s.properties.clone(),
                },
            )
        });
        let legacy = self.marks.iter().enumerate().map(|(i, m)| {
            (
                MarkPath::Legacy(i),
                MarkDef {
                    from: m.from.clone(),
                    kind: m.kind,
                    properties: m.on.update.clone(),
                },
            )
        });
        shapes.chain(legacy).collect()
    }
}

/// Where a normalized mark came from in the source document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MarkPath {
    Shape(usize),
    Legacy(usize),
}

#[cfg(test)]
#[path = "../../tests/unit/spec/model.rs"]
mod tests;
