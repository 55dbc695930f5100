//! Named scales mapping data values to pixel positions.
//!
//! Domains are literal or derived from a data source field; derived domains are recomputed
//! whenever the source's resolved records change.

pub(crate) mod band;
pub(crate) mod linear;
pub(crate) mod log;
pub(crate) mod ticks;

use crate::data::source::DataSource;
use crate::data::value::Value;
use crate::foundation::error::{ChartError, ChartResult};
use crate::spec::model::{DomainDef, ScaleDef};
use std::collections::BTreeMap;

pub use band::BandScale;
pub use linear::LinearScale;
pub use log::LogScale;

/// Scale families.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScaleKind {
    /// Continuous, linear.
    Linear,
    /// Continuous, base-10 logarithmic.
    Log,
    /// Discrete bands.
    Band,
}

/// Where a scale's domain comes from.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum DomainSource {
    Literal(Vec<Value>),
    Data { data: String, field: String },
}

/// A scale declaration, independent of data.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct ScaleSpec {
    pub(crate) name: String,
    pub(crate) kind: ScaleKind,
    pub(crate) domain: DomainSource,
    pub(crate) range: [f64; 2],
    pub(crate) padding: f64,
}

impl ScaleSpec {
    pub(crate) fn from_def(def: &ScaleDef) -> Self {
        let (kind, padding) = match def {
            ScaleDef::Linear(_) => (ScaleKind::Linear, 0.0),
            ScaleDef::Log(_) => (ScaleKind::Log, 0.0),
            ScaleDef::Band(b) => (ScaleKind::Band, b.padding),
        };
        let domain = match def.domain() {
            DomainDef::Literal(values) => DomainSource::Literal(values.clone()),
            DomainDef::Data { data, field } => DomainSource::Data {
                data: data.clone(),
                field: field.clone(),
            },
        };
        Self {
            name: def.name().to_owned(),
            kind,
            domain,
            range: def.range(),
            padding,
        }
    }

    /// Data source the domain derives from, if any.
    pub(crate) fn source(&self) -> Option<&str> {
        match &self.domain {
            DomainSource::Data { data, .. } => Some(data),
            DomainSource::Literal(_) => None,
        }
    }
}

/// A scale with a resolved domain.
#[derive(Clone, Debug, PartialEq)]
pub enum Scale {
    /// Linear scale.
    Linear(LinearScale),
    /// Logarithmic scale.
    Log(LogScale),
    /// Band scale.
    Band(BandScale),
}

impl Scale {
    /// Scale family.
    pub fn kind(&self) -> ScaleKind {
        match self {
            Scale::Linear(_) => ScaleKind::Linear,
            Scale::Log(_) => ScaleKind::Log,
            Scale::Band(_) => ScaleKind::Band,
        }
    }

    /// Range endpoints.
    pub fn range(&self) -> [f64; 2] {
        match self {
            Scale::Linear(s) => s.range(),
            Scale::Log(s) => s.range(),
            Scale::Band(s) => s.range(),
        }
    }

    /// Map a value to a pixel position. `Ok(None)` means unresolved (wrong type, unknown band).
    ///
    /// Band scales return the start of the band.
    pub fn map(&self, v: &Value) -> ChartResult<Option<f64>> {
        match self {
            Scale::Linear(s) => Ok(s.map(v)),
            Scale::Log(s) => s.map(v),
            Scale::Band(s) => Ok(s.map(v)),
        }
    }

    /// The band scale, when this is one.
    pub fn as_band(&self) -> Option<&BandScale> {
        match self {
            Scale::Band(s) => Some(s),
            _ => None,
        }
    }
}

/// Resolve a scale's domain against the current data sources.
pub(crate) fn resolve_scale(
    spec: &ScaleSpec,
    sources: &BTreeMap<String, DataSource>,
) -> ChartResult<Scale> {
    match &spec.domain {
        DomainSource::Literal(values) => resolve_literal(spec, values),
        DomainSource::Data { data, field } => {
            let source = sources.get(data).ok_or_else(|| {
                ChartError::data_source_not_found(format!("{data} (domain of scale '{}')", spec.name))
            })?;
            resolve_derived(spec, source.column(field))
        }
    }
}

fn resolve_literal(spec: &ScaleSpec, values: &[Value]) -> ChartResult<Scale> {
    match spec.kind {
        ScaleKind::Band => Ok(Scale::Band(BandScale::new(
            values.iter().filter_map(Value::category_key),
            spec.range,
            spec.padding,
        ))),
        ScaleKind::Linear | ScaleKind::Log => {
            let [a, b] = values else {
                return Err(ChartError::validation(format!(
                    "scale '{}': literal domain needs exactly 2 entries, got {}",
                    spec.name,
                    values.len()
                )));
            };
            let (Some(d0), Some(d1)) = (a.as_number(), b.as_number()) else {
                return Err(ChartError::validation(format!(
                    "scale '{}': literal domain must be numeric",
                    spec.name
                )));
            };
            continuous(spec, [d0, d1])
        }
    }
}

fn resolve_derived<'a>(
    spec: &ScaleSpec,
    column: impl Iterator<Item = &'a Value>,
) -> ChartResult<Scale> {
    match spec.kind {
        ScaleKind::Band => Ok(Scale::Band(BandScale::new(
            column.filter_map(Value::category_key),
            spec.range,
            spec.padding,
        ))),
        ScaleKind::Linear | ScaleKind::Log => {
            let extent = column
                .filter_map(Value::as_number)
                .fold(None, |acc: Option<[f64; 2]>, x| match acc {
                    None => Some([x, x]),
                    Some([lo, hi]) => Some([lo.min(x), hi.max(x)]),
                });
            match (spec.kind, extent) {
                (ScaleKind::Log, None) => Ok(Scale::Log(LogScale::empty(spec.range))),
                (_, None) => Ok(Scale::Linear(LinearScale::new([0.0, 0.0], spec.range))),
                (_, Some(domain)) => continuous(spec, domain),
            }
        }
    }
}

fn continuous(spec: &ScaleSpec, domain: [f64; 2]) -> ChartResult<Scale> {
    match spec.kind {
        ScaleKind::Log => LogScale::new(domain, spec.range)
            .map(Scale::Log)
            .map_err(|e| match e {
                ChartError::ScaleDomain(msg) => {
                    ChartError::scale_domain(format!("scale '{}': {msg}", spec.name))
                }
                other => other,
            }),
        _ => Ok(Scale::Linear(LinearScale::new(domain, spec.range))),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scale/resolve.rs"]
mod tests;
