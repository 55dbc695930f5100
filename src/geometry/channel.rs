use crate::data::value::{Record, Value};
use crate::foundation::error::{ChartError, ChartResult};
use crate::scale::Scale;
use crate::spec::normalize::Channel;
use std::collections::BTreeMap;

/// Resolved scales by name.
pub(crate) type ScaleMap = BTreeMap<String, Scale>;

/// Where on a band a band-scaled position lands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum BandAnchor {
    Start,
    Center,
}

static EMPTY: Value = Value::Empty;

impl Channel {
    /// The value this channel reads for `record`, before any scale.
    pub(crate) fn raw<'a>(&'a self, record: &'a Record) -> &'a Value {
        match self {
            Channel::Field { field, .. } => record.get(field).unwrap_or(&EMPTY),
            Channel::Literal(v) => v,
        }
    }
}

pub(crate) fn scale_for<'a>(channel: &Channel, scales: &'a ScaleMap) -> ChartResult<Option<&'a Scale>> {
    match channel.scale() {
        None => Ok(None),
        Some(name) => scales
            .get(name)
            .map(Some)
            .ok_or_else(|| ChartError::validation(format!("unknown scale '{name}'"))),
    }
}

/// Pixel position for a channel on one record. `Ok(None)` when the value does not resolve.
pub(crate) fn position(
    channel: &Channel,
    record: &Record,
    scales: &ScaleMap,
    anchor: BandAnchor,
) -> ChartResult<Option<f64>> {
    let v = channel.raw(record);
    match scale_for(channel, scales)? {
        None => Ok(v.as_number()),
        Some(Scale::Band(band)) => Ok(band.map(v).map(|start| match anchor {
            BandAnchor::Start => start,
            BandAnchor::Center => start + band.bandwidth() / 2.0,
        })),
        Some(scale) => scale.map(v),
    }
}

/// Downgrade a per-record scale domain failure to "unresolved" so the record is skipped.
pub(crate) fn skip_domain_errors(
    res: ChartResult<Option<f64>>,
    mark: &str,
    record_index: usize,
) -> ChartResult<Option<f64>> {
    match res {
        Err(ChartError::ScaleDomain(msg)) => {
            tracing::debug!(mark, record = record_index, %msg, "skipping record outside scale domain");
            Ok(None)
        }
        other => other,
    }
}

/// CSS color text for a paint channel; empty values do not resolve.
pub(crate) fn paint(channel: &Channel, record: &Record) -> Option<String> {
    let s = channel.raw(record).to_string();
    (!s.is_empty()).then_some(s)
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/channel.rs"]
mod tests;
