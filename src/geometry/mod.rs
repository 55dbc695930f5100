//! Record-to-primitive builders, one per mark family.

pub(crate) mod bar;
pub(crate) mod channel;
pub(crate) mod line;
pub(crate) mod palette;
pub(crate) mod pie;
pub(crate) mod point;

use crate::data::value::Record;
use crate::foundation::core::Dimensions;
use crate::foundation::error::ChartResult;
use crate::scene::MarkGeometry;
use crate::spec::normalize::{MarkProps, MarkSpec};

pub(crate) use channel::ScaleMap;

/// Build one mark's geometry from its source's resolved records.
#[tracing::instrument(level = "trace", skip_all, fields(kind = mark.kind().as_str(), from = %mark.from, records = records.len()))]
pub(crate) fn build_mark(
    mark: &MarkSpec,
    records: &[Record],
    scales: &ScaleMap,
    dimensions: Dimensions,
) -> ChartResult<MarkGeometry> {
    match &mark.props {
        MarkProps::Line(p) => line::build_line(p, records, scales),
        MarkProps::Bar(p) => bar::build_bar(p, records, scales),
        MarkProps::Point(p) => point::build_point(p, records, scales),
        MarkProps::Pie(p) => pie::build_pie(p, records, scales, dimensions),
    }
}
