use crate::data::value::Record;
use crate::foundation::core::BezPath;
use crate::foundation::error::ChartResult;
use crate::geometry::channel::{BandAnchor, ScaleMap, paint, position, skip_domain_errors};
use crate::scene::{MarkGeometry, MarkKind, Primitive, Space, Stroke};
use crate::spec::normalize::LineProps;

/// One polyline through the records in order, in chart space.
///
/// A record whose `x` or `y` does not resolve lifts the pen: the path continues as a new subpath
/// at the next resolvable record.
pub(crate) fn build_line(
    props: &LineProps,
    records: &[Record],
    scales: &ScaleMap,
) -> ChartResult<MarkGeometry> {
    let mut path = BezPath::new();
    let mut pen_down = false;

    for (i, r) in records.iter().enumerate() {
        let x = skip_domain_errors(position(&props.x, r, scales, BandAnchor::Center), "line", i)?;
        let y = skip_domain_errors(position(&props.y, r, scales, BandAnchor::Center), "line", i)?;
        match (x, y) {
            (Some(x), Some(y)) if pen_down => path.line_to((x, y)),
            (Some(x), Some(y)) => {
                path.move_to((x, y));
                pen_down = true;
            }
            _ => pen_down = false,
        }
    }

    let primitives = if path.elements().is_empty() {
        Vec::new()
    } else {
        let color = records
            .first()
            .and_then(|r| paint(&props.stroke, r))
            .unwrap_or_else(|| "black".to_owned());
        vec![Primitive::Path {
            path,
            stroke: Stroke {
                color,
                width: props.stroke_width,
            },
        }]
    };

    Ok(MarkGeometry {
        kind: MarkKind::Line,
        space: Space::Chart,
        primitives,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/line.rs"]
mod tests;
