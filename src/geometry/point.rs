use crate::data::value::Record;
use crate::foundation::core::Point;
use crate::foundation::error::ChartResult;
use crate::geometry::channel::{BandAnchor, ScaleMap, paint, position, skip_domain_errors};
use crate::geometry::palette::palette_color;
use crate::scene::{MarkGeometry, MarkKind, Primitive, Space};
use crate::spec::normalize::PointProps;

const DEFAULT_RADIUS: f64 = 5.0;

pub(crate) fn build_point(
    props: &PointProps,
    records: &[Record],
    scales: &ScaleMap,
) -> ChartResult<MarkGeometry> {
    let mut primitives = Vec::with_capacity(records.len());
    for (i, r) in records.iter().enumerate() {
        let x = skip_domain_errors(position(&props.x, r, scales, BandAnchor::Center), "point", i)?;
        let y = skip_domain_errors(position(&props.y, r, scales, BandAnchor::Center), "point", i)?;
        let (Some(x), Some(y)) = (x, y) else {
            continue;
        };
        let radius = skip_domain_errors(position(&props.size, r, scales, BandAnchor::Start), "point", i)?
            .filter(|s| *s >= 0.0)
            .unwrap_or(DEFAULT_RADIUS);
        let fill = props
            .color
            .as_ref()
            .and_then(|c| paint(c, r))
            .unwrap_or_else(|| palette_color(i));
        primitives.push(Primitive::Circle {
            center: Point::new(x, y),
            radius,
            fill,
        });
    }

    Ok(MarkGeometry {
        kind: MarkKind::Point,
        space: Space::Chart,
        primitives,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/point.rs"]
mod tests;
