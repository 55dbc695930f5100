use crate::data::value::Record;
use crate::foundation::core::Dimensions;
use crate::foundation::error::ChartResult;
use crate::geometry::channel::{BandAnchor, ScaleMap, paint, position, skip_domain_errors};
use crate::geometry::palette::palette_color;
use crate::scene::{MarkGeometry, MarkKind, Primitive, Sector, Space};
use crate::spec::normalize::PieProps;
use std::f64::consts::{FRAC_PI_2, TAU};

/// One annular sector per record, laid out clockwise from 12 o'clock in screen space.
///
/// The circle minus one `padAngle` gap per slice is shared in proportion to the values; zero,
/// negative or non-numeric values get a zero-width slice. When no value is positive every slice
/// is empty.
pub(crate) fn build_pie(
    props: &PieProps,
    records: &[Record],
    scales: &ScaleMap,
    dimensions: Dimensions,
) -> ChartResult<MarkGeometry> {
    let mut values = Vec::with_capacity(records.len());
    for (i, r) in records.iter().enumerate() {
        let v = skip_domain_errors(position(&props.value, r, scales, BandAnchor::Start), "pie", i)?;
        values.push(v.filter(|v| *v > 0.0).unwrap_or(0.0));
    }
    // Relative to the largest value; the sum stays finite for any finite input.
    let largest = values.iter().copied().fold(0.0_f64, f64::max);
    let shares: Vec<f64> = values
        .iter()
        .map(|v| if largest > 0.0 { v / largest } else { 0.0 })
        .collect();
    let total: f64 = shares.iter().sum();
    let pad = props.pad_angle;
    let available = (TAU - pad * records.len() as f64).max(0.0);

    let center = dimensions.center();
    let mut angle = -FRAC_PI_2;
    let mut primitives = Vec::with_capacity(records.len());
    for (i, (r, share)) in records.iter().zip(&shares).enumerate() {
        let sweep = if total > 0.0 {
            available * share / total
        } else {
            0.0
        };
        let outer_radius = match &props.outer_radius {
            Some(ch) => skip_domain_errors(position(ch, r, scales, BandAnchor::Start), "pie", i)?,
            None => None,
        }
        .filter(|radius| *radius >= 0.0)
        .unwrap_or_else(|| dimensions.half_min_side());
        let fill = props
            .fill
            .as_ref()
            .and_then(|c| paint(c, r))
            .unwrap_or_else(|| palette_color(i));

        primitives.push(Primitive::Sector(Sector {
            center,
            inner_radius: props.inner_radius.min(outer_radius),
            outer_radius,
            start_angle: angle,
            sweep_angle: sweep,
            fill,
        }));
        angle += sweep + pad;
    }

    Ok(MarkGeometry {
        kind: MarkKind::Pie,
        space: Space::Screen,
        primitives,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/pie.rs"]
mod tests;
