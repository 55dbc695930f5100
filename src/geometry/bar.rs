use crate::data::value::Record;
use crate::foundation::core::Rect;
use crate::foundation::error::ChartResult;
use crate::geometry::channel::{
    BandAnchor, ScaleMap, paint, position, scale_for, skip_domain_errors,
};
use crate::scale::BandScale;
use crate::scene::{MarkGeometry, MarkKind, Primitive, Space};
use crate::spec::normalize::{BarProps, Channel};

/// The axis a bar's categories run along.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum BarDirection {
    /// Bars stand on the x axis and grow along y.
    Vertical,
    /// Bars start at the y axis and grow along x.
    Horizontal,
}

/// Channels seen from the bar's own frame: `pos`/`breadth` across the bar, `base`/`size` along it.
struct Frame<'a> {
    pos: Option<&'a Channel>,
    breadth: Option<&'a Channel>,
    base: Option<&'a Channel>,
    size: Option<&'a Channel>,
}

/// One rectangle per record, in chart space.
///
/// Orientation follows the band scale: a band-scaled `y` makes bars horizontal; otherwise they are
/// vertical. Along the band the bar takes the padded band width, or `width`/`height` capped to it.
/// Along the value axis, `height` (or `width`) gives the length and `y` (or `x`) the baseline;
/// when only `y` (or `x`) is present it is the length from zero. Records that do not resolve
/// are skipped.
pub(crate) fn build_bar(
    props: &BarProps,
    records: &[Record],
    scales: &ScaleMap,
) -> ChartResult<MarkGeometry> {
    let y_band = match &props.y {
        Some(ch) => scale_for(ch, scales)?.and_then(|s| s.as_band()),
        None => None,
    };
    let x_band = match &props.x {
        Some(ch) => scale_for(ch, scales)?.and_then(|s| s.as_band()),
        None => None,
    };
    let (direction, band) = match (x_band, y_band) {
        (None, Some(b)) => (BarDirection::Horizontal, Some(b)),
        (x, _) => (BarDirection::Vertical, x),
    };

    let frame = match direction {
        BarDirection::Vertical => Frame {
            pos: props.x.as_ref(),
            breadth: props.width.as_ref(),
            base: props.y.as_ref(),
            size: props.height.as_ref(),
        },
        BarDirection::Horizontal => Frame {
            pos: props.y.as_ref(),
            breadth: props.height.as_ref(),
            base: props.x.as_ref(),
            size: props.width.as_ref(),
        },
    };

    let mut primitives = Vec::with_capacity(records.len());
    for (i, r) in records.iter().enumerate() {
        let Some((p0, p1)) = across(&frame, band, r, scales, i)? else {
            continue;
        };
        let Some((v0, v1)) = along(&frame, r, scales, i)? else {
            continue;
        };
        let rect = match direction {
            BarDirection::Vertical => Rect::new(p0, v0, p1, v1),
            BarDirection::Horizontal => Rect::new(v0, p0, v1, p1),
        };
        primitives.push(Primitive::Rect {
            rect: rect.abs(),
            fill: paint(&props.fill, r).unwrap_or_else(|| "black".to_owned()),
        });
    }

    Ok(MarkGeometry {
        kind: MarkKind::Bar,
        space: Space::Chart,
        primitives,
    })
}

fn resolve(
    ch: &Channel,
    r: &Record,
    scales: &ScaleMap,
    i: usize,
) -> ChartResult<Option<f64>> {
    skip_domain_errors(position(ch, r, scales, BandAnchor::Start), "bar", i)
}

/// Extent across the bar: band slot, or `pos` plus `breadth` on a continuous axis.
fn across(
    frame: &Frame<'_>,
    band: Option<&BandScale>,
    r: &Record,
    scales: &ScaleMap,
    i: usize,
) -> ChartResult<Option<(f64, f64)>> {
    let Some(pos_ch) = frame.pos else {
        return Ok(None);
    };
    if let Some(band) = band {
        let Some(start) = band.inner_start(pos_ch.raw(r)) else {
            return Ok(None);
        };
        let inner = band.inner_bandwidth();
        let breadth = match frame.breadth {
            Some(ch) => resolve(ch, r, scales, i)?.map_or(inner, |w| w.min(inner)),
            None => inner,
        };
        let start = start + (inner - breadth) / 2.0;
        return Ok(Some((start, start + breadth)));
    }

    let Some(pos) = resolve(pos_ch, r, scales, i)? else {
        return Ok(None);
    };
    let Some(breadth) = frame.breadth else {
        return Ok(None);
    };
    Ok(resolve(breadth, r, scales, i)?.map(|b| (pos, pos + b)))
}

/// Extent along the bar: from the baseline to baseline plus length.
fn along(
    frame: &Frame<'_>,
    r: &Record,
    scales: &ScaleMap,
    i: usize,
) -> ChartResult<Option<(f64, f64)>> {
    match (frame.size, frame.base) {
        (Some(size), base) => {
            let base = match base {
                Some(ch) => match resolve(ch, r, scales, i)? {
                    Some(b) => b,
                    None => return Ok(None),
                },
                None => 0.0,
            };
            Ok(resolve(size, r, scales, i)?.map(|s| (base, base + s)))
        }
        (None, Some(base)) => Ok(resolve(base, r, scales, i)?.map(|v| (0.0, v))),
        (None, None) => Ok(None),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/bar.rs"]
mod tests;
