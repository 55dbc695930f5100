use crate::foundation::core::Dimensions;
use crate::foundation::math::format_number;
use crate::scale::Scale;
use crate::scene::{AxisGeometry, Orientation, Tick};
use crate::spec::normalize::AxisSpec;

const LABEL_DECIMALS: usize = 2;

/// Baseline and ticks for one axis, in chart space.
///
/// Band scales get one tick per category at the band center; linear scales get nice ticks inside
/// the domain; log scales get the powers of ten inside the domain.
pub(crate) fn build_axis(
    axis: &AxisSpec,
    scale: &Scale,
    dimensions: Dimensions,
    tick_count: usize,
) -> AxisGeometry {
    let offset = match axis.orientation {
        Orientation::Bottom | Orientation::Left => 0.0,
        Orientation::Top => dimensions.height,
        Orientation::Right => dimensions.width,
    };

    let ticks = match scale {
        Scale::Band(band) => band
            .centers()
            .map(|(category, position)| Tick {
                position,
                label: category.to_owned(),
            })
            .collect(),
        Scale::Linear(linear) => linear
            .ticks(tick_count)
            .into_iter()
            .map(|t| Tick {
                position: linear.map_number(t),
                label: format_number(t, LABEL_DECIMALS),
            })
            .collect(),
        Scale::Log(log) => log
            .ticks()
            .into_iter()
            .filter_map(|t| {
                let position = log.map_number(t).ok().flatten()?;
                Some(Tick {
                    position,
                    label: format_number(t, LABEL_DECIMALS),
                })
            })
            .collect(),
    };

    AxisGeometry {
        orientation: axis.orientation,
        scale: axis.scale.clone(),
        offset,
        extent: scale.range(),
        ticks,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/axis/builder.rs"]
mod tests;
