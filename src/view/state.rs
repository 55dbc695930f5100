use crate::axis::build_axis;
use crate::data::source::DataSource;
use crate::data::value::Record;
use crate::foundation::error::{ChartError, ChartResult};
use crate::geometry::{ScaleMap, build_mark};
use crate::render::RenderTarget;
use crate::render::fingerprint::MarkupFingerprint;
use crate::render::options::RenderOptions;
use crate::scale::resolve_scale;
use crate::scene::{AxisGeometry, MarkGeometry, Scene};
use crate::spec::normalize::{AxisSpec, ChartModel, MarkSpec};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Everything one chart instance owns. Updates work on a clone and replace it on success.
#[derive(Clone, Debug)]
pub(crate) struct ViewState {
    pub(crate) model: Arc<ChartModel>,
    pub(crate) sources: BTreeMap<String, DataSource>,
    pub(crate) scales: ScaleMap,
    pub(crate) scene: Scene,
    pub(crate) binding: Option<RenderTarget>,
    /// Fingerprint of the markup last written to `binding`.
    pub(crate) mounted: Option<MarkupFingerprint>,
}

/// What one `set_data` cycle recomputed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct UpdateSummary {
    pub(crate) scales: usize,
    pub(crate) marks: usize,
    pub(crate) axes: usize,
}

impl ViewState {
    /// Resolve every source, scale, mark and axis of a normalized model.
    pub(crate) fn assemble(model: ChartModel, options: &RenderOptions) -> ChartResult<Self> {
        let sources: BTreeMap<String, DataSource> = model
            .data
            .iter()
            .map(|d| {
                let source = DataSource::from_def(d);
                (source.name().to_owned(), source)
            })
            .collect();

        let mut scales = ScaleMap::new();
        for spec in &model.scales {
            scales.insert(spec.name.clone(), resolve_scale(spec, &sources)?);
        }

        let marks = model
            .marks
            .iter()
            .map(|m| mark_geometry(m, &model, &sources, &scales))
            .collect::<ChartResult<Vec<_>>>()?;
        let axes = model
            .axes
            .iter()
            .map(|a| axis_geometry(a, &model, &scales, options))
            .collect::<ChartResult<Vec<_>>>()?;

        let scene = Scene {
            dimensions: model.dimensions,
            marks,
            axes,
        };
        Ok(Self {
            model: Arc::new(model),
            sources,
            scales,
            scene,
            binding: None,
            mounted: None,
        })
    }

    /// Replace one source's values and recompute what depends on it, in place.
    ///
    /// Callers run this on a clone; an error leaves the clone half-updated and it is discarded.
    pub(crate) fn apply_data(
        &mut self,
        name: &str,
        values: Vec<Record>,
        options: &RenderOptions,
    ) -> ChartResult<UpdateSummary> {
        self.sources
            .get_mut(name)
            .ok_or_else(|| ChartError::data_source_not_found(name))?
            .replace_values(values);

        let model = Arc::clone(&self.model);
        let mut summary = UpdateSummary::default();

        let mut rescaled: Vec<&str> = Vec::new();
        for spec in model.scales.iter().filter(|s| s.source() == Some(name)) {
            self.scales
                .insert(spec.name.clone(), resolve_scale(spec, &self.sources)?);
            rescaled.push(&spec.name);
        }
        summary.scales = rescaled.len();

        for (i, mark) in model.marks.iter().enumerate() {
            let affected =
                mark.from == name || mark.scales().iter().any(|s| rescaled.contains(s));
            if affected {
                self.scene.marks[i] = mark_geometry(mark, &model, &self.sources, &self.scales)?;
                summary.marks += 1;
            }
        }
        for (i, axis) in model.axes.iter().enumerate() {
            if rescaled.contains(&axis.scale.as_str()) {
                self.scene.axes[i] = axis_geometry(axis, &model, &self.scales, options)?;
                summary.axes += 1;
            }
        }
        Ok(summary)
    }
}

fn mark_geometry(
    mark: &MarkSpec,
    model: &ChartModel,
    sources: &BTreeMap<String, DataSource>,
    scales: &ScaleMap,
) -> ChartResult<MarkGeometry> {
    let source = sources
        .get(&mark.from)
        .ok_or_else(|| ChartError::data_source_not_found(mark.from.clone()))?;
    build_mark(mark, source.resolved(), scales, model.dimensions)
}

fn axis_geometry(
    axis: &AxisSpec,
    model: &ChartModel,
    scales: &ScaleMap,
    options: &RenderOptions,
) -> ChartResult<AxisGeometry> {
    let scale = scales
        .get(&axis.scale)
        .ok_or_else(|| ChartError::validation(format!("axis references unknown scale '{}'", axis.scale)))?;
    Ok(build_axis(axis, scale, model.dimensions, options.tick_count))
}
