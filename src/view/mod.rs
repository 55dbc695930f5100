//! Built chart instances and their update cycle.

pub(crate) mod state;

use crate::data::value::Record;
use crate::foundation::error::ChartResult;
use crate::render::fingerprint::fingerprint_markup;
use crate::render::options::RenderOptions;
use crate::render::svg::scene_to_svg;
use crate::render::target::{RenderOutcome, RenderTarget};
use crate::scene::Scene;
use crate::spec::ChartSpec;
use crate::spec::normalize::normalize;
use state::ViewState;
use tokio::sync::Mutex;

/// A built chart: resolved data, scales and scene, plus the container it is bound to.
///
/// Calls on one view are serialized in arrival order; each `set_data` holds the lock for the
/// whole recompute-and-redraw cycle and commits only when every step succeeded. `View` is
/// `Send + Sync` and can be shared through an `Arc`.
#[derive(Debug)]
pub struct View {
    options: RenderOptions,
    state: Mutex<ViewState>,
}

impl View {
    /// Parse, validate and build a chart from JSON text.
    pub fn build(spec: &str) -> ChartResult<Self> {
        Self::from_spec(&ChartSpec::from_json(spec)?)
    }

    /// Build from an already parsed document.
    pub fn from_spec(spec: &ChartSpec) -> ChartResult<Self> {
        Self::build_with_options(spec, RenderOptions::default())
    }

    /// Build with explicit layout options.
    #[tracing::instrument(skip_all)]
    pub fn build_with_options(spec: &ChartSpec, options: RenderOptions) -> ChartResult<Self> {
        spec.validate()?;
        let model = normalize(spec.def())?;
        let state = ViewState::assemble(model, &options)?;
        tracing::debug!(
            sources = state.sources.len(),
            scales = state.scales.len(),
            marks = state.scene.marks.len(),
            axes = state.scene.axes.len(),
            "built chart"
        );
        Ok(Self {
            options,
            state: Mutex::new(state),
        })
    }

    /// Layout options in effect.
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Render the current scene and write it to `target`.
    ///
    /// A container target becomes the view's binding: later [`View::set_data`] calls redraw into
    /// it. [`RenderTarget::Markup`] leaves any existing binding in place.
    #[tracing::instrument(skip(self))]
    pub async fn render_as_svg(&self, target: RenderTarget) -> ChartResult<RenderOutcome> {
        let mut state = self.state.lock().await;
        let markup = scene_to_svg(&state.scene, &self.options);
        let written = target.write(&markup)?;
        if written {
            state.mounted = Some(fingerprint_markup(&markup));
            state.binding = Some(target);
        }
        Ok(RenderOutcome { markup, written })
    }

    /// Replace a data source's values and redraw what depends on it.
    ///
    /// Unknown names fail with [`crate::ChartError::DataSourceNotFound`]. On any error the view
    /// keeps its previous data, scene and container contents.
    #[tracing::instrument(skip(self, values), fields(records = values.len()))]
    pub async fn set_data(&self, name: &str, values: Vec<Record>) -> ChartResult<()> {
        let mut state = self.state.lock().await;
        let mut next = state.clone();
        let summary = next.apply_data(name, values, &self.options)?;

        let mut elided = false;
        if let Some(binding) = next.binding.clone() {
            let markup = scene_to_svg(&next.scene, &self.options);
            let fingerprint = fingerprint_markup(&markup);
            if next.mounted == Some(fingerprint) {
                elided = true;
            } else {
                binding.write(&markup)?;
                next.mounted = Some(fingerprint);
            }
        }

        tracing::debug!(
            data = name,
            scales = summary.scales,
            marks = summary.marks,
            axes = summary.axes,
            elided,
            "applied data update"
        );
        *state = next;
        Ok(())
    }

    /// SVG markup for the current scene.
    pub async fn svg(&self) -> String {
        let state = self.state.lock().await;
        scene_to_svg(&state.scene, &self.options)
    }

    /// Copy of the current scene.
    pub async fn scene(&self) -> Scene {
        self.state.lock().await.scene.clone()
    }

    /// Selector of the bound container, if any.
    pub async fn bound_selector(&self) -> Option<String> {
        let state = self.state.lock().await;
        state
            .binding
            .as_ref()
            .and_then(RenderTarget::selector)
            .map(str::to_owned)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/view/view.rs"]
mod tests;
