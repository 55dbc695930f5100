use crate::foundation::error::{ChartError, ChartResult};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

/// Anything that can take rendered markup at a selector.
///
/// `mount` replaces whatever the container held before. Selectors that do not name a container
/// fail with [`ChartError::TargetNotFound`].
pub trait MountTarget: Send + Sync {
    /// Replace the contents of the container at `selector` with `markup`.
    fn mount(&self, selector: &str, markup: &str) -> ChartResult<()>;
}

/// In-memory container registry. Clones share the same containers.
#[derive(Clone, Debug, Default)]
pub struct Document {
    containers: Arc<Mutex<BTreeMap<String, Option<String>>>>,
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an empty container. Existing contents are kept.
    pub fn add_container(&self, selector: impl Into<String>) -> ChartResult<()> {
        self.lock()?.entry(selector.into()).or_insert(None);
        Ok(())
    }

    /// Current markup in a container; `None` when the container is unknown or still empty.
    pub fn contents(&self, selector: &str) -> Option<String> {
        self.lock().ok()?.get(selector).cloned().flatten()
    }

    fn lock(&self) -> ChartResult<std::sync::MutexGuard<'_, BTreeMap<String, Option<String>>>> {
        self.containers
            .lock()
            .map_err(|_| ChartError::Other(anyhow::anyhow!("document lock poisoned")))
    }
}

impl MountTarget for Document {
    fn mount(&self, selector: &str, markup: &str) -> ChartResult<()> {
        let mut containers = self.lock()?;
        let slot = containers
            .get_mut(selector)
            .ok_or_else(|| ChartError::target_not_found(selector))?;
        *slot = Some(markup.to_owned());
        Ok(())
    }
}

/// Where `render_as_svg` writes.
#[derive(Clone)]
pub enum RenderTarget {
    /// A container resolved through a [`MountTarget`]; the binding is kept for later redraws.
    Container {
        /// Registry the selector is resolved against.
        mount: Arc<dyn MountTarget>,
        /// Container selector.
        selector: String,
    },
    /// Hand the markup back to the caller without mounting it.
    Markup,
}

impl RenderTarget {
    /// Target a container of an in-memory [`Document`].
    pub fn container(document: &Document, selector: impl Into<String>) -> Self {
        RenderTarget::Container {
            mount: Arc::new(document.clone()),
            selector: selector.into(),
        }
    }

    pub(crate) fn selector(&self) -> Option<&str> {
        match self {
            RenderTarget::Container { selector, .. } => Some(selector),
            RenderTarget::Markup => None,
        }
    }

    pub(crate) fn write(&self, markup: &str) -> ChartResult<bool> {
        match self {
            RenderTarget::Container { mount, selector } => {
                mount.mount(selector, markup)?;
                Ok(true)
            }
            RenderTarget::Markup => Ok(false),
        }
    }
}

impl std::fmt::Debug for RenderTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderTarget::Container { selector, .. } => {
                f.debug_struct("Container").field("selector", selector).finish()
            }
            RenderTarget::Markup => f.write_str("Markup"),
        }
    }
}

/// Result of a render call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderOutcome {
    /// The full SVG document.
    pub markup: String,
    /// Whether a container was written.
    pub written: bool,
}

#[cfg(test)]
#[path = "../../tests/unit/render/target.rs"]
mod tests;
