//! SVG serialization and mount targets.

pub(crate) mod fingerprint;
pub(crate) mod options;
pub(crate) mod svg;
pub(crate) mod target;

pub use options::RenderOptions;
pub use target::{Document, MountTarget, RenderOutcome, RenderTarget};
