//! Chart documents: JSON boundary model, validation and normalization.

pub(crate) mod model;
pub(crate) mod normalize;
pub(crate) mod validate;

use crate::foundation::error::{ChartError, ChartResult};
use model::SpecDef;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Chart document boundary object.
///
/// This is the JSON-facing, human-edited representation of a chart. It is validated and
/// normalized into runtime form when building a [`crate::View`].
#[derive(Debug, Clone)]
pub struct ChartSpec {
    def: SpecDef,
}

impl ChartSpec {
    /// Parse a chart document from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> ChartResult<Self> {
        let def: SpecDef = serde_json::from_reader(r)
            .map_err(|e| ChartError::parse(format!("parse chart spec JSON: {e}")))?;
        Ok(Self { def })
    }

    /// Parse a chart document from JSON text.
    pub fn from_json(text: &str) -> ChartResult<Self> {
        let def: SpecDef = serde_json::from_str(text)
            .map_err(|e| ChartError::parse(format!("parse chart spec JSON: {e}")))?;
        Ok(Self { def })
    }

    /// Parse a chart document from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> ChartResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ChartError::parse(format!("open chart spec JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Check references and required properties. All problems are reported together.
    pub fn validate(&self) -> ChartResult<()> {
        validate::validate_spec(&self.def)
            .map_err(|e| ChartError::validation(format!("chart spec validation failed:\n{e}")))
    }

    /// Names of the declared data sources, in spec order.
    pub fn data_source_names(&self) -> Vec<&str> {
        self.def.data.iter().map(|d| d.name.as_str()).collect()
    }

    pub(crate) fn def(&self) -> &SpecDef {
        &self.def
    }
}
