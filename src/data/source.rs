use crate::data::transform::{TransformStep, run_pipeline};
use crate::data::value::{Record, Value};
use crate::spec::model::DataDef;

/// A named record collection with its transform pipeline and the pipeline's last output.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct DataSource {
    name: String,
    values: Vec<Record>,
    steps: Vec<TransformStep>,
    resolved: Vec<Record>,
}

impl DataSource {
    pub(crate) fn from_def(def: &DataDef) -> Self {
        let steps = def
            .transform
            .iter()
            .map(|t| TransformStep::from_def(t, &def.name))
            .collect();
        let mut source = Self {
            name: def.name.clone(),
            values: Vec::new(),
            steps,
            resolved: Vec::new(),
        };
        source.replace_values(def.values.clone());
        source
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    /// Replace raw values wholesale and re-run the full pipeline.
    pub(crate) fn replace_values(&mut self, values: Vec<Record>) {
        self.resolved = run_pipeline(&self.steps, &values);
        self.values = values;
        tracing::debug!(
            data = %self.name,
            raw = self.values.len(),
            resolved = self.resolved.len(),
            "resolved data source"
        );
    }

    /// Records after the transform pipeline.
    pub(crate) fn resolved(&self) -> &[Record] {
        &self.resolved
    }

    /// Values of `field` across resolved records, in record order. Missing fields read empty.
    pub(crate) fn column<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a Value> + 'a {
        static EMPTY: Value = Value::Empty;
        self.resolved
            .iter()
            .map(move |r| r.get(field).unwrap_or(&EMPTY))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/data/source.rs"]
mod tests;
