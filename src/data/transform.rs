use crate::data::value::{Record, Value};
use crate::expression::Expression;
use crate::spec::model::{GroupOpDef, TransformDef};
use std::collections::HashMap;

/// An expression that may have failed to parse at build time.
///
/// A broken expression never aborts the pipeline: `map` writes empty and `filter` drops.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum CompiledExpr {
    Ready(Expression),
    Broken,
}

impl CompiledExpr {
    pub(crate) fn compile(source: &str, source_name: &str) -> Self {
        match Expression::parse(source) {
            Ok(expr) => {
                tracing::debug!(
                    data = source_name,
                    expr = source,
                    fields = ?expr.fields(),
                    "compiled transform expression"
                );
                CompiledExpr::Ready(expr)
            }
            Err(e) => {
                tracing::warn!(
                    data = source_name,
                    expr = source,
                    error = %e,
                    "transform expression does not parse; its output will be empty"
                );
                CompiledExpr::Broken
            }
        }
    }

    fn eval(&self, record: &Record) -> Option<Value> {
        match self {
            CompiledExpr::Ready(expr) => expr.eval(record).ok(),
            CompiledExpr::Broken => None,
        }
    }
}

/// One step of a data source's transform pipeline.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum TransformStep {
    Map { expr: CompiledExpr, output: String },
    Filter { expr: CompiledExpr },
    Group { by: String, op: GroupOp, output: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum GroupOp {
    Count,
}

impl TransformStep {
    pub(crate) fn from_def(def: &TransformDef, source_name: &str) -> Self {
        match def {
            TransformDef::Map { expr, output } => TransformStep::Map {
                expr: CompiledExpr::compile(expr, source_name),
                output: output.clone(),
            },
            TransformDef::Filter { expr } => TransformStep::Filter {
                expr: CompiledExpr::compile(expr, source_name),
            },
            TransformDef::Group { by, op, output } => TransformStep::Group {
                by: by.clone(),
                op: match op {
                    GroupOpDef::Count => GroupOp::Count,
                },
                output: output.clone(),
            },
        }
    }

    pub(crate) fn apply(&self, records: Vec<Record>) -> Vec<Record> {
        match self {
            TransformStep::Map { expr, output } => records
                .into_iter()
                .map(|mut r| {
                    let v = expr.eval(&r).unwrap_or(Value::Empty);
                    r.insert(output.clone(), v);
                    r
                })
                .collect(),
            TransformStep::Filter { expr } => records
                .into_iter()
                .filter(|r| expr.eval(r).is_some_and(|v| v.is_truthy()))
                .collect(),
            TransformStep::Group { by, op, output } => group(&records, by, *op, output),
        }
    }
}

fn group(records: &[Record], by: &str, op: GroupOp, output: &str) -> Vec<Record> {
    let mut order: Vec<Value> = Vec::new();
    let mut counts: HashMap<String, usize> = HashMap::new();

    for r in records {
        let key_value = r.get(by).cloned().unwrap_or_default();
        let Some(key) = key_value.category_key() else {
            continue;
        };
        let slot = counts.entry(key).or_insert(0);
        if *slot == 0 {
            order.push(key_value);
        }
        match op {
            GroupOp::Count => *slot += 1,
        }
    }

    order
        .into_iter()
        .filter_map(|value| {
            let n = *counts.get(&value.category_key()?)?;
            let mut out = Record::new();
            out.insert(by.to_owned(), value);
            out.insert(output.to_owned(), Value::Number(n as f64));
            Some(out)
        })
        .collect()
}

/// Run every step in order.
pub(crate) fn run_pipeline(steps: &[TransformStep], values: &[Record]) -> Vec<Record> {
    steps
        .iter()
        .fold(values.to_vec(), |records, step| step.apply(records))
}

#[cfg(test)]
#[path = "../../tests/unit/data/transform.rs"]
mod tests;
