use crate::foundation::math::format_number;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// One record of a data source: field name to scalar.
pub type Record = BTreeMap<String, Value>;

/// Scalar field value carried by records.
///
/// `null` in JSON is the empty value; it propagates through arithmetic and never resolves to a
/// position.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Missing or unset.
    #[default]
    Empty,
    /// Boolean scalar.
    Bool(bool),
    /// Numeric scalar.
    Number(f64),
    /// Text scalar.
    Text(String),
}

impl Value {
    /// Numeric view; only [`Value::Number`] with a finite payload qualifies.
    pub fn as_number(&self) -> Option<f64> {
        match *self {
            Value::Number(n) if n.is_finite() => Some(n),
            _ => None,
        }
    }

    /// Text view; only [`Value::Text`] qualifies.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Whether the value is [`Value::Empty`].
    pub fn is_empty(&self) -> bool {
        matches!(self, Value::Empty)
    }

    /// Truthiness used by filter predicates and logical operators.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Empty => false,
            Value::Bool(b) => *b,
            Value::Number(n) => *n != 0.0 && !n.is_nan(),
            Value::Text(s) => !s.is_empty(),
        }
    }

    /// Key identifying this value as a band category. Empty values have no category.
    pub fn category_key(&self) -> Option<String> {
        match self {
            Value::Empty => None,
            other => Some(other.to_string()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Empty => Ok(()),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => f.write_str(&format_number(*n, 6)),
            Value::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Number(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

/// Parse a JSON array of records.
pub fn records_from_json(text: &str) -> crate::ChartResult<Vec<Record>> {
    serde_json::from_str(text)
        .map_err(|e| crate::ChartError::parse(format!("parse data values JSON: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/data/value.rs"]
mod tests;
