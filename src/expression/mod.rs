//! Per-record expressions used by data transforms.
//!
//! Expressions are parsed once into an AST and evaluated against each record. The grammar covers
//! numeric, string and boolean literals, field identifiers, unary `-`/`!`, `+ - * / %`,
//! comparisons and `&&`/`||` with conventional precedence.

pub(crate) mod ast;
pub(crate) mod eval;
pub(crate) mod lexer;
pub(crate) mod parser;
pub(crate) mod syntax;

use crate::data::value::{Record, Value};
use crate::foundation::error::{ChartError, ChartResult};

/// A parsed expression, ready to evaluate against records.
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    source: String,
    ast: ast::Expr,
}

impl Expression {
    /// Parse expression text. Malformed input fails with [`ChartError::Evaluation`].
    pub fn parse(source: &str) -> ChartResult<Self> {
        let ast = parser::parse_expr(source)
            .map_err(|e| ChartError::evaluation(format!("'{source}': {e}")))?;
        Ok(Self {
            source: source.to_owned(),
            ast,
        })
    }

    /// Evaluate against one record.
    pub fn eval(&self, record: &Record) -> ChartResult<Value> {
        eval::eval_expr(&self.ast, record)
    }

    /// The original expression text.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Field names the expression reads.
    pub fn fields(&self) -> Vec<&str> {
        self.ast.fields()
    }
}
