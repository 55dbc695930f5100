/// Convenience result type used across chartflow.
pub type ChartResult<T> = Result<T, ChartError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum ChartError {
    /// Malformed spec or data text.
    #[error("parse error: {0}")]
    Parse(String),

    /// Well-formed spec that violates a structural rule (dangling reference, missing channel).
    #[error("validation error: {0}")]
    Validation(String),

    /// A scale cannot represent its domain or a queried value (log of a non-positive number).
    #[error("scale domain error: {0}")]
    ScaleDomain(String),

    /// Errors while evaluating a transform expression.
    #[error("evaluation error: {0}")]
    Evaluation(String),

    /// The render target selector did not resolve to a container.
    #[error("target not found: {0}")]
    TargetNotFound(String),

    /// `set_data` named a data source that the chart document does not declare.
    #[error("data source not found: {0}")]
    DataSourceNotFound(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ChartError {
    /// Build a [`ChartError::Parse`] value.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Build a [`ChartError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ChartError::ScaleDomain`] value.
    pub fn scale_domain(msg: impl Into<String>) -> Self {
        Self::ScaleDomain(msg.into())
    }

    /// Build a [`ChartError::Evaluation`] value.
    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }

    /// Build a [`ChartError::TargetNotFound`] value.
    pub fn target_not_found(selector: impl Into<String>) -> Self {
        Self::TargetNotFound(selector.into())
    }

    /// Build a [`ChartError::DataSourceNotFound`] value.
    pub fn data_source_not_found(name: impl Into<String>) -> Self {
        Self::DataSourceNotFound(name.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
