use crate::data::value::Value;
use crate::foundation::error::{ChartError, ChartResult};
use crate::scale::ticks::log_ticks;

/// Base-10 logarithmic mapping. Never produces NaN or infinities: non-positive inputs fail.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LogScale {
    /// `None` when derived from an empty data source; nothing resolves then.
    domain: Option<[f64; 2]>,
    range: [f64; 2],
}

impl LogScale {
    /// Create a log scale over a strictly positive domain.
    pub fn new(domain: [f64; 2], range: [f64; 2]) -> ChartResult<Self> {
        let [d0, d1] = domain;
        if !(d0.is_finite() && d1.is_finite() && d0 > 0.0 && d1 > 0.0) {
            return Err(ChartError::scale_domain(format!(
                "log scale domain must be strictly positive, got [{d0}, {d1}]"
            )));
        }
        Ok(Self {
            domain: Some(domain),
            range,
        })
    }

    /// A log scale with no domain (empty source). Maps nothing.
    pub fn empty(range: [f64; 2]) -> Self {
        Self {
            domain: None,
            range,
        }
    }

    /// Domain endpoints, or `None` when derived from no data.
    pub fn domain(&self) -> Option<[f64; 2]> {
        self.domain
    }

    /// Range endpoints.
    pub fn range(&self) -> [f64; 2] {
        self.range
    }

    /// Map a number; `Ok(None)` when the scale has no domain.
    pub fn map_number(&self, x: f64) -> ChartResult<Option<f64>> {
        let Some([d0, d1]) = self.domain else {
            return Ok(None);
        };
        if !(x.is_finite() && x > 0.0) {
            return Err(ChartError::scale_domain(format!(
                "log scale cannot map non-positive value {x}"
            )));
        }
        let [r0, r1] = self.range;
        let (l0, l1) = (d0.log10(), d1.log10());
        if l0 == l1 {
            return Ok(Some(r0));
        }
        Ok(Some(r0 + (x.log10() - l0) / (l1 - l0) * (r1 - r0)))
    }

    /// Map a record value; non-numeric values do not resolve.
    pub fn map(&self, v: &Value) -> ChartResult<Option<f64>> {
        match v.as_number() {
            Some(x) => self.map_number(x),
            None => Ok(None),
        }
    }

    pub(crate) fn ticks(&self) -> Vec<f64> {
        match self.domain {
            Some([d0, d1]) => log_ticks(d0, d1),
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scale/log.rs"]
mod tests;
