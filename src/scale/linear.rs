use crate::data::value::Value;
use crate::scale::ticks::nice_ticks_within;

/// Continuous linear mapping from a numeric domain to a pixel range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    domain: [f64; 2],
    range: [f64; 2],
}

impl LinearScale {
    /// Create a linear scale. A degenerate domain maps every value to the range start.
    pub fn new(domain: [f64; 2], range: [f64; 2]) -> Self {
        Self { domain, range }
    }

    /// Domain endpoints.
    pub fn domain(&self) -> [f64; 2] {
        self.domain
    }

    /// Range endpoints.
    pub fn range(&self) -> [f64; 2] {
        self.range
    }

    /// Map a number from domain to range.
    pub fn map_number(&self, x: f64) -> f64 {
        let [d0, d1] = self.domain;
        let [r0, r1] = self.range;
        if d0 == d1 {
            return r0;
        }
        r0 + (x - d0) / (d1 - d0) * (r1 - r0)
    }

    /// Map a record value; non-numeric values do not resolve.
    pub fn map(&self, v: &Value) -> Option<f64> {
        v.as_number().map(|x| self.map_number(x))
    }

    pub(crate) fn ticks(&self, count: usize) -> Vec<f64> {
        nice_ticks_within(self.domain[0], self.domain[1], count)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scale/linear.rs"]
mod tests;
