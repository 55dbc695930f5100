use crate::data::value::Value;
use std::collections::HashMap;

/// Discrete scale splitting a pixel range into equal bands, one per category.
///
/// Categories keep first-appearance order. Padding only shrinks the drawn part of a band; band
/// steps always sum to the full range.
#[derive(Clone, Debug, PartialEq)]
pub struct BandScale {
    categories: Vec<String>,
    index: HashMap<String, usize>,
    range: [f64; 2],
    padding: f64,
}

impl BandScale {
    /// Build from category keys; duplicates after the first occurrence are ignored.
    pub fn new(categories: impl IntoIterator<Item = String>, range: [f64; 2], padding: f64) -> Self {
        let mut ordered = Vec::new();
        let mut index = HashMap::new();
        for c in categories {
            if !index.contains_key(&c) {
                index.insert(c.clone(), ordered.len());
                ordered.push(c);
            }
        }
        Self {
            categories: ordered,
            index,
            range,
            padding: padding.clamp(0.0, 1.0),
        }
    }

    /// Categories in band order.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Range endpoints.
    pub fn range(&self) -> [f64; 2] {
        self.range
    }

    /// Number of bands.
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Whether there are no bands.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Step between band starts: `(r1 - r0) / n`, zero with no categories.
    pub fn bandwidth(&self) -> f64 {
        if self.categories.is_empty() {
            return 0.0;
        }
        (self.range[1] - self.range[0]) / self.categories.len() as f64
    }

    /// Drawn width of a band after padding.
    pub fn inner_bandwidth(&self) -> f64 {
        self.bandwidth() * (1.0 - self.padding)
    }

    /// Index of a category, if present.
    pub fn index_of(&self, category: &str) -> Option<usize> {
        self.index.get(category).copied()
    }

    /// Start of the band for `v`: `r0 + index * bandwidth`.
    pub fn map(&self, v: &Value) -> Option<f64> {
        let i = self.index_of(&v.category_key()?)?;
        Some(self.range[0] + i as f64 * self.bandwidth())
    }

    /// Start of the drawn part of the band for `v`.
    pub fn inner_start(&self, v: &Value) -> Option<f64> {
        Some(self.map(v)? + self.bandwidth() * self.padding / 2.0)
    }

    /// Centers of all bands, paired with their category.
    pub(crate) fn centers(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        let bw = self.bandwidth();
        self.categories
            .iter()
            .enumerate()
            .map(move |(i, c)| (c.as_str(), self.range[0] + (i as f64 + 0.5) * bw))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scale/band.rs"]
mod tests;
