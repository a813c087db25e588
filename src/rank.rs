//! Probability distributions over named nodes
//!
//! Both estimators and the transition model hand back a [`Distribution`]. Entries
//! are kept in node-name order so output is stable across runs.

use std::collections::BTreeMap;

/// Mapping from node name to probability (values are non-negative, sum = 1.0)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Distribution {
    values: BTreeMap<String, f64>,
}

/// Long-run probability of a random surfer being at each node
pub type RankVector = Distribution;

impl Distribution {
    /// Create empty distribution (the zero-node result)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Probability assigned to `node`
    #[must_use]
    pub fn get(&self, node: &str) -> Option<f64> {
        self.values.get(node).copied()
    }

    /// Number of nodes covered
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True for the zero-node result
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate `(name, probability)` in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.values.iter().map(|(name, p)| (name.as_str(), *p))
    }

    /// Sum of all probabilities (1.0 within tolerance for a non-empty result)
    #[must_use]
    pub fn total(&self) -> f64 {
        self.values.values().sum()
    }

    /// Entries ordered by descending probability, ties broken by name
    #[must_use]
    pub fn sorted_by_rank(&self) -> Vec<(&str, f64)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries
    }

    /// Unwrap into the underlying ordered map
    #[must_use]
    pub fn into_inner(self) -> BTreeMap<String, f64> {
        self.values
    }
}

impl FromIterator<(String, f64)> for Distribution {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Distribution {
    type Item = (&'a String, &'a f64);
    type IntoIter = std::collections::btree_map::Iter<'a, String, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
