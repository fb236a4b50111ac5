//! Entropy and information gain over subsets of examples
//!
use std::collections::HashMap;

use arbor::{CategoricalDataset, Label};

/// Information gains within this distance of each other are considered tied
pub const GAIN_TOLERANCE: f64 = 1e-12;

/// Computes label entropy and the information gain of candidate splits
///
/// The engine only ever looks at subsets of examples given as lists of example indices into the
/// borrowed dataset. No row data is copied; the lists themselves are owned by the caller.
pub struct GainEngine<'a, V, L> {
    dataset: &'a CategoricalDataset<V, L>,
}

impl<'a, V: Label, L: Label> GainEngine<'a, V, L> {
    pub fn new(dataset: &'a CategoricalDataset<V, L>) -> Self {
        GainEngine { dataset }
    }

    pub fn dataset(&self) -> &'a CategoricalDataset<V, L> {
        self.dataset
    }

    /// Counts the examples of every label category among `ids`
    ///
    /// The returned vector is indexed like `dataset.categories()`, so categories absent from
    /// `ids` have a count of zero.
    pub fn category_counts(&self, ids: &[usize]) -> Vec<usize> {
        let mut counts = vec![0; self.dataset.categories().len()];
        for &id in ids {
            counts[self.dataset.category_of(id)] += 1;
        }

        counts
    }

    /// Entropy of the labels of `ids`, in bits
    ///
    /// ### Panics
    ///
    /// If `ids` is empty
    pub fn entropy(&self, ids: &[usize]) -> f64 {
        entropy(&self.category_counts(ids))
    }

    /// Groups `ids` by their value for `attribute`
    ///
    /// Values appear in the order they first occur in `ids` and every group keeps the relative
    /// order of its examples. Only observed values are returned, hence no group is empty.
    pub fn partition(&self, ids: &[usize], attribute: usize) -> Vec<(&'a V, Vec<usize>)> {
        let dataset = self.dataset;
        let mut position: HashMap<&V, usize> = HashMap::new();
        let mut groups: Vec<(&'a V, Vec<usize>)> = Vec::new();

        for &id in ids {
            let value = dataset.value(id, attribute);
            let idx = *position.entry(value).or_insert_with(|| {
                groups.push((value, Vec::new()));
                groups.len() - 1
            });
            groups[idx].1.push(id);
        }

        groups
    }

    /// Information gain of splitting `ids` on `attribute`
    ///
    /// This is the entropy of `ids` minus the entropy of every value group weighted by its
    /// share of `ids`. Rounding noise below zero is clamped, so the gain is never negative.
    pub fn information_gain(&self, ids: &[usize], attribute: usize) -> f64 {
        let nsamples = ids.len() as f64;
        let remainder = self
            .partition(ids, attribute)
            .iter()
            .map(|(_, group)| group.len() as f64 / nsamples * self.entropy(group))
            .sum::<f64>();

        (self.entropy(ids) - remainder).max(0.0)
    }

    /// Returns the candidate attribute with the largest information gain
    ///
    /// Candidates are evaluated in the given order and the first one reaching the maximum wins.
    /// Gains closer than `GAIN_TOLERANCE` count as equal, so that rounding noise between
    /// mathematically equal gains does not decide the split.
    ///
    /// ### Panics
    ///
    /// If `candidates` is empty. The tree builder turns a node into a leaf before running out of
    /// candidates, so reaching this is a bug in the caller.
    pub fn best_attribute(&self, ids: &[usize], candidates: &[usize]) -> usize {
        assert!(
            !candidates.is_empty(),
            "best attribute requested without candidate attributes"
        );

        let (best, _) = candidates
            .iter()
            .map(|&attribute| (attribute, self.information_gain(ids, attribute)))
            .fold(None, |acc, (attribute, gain)| match acc {
                Some((_, best_gain)) if best_gain >= gain - GAIN_TOLERANCE => acc,
                _ => Some((attribute, gain)),
            })
            .unwrap();

        best
    }
}

/// Given the category counts calculates the entropy of the subset.
pub(crate) fn entropy(counts: &[usize]) -> f64 {
    let nsamples = counts.iter().sum::<usize>() as f64;
    assert!(nsamples > 0.0);

    counts
        .iter()
        .map(|&x| x as f64 / nsamples)
        .map(|x| if x > 0.0 { -x * x.log2() } else { 0.0 })
        .sum()
}
