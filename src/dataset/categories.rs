use std::collections::HashMap;

use super::Label;

/// Counted label categories
///
/// Holds the distinct labels of a dataset in the order they first occur, together with the
/// number of examples carrying each label. Every example is additionally mapped to the position
/// of its label, so that algorithms can count labels of arbitrary example subsets with a plain
/// vector instead of hashing the labels again.
#[derive(Debug, Clone, PartialEq)]
pub struct Categories<L> {
    labels: Vec<L>,
    counts: Vec<usize>,
    example_index: Vec<usize>,
}

impl<L: Label> Categories<L> {
    pub(crate) fn count<'a, I>(labels: I) -> Self
    where
        I: Iterator<Item = &'a L>,
        L: 'a,
    {
        let mut position = HashMap::new();
        let mut categories = Categories {
            labels: Vec::new(),
            counts: Vec::new(),
            example_index: Vec::new(),
        };

        for label in labels {
            let idx = *position.entry(label.clone()).or_insert_with(|| {
                categories.labels.push(label.clone());
                categories.counts.push(0);
                categories.labels.len() - 1
            });

            categories.counts[idx] += 1;
            categories.example_index.push(idx);
        }

        categories
    }
}

impl<L> Categories<L> {
    /// Number of distinct labels
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Label at position `idx` of the enumeration order
    pub fn label(&self, idx: usize) -> &L {
        &self.labels[idx]
    }

    /// Iterate over (label, count) pairs in first-occurrence order
    pub fn iter(&self) -> impl Iterator<Item = (&L, usize)> {
        self.labels.iter().zip(self.counts.iter().copied())
    }

    pub(crate) fn index_of_example(&self, id: usize) -> usize {
        self.example_index[id]
    }
}
