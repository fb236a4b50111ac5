//! Datasets
//!
//! This module implements the categorical dataset view used by the tree learners. A dataset is
//! built once from tabular input and is read-only afterwards; all derived information (label
//! categories and their counts) is computed at construction time.
use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis};

use std::hash::Hash;

use crate::error::{Error, Result};

mod categories;

pub use categories::Categories;

/// Discrete labels and attribute values
///
/// Labels are countable, comparable and hashable. The same bound is used for the values of
/// categorical attributes, since both are only ever compared for equality and grouped.
pub trait Label: PartialEq + Eq + Hash + Clone {}

impl Label for bool {}
impl Label for usize {}
impl Label for String {}
impl Label for () {}
impl Label for &str {}
impl Label for Option<usize> {}

/// CategoricalDataset
///
/// The fundamental structure handed to the tree learners. It contains a matrix of categorical
/// predictor values, one label per example and a name for every attribute.
///
/// # Fields
///
/// * `predictors`: a two-dimensional matrix with dimensionality (nsamples, nattributes)
/// * `labels`: one label per example, aligned by example index
/// * `attribute_names`: one name per predictor column, the position of a name is the
/// attribute identifier used by the algorithms
/// * `categories`: the distinct labels in first-occurrence order together with their counts
///
/// # Invariants
///
/// A constructed dataset always has at least one example and one attribute, exactly one label
/// per example and exactly one name per predictor column.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoricalDataset<V, L> {
    predictors: Array2<V>,
    labels: Array1<L>,
    attribute_names: Vec<String>,
    categories: Categories<L>,
}

impl<V: Label, L: Label> CategoricalDataset<V, L> {
    /// Create a new dataset from a predictor matrix, a label vector and the attribute names
    ///
    /// Fails fast if the dataset is empty, has no attributes, or if the dimensions of the three
    /// parts disagree.
    pub fn new<I: Into<String>>(
        predictors: Array2<V>,
        labels: Array1<L>,
        attribute_names: Vec<I>,
    ) -> Result<Self> {
        let (nsamples, nattributes) = predictors.dim();

        if nsamples == 0 {
            return Err(Error::EmptyDataset);
        }
        if nattributes == 0 {
            return Err(Error::NoAttributes);
        }
        if labels.len() != nsamples {
            return Err(Error::LabelCount {
                records: nsamples,
                labels: labels.len(),
            });
        }
        if attribute_names.len() != nattributes {
            return Err(Error::AttributeNames {
                expected: nattributes,
                found: attribute_names.len(),
            });
        }

        let categories = Categories::count(labels.iter());

        Ok(CategoricalDataset {
            predictors,
            labels,
            attribute_names: attribute_names.into_iter().map(|x| x.into()).collect(),
            categories,
        })
    }

    /// Create a new dataset from row-major examples
    ///
    /// Every row has to contain exactly one value per attribute name, otherwise
    /// `Error::RowLength` reports the first offending row.
    pub fn from_rows<I: Into<String>>(
        rows: Vec<Vec<V>>,
        labels: Vec<L>,
        attribute_names: Vec<I>,
    ) -> Result<Self> {
        if rows.is_empty() {
            return Err(Error::EmptyDataset);
        }
        if attribute_names.is_empty() {
            return Err(Error::NoAttributes);
        }

        let nattributes = attribute_names.len();
        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|(_, len)| *len != nattributes)
        {
            return Err(Error::RowLength {
                row,
                expected: nattributes,
                found,
            });
        }

        let nsamples = rows.len();
        let flat = rows.into_iter().flatten().collect::<Vec<_>>();
        let predictors = Array2::from_shape_vec((nsamples, nattributes), flat)?;

        Self::new(predictors, Array1::from(labels), attribute_names)
    }
}

impl<V, L> CategoricalDataset<V, L> {
    /// Number of examples
    pub fn nsamples(&self) -> usize {
        self.predictors.nrows()
    }

    /// Number of attributes
    pub fn nattributes(&self) -> usize {
        self.predictors.ncols()
    }

    /// Return a view on the predictor matrix
    pub fn predictors(&self) -> ArrayView2<'_, V> {
        self.predictors.view()
    }

    /// Return a view on the labels
    pub fn labels(&self) -> ArrayView1<'_, L> {
        self.labels.view()
    }

    pub fn attribute_names(&self) -> &[String] {
        &self.attribute_names
    }

    /// Distinct labels of the full dataset, with counts, in first-occurrence order
    pub fn categories(&self) -> &Categories<L> {
        &self.categories
    }

    /// Value of attribute `attribute` for example `id`
    ///
    /// ### Panics
    ///
    /// If `id` or `attribute` are out of bounds
    pub fn value(&self, id: usize, attribute: usize) -> &V {
        &self.predictors[(id, attribute)]
    }

    /// Label of example `id`
    pub fn label(&self, id: usize) -> &L {
        &self.labels[id]
    }

    /// Position of the label of example `id` in `categories()`
    pub fn category_of(&self, id: usize) -> usize {
        self.categories.index_of_example(id)
    }

    /// Return the predictor values of a single example
    pub fn row(&self, id: usize) -> ArrayView1<'_, V> {
        self.predictors.index_axis(Axis(0), id)
    }

    /// Iterate over (predictor row, label) pairs
    pub fn sample_iter(&self) -> impl Iterator<Item = (ArrayView1<'_, V>, &L)> {
        self.predictors.outer_iter().zip(self.labels.iter())
    }
}
