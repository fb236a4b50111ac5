//! Provide traits for different classes of algorithms
//!

use crate::dataset::CategoricalDataset;
use std::convert::From;

/// Fittable algorithms
///
/// A fittable algorithm takes a dataset and creates a concept of some kind about it. For example
/// a decision tree learner induces a tree of attribute tests from the labelled examples.
///
/// The induction has to be fallible so that algorithms can reject datasets they cannot learn
/// from. Every algorithm error must be convertible from the shared `arbor::Error`.
pub trait Fit<V, L, E: std::error::Error + From<crate::error::Error>> {
    type Object;

    fn fit(&self, dataset: &CategoricalDataset<V, L>) -> Result<Self::Object, E>;
}

/// Predict with model
///
/// This trait assumes the model is fitted and can be applied to new records. Categorical models
/// may meet attribute values they never saw during fitting, so the target type usually carries
/// an `Option` per record.
pub trait Predict<R, T> {
    fn predict(&self, x: R) -> T;
}
