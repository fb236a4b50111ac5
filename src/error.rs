//! Error types in arbor
//!

use thiserror::Error;

use ndarray::ShapeError;
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("dataset contains no examples")]
    EmptyDataset,
    #[error("dataset contains no attributes")]
    NoAttributes,
    #[error("row {row} has {found} values, but {expected} attributes are named")]
    RowLength {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("{records} examples but {labels} labels")]
    LabelCount { records: usize, labels: usize },
    #[error("{found} attribute names given for {expected} predictor columns")]
    AttributeNames { expected: usize, found: usize },
    #[error("invalid ndarray shape {0}")]
    NdShape(#[from] ShapeError),
}
