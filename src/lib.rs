//! `arbor` provides the shared building blocks for categorical decision tree learning in Rust.
//!
//! The crate itself holds no learning algorithm. It defines the dataset view that the
//! algorithms operate on, the error type they report construction failures with, and the
//! traits that tie fitted models together:
//!
//! * [`CategoricalDataset`] wraps a table of categorical predictor values, one label per
//!   example and the attribute names. Malformed tables are rejected when the dataset is
//!   constructed, so algorithms never see them.
//! * [`traits::Fit`] and [`traits::Predict`] are implemented by the algorithm crates, for
//!   example the ID3 learner in `arbor-trees`.
//!
//! Loading datasets from CSV files is provided by `arbor-datasets`, and the `arbor` binary in
//! `arbor-cli` drives the whole pipeline from a JSON configuration.
//!

pub mod dataset;
pub mod error;
pub mod prelude;
pub mod traits;

pub use dataset::{Categories, CategoricalDataset, Label};
pub use error::Error;
