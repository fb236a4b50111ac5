//! `arbor-datasets` turns tabular files into datasets ready to be used by the arbor learners.
//!
//! ## The Big Picture
//!
//! `arbor-datasets` is a crate in the `arbor` workspace. Tables are read with a header line
//! and every column except the label column becomes a categorical attribute. Loaded datasets
//! are returned as an [`arbor::CategoricalDataset`] with string values and string labels.
//!
//! ## Current State
//!
//! * [`read_csv`], [`read_gz_csv`] and [`load_csv`] read plain or gzipped CSV tables
//! * `["play-tennis"]` : the play tennis dataset from Quinlan's ID3 paper, enabled by default
//!
//! ## Using a dataset
//!
//! ```rust
//! use arbor_datasets::{read_csv, LabelColumn};
//!
//! let table = "outlook,wind,play\nsunny,weak,yes\nrain,strong,no\n";
//! let dataset = read_csv(table.as_bytes(), &LabelColumn::Last)?;
//!
//! assert_eq!(dataset.attribute_names(), &["outlook", "wind"]);
//! # Ok::<(), arbor_datasets::ReadError>(())
//! ```

mod dataset;

pub use dataset::{load_csv, read_csv, read_gz_csv, LabelColumn, ReadError};

#[cfg(feature = "play-tennis")]
use arbor::CategoricalDataset;

#[cfg(feature = "play-tennis")]
/// Read in the play tennis dataset.
///
/// Fourteen days of weather observations (`Outlook`, `Temperature`, `Humidity`, `Wind`) and
/// whether tennis was played on them (`PlayTennis`).
pub fn play_tennis() -> CategoricalDataset<String, String> {
    let data = include_str!("../data/play_tennis.csv");

    read_csv(data.as_bytes(), &LabelColumn::Last).unwrap()
}
