use std::path::PathBuf;

use arbor_datasets::ReadError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
    #[error("algorithm {0} is recognised but not implemented")]
    UnsupportedAlgorithm(String),
    #[error("unknown algorithm {0}, expected ID3 or CART")]
    UnknownAlgorithm(String),
    #[error("dataset {} does not exist", .0.display())]
    MissingDataset(PathBuf),
    #[error(transparent)]
    Read(#[from] ReadError),
    #[error("could not fit tree: {0}")]
    Fit(#[from] arbor::Error),
}
