use std::fs::File;
use std::io::Read;
use std::path::Path;

use arbor::CategoricalDataset;
use csv::{ReaderBuilder, Trim};
use flate2::read::GzDecoder;
use thiserror::Error;

/// Errors raised while turning a CSV table into a dataset
#[derive(Error, Debug)]
pub enum ReadError {
    #[error("could not read dataset: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("label column `{0}` not found in header")]
    MissingLabel(String),
    #[error(transparent)]
    Dataset(#[from] arbor::Error),
}

/// Selects the column holding the labels
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelColumn {
    /// The right-most column
    Last,
    /// The column with the given header
    Named(String),
}

impl Default for LabelColumn {
    fn default() -> Self {
        LabelColumn::Last
    }
}

impl From<Option<String>> for LabelColumn {
    fn from(name: Option<String>) -> Self {
        name.map(LabelColumn::Named).unwrap_or_default()
    }
}

/// Convert gzipped CSV bytes into a categorical dataset
pub fn read_gz_csv<R: Read>(
    gz: R,
    label: &LabelColumn,
) -> Result<CategoricalDataset<String, String>, ReadError> {
    // unzip file
    let file = GzDecoder::new(gz);
    read_csv(file, label)
}

/// Convert CSV bytes into a categorical dataset
///
/// The first line is the header and provides the attribute names. Every value is read as a
/// string with surrounding whitespace removed; all columns except the label column become
/// attributes in their original order.
pub fn read_csv<R: Read>(
    csv: R,
    label: &LabelColumn,
) -> Result<CategoricalDataset<String, String>, ReadError> {
    // parse CSV
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .delimiter(b',')
        .trim(Trim::All)
        .from_reader(csv);

    let headers = reader.headers()?.clone();
    let label_idx = match label {
        LabelColumn::Last if headers.is_empty() => return Err(arbor::Error::EmptyDataset.into()),
        LabelColumn::Last => headers.len() - 1,
        LabelColumn::Named(name) => headers
            .iter()
            .position(|x| x == name)
            .ok_or_else(|| ReadError::MissingLabel(name.clone()))?,
    };

    let attribute_names = headers
        .iter()
        .enumerate()
        .filter(|(idx, _)| *idx != label_idx)
        .map(|(_, name)| name.to_string())
        .collect::<Vec<_>>();

    let mut rows = Vec::new();
    let mut labels = Vec::new();
    for record in reader.records() {
        let record = record?;

        rows.push(
            record
                .iter()
                .enumerate()
                .filter(|(idx, _)| *idx != label_idx)
                .map(|(_, value)| value.to_string())
                .collect::<Vec<_>>(),
        );
        labels.push(record[label_idx].to_string());
    }

    Ok(CategoricalDataset::from_rows(rows, labels, attribute_names)?)
}

/// Read a CSV file into a categorical dataset, decompressing it first if the file name ends in
/// `.gz`
pub fn load_csv<P: AsRef<Path>>(
    path: P,
    label: &LabelColumn,
) -> Result<CategoricalDataset<String, String>, ReadError> {
    let path = path.as_ref();
    let file = File::open(path)?;

    match path.extension().and_then(|x| x.to_str()) {
        Some("gz") => read_gz_csv(file, label),
        _ => read_csv(file, label),
    }
}
