//! Load, fit and write every input selected by a configuration
use std::fs;
use std::path::{Path, PathBuf};

use arbor::traits::Fit;
use arbor_datasets::{load_csv, LabelColumn};
use arbor_trees::Id3Tree;

use crate::config::{Algorithm, Config, ALL_DATASETS};
use crate::error::{CliError, Result};
use crate::status::Status;

/// Summary of one processed input
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub input: PathBuf,
    pub output: PathBuf,
    pub nsamples: usize,
    pub nattributes: usize,
    pub nclasses: usize,
    pub depth: usize,
    pub leaves: usize,
    pub accuracy: f64,
}

/// Process every input of `config` in order and stop at the first failure
pub fn execute(config: &Config, status: &Status) -> Result<Vec<Report>> {
    fs::create_dir_all(&config.data_dir)?;

    let algorithm = config.algorithm()?;
    if algorithm != Algorithm::Id3 {
        return Err(CliError::UnsupportedAlgorithm(algorithm.name().to_string()));
    }

    let inputs = inputs(config)?;
    status.header(algorithm, &config.data_dir, inputs.len());

    let label = LabelColumn::from(config.label.clone());
    let results_dir = config.results_dir.join(algorithm.name());

    inputs
        .into_iter()
        .map(|input| {
            let report = process(input, &label, &results_dir)?;
            status.report(&report);

            Ok(report)
        })
        .collect()
}

/// Files selected by `config.dataset`, sorted by name for `"all"`
pub fn inputs(config: &Config) -> Result<Vec<PathBuf>> {
    if config.dataset != ALL_DATASETS {
        let path = config.data_dir.join(&config.dataset);

        return if path.is_file() {
            Ok(vec![path])
        } else {
            Err(CliError::MissingDataset(path))
        };
    }

    let mut paths = Vec::new();
    for entry in fs::read_dir(&config.data_dir)? {
        let entry = entry?;
        if entry.file_type()?.is_file() {
            paths.push(entry.path());
        }
    }
    paths.sort();

    Ok(paths)
}

fn process(input: PathBuf, label: &LabelColumn, results_dir: &Path) -> Result<Report> {
    let dataset = load_csv(&input, label)?;
    let tree = Id3Tree::params().fit(&dataset)?;

    let output = results_dir.join(output_name(&input));
    fs::create_dir_all(results_dir)?;
    fs::write(&output, tree.export_to_text().to_string())?;

    Ok(Report {
        nsamples: dataset.nsamples(),
        nattributes: tree.num_attributes(),
        nclasses: dataset.categories().len(),
        depth: tree.max_depth(),
        leaves: tree.num_leaves(),
        accuracy: tree.accuracy(&dataset),
        input,
        output,
    })
}

/// `<stem>.txt`, where the stem drops a trailing `.gz` together with the table extension
fn output_name(input: &Path) -> String {
    let mut stem = input.file_stem().map(PathBuf::from).unwrap_or_default();
    if input.extension().map_or(false, |x| x == "gz") {
        stem = stem.file_stem().map(PathBuf::from).unwrap_or_default();
    }

    format!("{}.txt", stem.display())
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::TempDir;

    const PLAY_TENNIS: &str = include_str!("../data/play_tennis.csv");
    const PLAY_TENNIS_TREE: &str = "\
|--- Outlook == Sunny
|   |--- Humidity == High
|   |   |--- class: No
|   |--- Humidity == Normal
|   |   |--- class: Yes
|--- Outlook == Overcast
|   |--- class: Yes
|--- Outlook == Rain
|   |--- Wind == Weak
|   |   |--- class: Yes
|   |--- Wind == Strong
|   |   |--- class: No
";

    fn config(dir: &TempDir, dataset: &str, algorithm: &str) -> Config {
        Config {
            dataset: dataset.to_string(),
            algorithm: algorithm.to_string(),
            label: None,
            data_dir: dir.path().join("data"),
            results_dir: dir.path().join("results"),
        }
    }

    fn write_input(config: &Config, name: &str, contents: &str) -> Result<()> {
        fs::create_dir_all(&config.data_dir)?;
        fs::write(config.data_dir.join(name), contents)?;

        Ok(())
    }

    #[test]
    fn writes_tree_per_dataset() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let config = config(&dir, "play_tennis.csv", "ID3");
        write_input(&config, "play_tennis.csv", PLAY_TENNIS)?;

        let reports = execute(&config, &Status::new(true))?;
        let output = dir.path().join("results").join("ID3").join("play_tennis.txt");

        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].output, output);
        assert_eq!(reports[0].nsamples, 14);
        assert_eq!(reports[0].nattributes, 4);
        assert_eq!(reports[0].nclasses, 2);
        assert_eq!(reports[0].leaves, 5);
        assert_eq!(reports[0].depth, 2);
        assert_eq!(fs::read_to_string(output)?, PLAY_TENNIS_TREE);

        Ok(())
    }

    #[test]
    fn all_selects_files_sorted_by_name() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let config = config(&dir, ALL_DATASETS, "ID3");
        write_input(&config, "b.csv", "x,label\n1,yes\n")?;
        write_input(&config, "a.csv", "x,label\n1,no\n")?;
        fs::create_dir_all(config.data_dir.join("nested"))?;

        let inputs = inputs(&config)?;
        assert_eq!(
            inputs,
            vec![config.data_dir.join("a.csv"), config.data_dir.join("b.csv")]
        );

        let reports = execute(&config, &Status::new(true))?;
        let text = fs::read_to_string(&reports[1].output)?;
        assert_eq!(text, "|--- class: yes\n");

        Ok(())
    }

    #[test]
    fn creates_missing_data_directory() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let config = config(&dir, ALL_DATASETS, "ID3");

        assert_eq!(execute(&config, &Status::new(true))?, vec![]);
        assert!(config.data_dir.is_dir());

        Ok(())
    }

    #[test]
    fn named_label_column() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let mut config = config(&dir, "wind.csv", "ID3");
        config.label = Some("play".to_string());
        write_input(
            &config,
            "wind.csv",
            "play,wind\nyes,weak\nno,strong\nyes,weak\n",
        )?;

        let reports = execute(&config, &Status::new(true))?;
        assert_eq!(
            fs::read_to_string(&reports[0].output)?,
            "|--- wind == weak\n|   |--- class: yes\n|--- wind == strong\n|   |--- class: no\n"
        );

        Ok(())
    }

    #[test]
    fn rejects_cart_and_unknown_algorithms() -> Result<()> {
        let dir = tempfile::tempdir()?;

        assert!(matches!(
            execute(&config(&dir, ALL_DATASETS, "CART"), &Status::new(true)),
            Err(CliError::UnsupportedAlgorithm(name)) if name == "CART"
        ));
        assert!(matches!(
            execute(&config(&dir, ALL_DATASETS, "kNN"), &Status::new(true)),
            Err(CliError::UnknownAlgorithm(_))
        ));

        Ok(())
    }

    #[test]
    fn missing_dataset() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let config = config(&dir, "nope.csv", "ID3");

        assert!(matches!(
            execute(&config, &Status::new(true)),
            Err(CliError::MissingDataset(path)) if path == config.data_dir.join("nope.csv")
        ));

        Ok(())
    }

    #[test]
    fn failing_input_aborts_the_run() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let config = config(&dir, ALL_DATASETS, "ID3");
        write_input(&config, "a.csv", "x,label\n")?;
        write_input(&config, "b.csv", PLAY_TENNIS)?;

        assert!(matches!(
            execute(&config, &Status::new(true)),
            Err(CliError::Read(_))
        ));
        assert!(!dir.path().join("results").join("ID3").join("b.txt").exists());

        Ok(())
    }

    #[test]
    fn output_names() {
        assert_eq!(output_name(Path::new("data/tennis.csv")), "tennis.txt");
        assert_eq!(output_name(Path::new("data/tennis.csv.gz")), "tennis.txt");
        assert_eq!(output_name(Path::new("data/tennis")), "tennis.txt");
    }
}
