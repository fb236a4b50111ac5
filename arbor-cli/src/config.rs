//! Run configuration, read from a JSON file
use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;

use crate::error::{CliError, Result};

/// Selects every regular file of the data directory
pub const ALL_DATASETS: &str = "all";

/// Contents of the configuration file
///
/// ```json
/// { "dataset": "play_tennis.csv", "algorithm": "ID3", "label": "PlayTennis" }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    /// A file name inside `data_dir`, or `"all"`
    pub dataset: String,
    pub algorithm: String,
    /// Header of the label column, the last column if absent
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    #[serde(default = "default_results_dir")]
    pub results_dir: PathBuf,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_results_dir() -> PathBuf {
    PathBuf::from("results")
}

impl Config {
    /// Load the configuration at `path`
    ///
    /// Relative directories are resolved against the directory containing the file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let reader = BufReader::new(File::open(path)?);
        let mut config: Config = serde_json::from_reader(reader)?;

        let base = path.parent().unwrap_or_else(|| Path::new(""));
        config.data_dir = base.join(&config.data_dir);
        config.results_dir = base.join(&config.results_dir);

        Ok(config)
    }

    pub fn algorithm(&self) -> Result<Algorithm> {
        self.algorithm.parse()
    }
}

/// Tree learners known to the driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Id3,
    Cart,
}

impl Algorithm {
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Id3 => "ID3",
            Algorithm::Cart => "CART",
        }
    }
}

impl FromStr for Algorithm {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self> {
        if s.eq_ignore_ascii_case("ID3") {
            Ok(Algorithm::Id3)
        } else if s.eq_ignore_ascii_case("CART") {
            Ok(Algorithm::Cart)
        } else {
            Err(CliError::UnknownAlgorithm(s.to_string()))
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_relative_to_the_config_file() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("conf.json");
        std::fs::write(&path, r#"{ "dataset": "all", "algorithm": "ID3" }"#)?;

        let config = Config::load(&path)?;
        assert_eq!(config.dataset, ALL_DATASETS);
        assert_eq!(config.label, None);
        assert_eq!(config.data_dir, dir.path().join("data"));
        assert_eq!(config.results_dir, dir.path().join("results"));
        assert_eq!(config.algorithm()?, Algorithm::Id3);

        Ok(())
    }

    #[test]
    fn explicit_fields() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("conf.json");
        std::fs::write(
            &path,
            r#"{
                "dataset": "tennis.csv",
                "algorithm": "cart",
                "label": "Play",
                "data_dir": "input",
                "results_dir": "/tmp/out"
            }"#,
        )?;

        let config = Config::load(&path)?;
        assert_eq!(config.label.as_deref(), Some("Play"));
        assert_eq!(config.data_dir, dir.path().join("input"));
        assert_eq!(config.results_dir, PathBuf::from("/tmp/out"));
        assert_eq!(config.algorithm()?, Algorithm::Cart);

        Ok(())
    }

    #[test]
    fn malformed_config() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("conf.json");
        std::fs::write(&path, r#"{ "algorithm": "ID3" }"#)?;

        assert!(matches!(Config::load(&path), Err(CliError::Config(_))));
        assert!(matches!(
            Config::load(dir.path().join("missing.json")),
            Err(CliError::Io(_))
        ));

        Ok(())
    }

    #[test]
    fn parse_algorithms() {
        assert_eq!("ID3".parse::<Algorithm>().ok(), Some(Algorithm::Id3));
        assert_eq!("Cart".parse::<Algorithm>().ok(), Some(Algorithm::Cart));
        assert!(matches!(
            "C4.5".parse::<Algorithm>(),
            Err(CliError::UnknownAlgorithm(name)) if name == "C4.5"
        ));
        assert_eq!(Algorithm::Cart.to_string(), "CART");
    }
}
