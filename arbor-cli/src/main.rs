//! Fit a decision tree on every dataset selected by a JSON configuration and write each tree as
//! indented text to `<results_dir>/<algorithm>/<dataset>.txt`.
use clap::Parser;
use std::path::PathBuf;

mod config;
mod error;
mod run;
mod status;

use config::Config;
use error::CliError;
use status::Status;

#[derive(Parser)]
#[command(name = "arbor")]
#[command(about = "Fit categorical decision trees and export them as text")]
#[command(version)]
struct Cli {
    /// Configuration file (JSON)
    #[arg(short, long, default_value = "conf.json")]
    config: PathBuf,

    /// Dataset file name inside the data directory, or `all`
    #[arg(short, long)]
    dataset: Option<String>,

    /// Algorithm to use (ID3 or CART)
    #[arg(short, long)]
    algorithm: Option<String>,

    /// Suppress status output
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();

    let mut config = Config::load(&cli.config)?;
    if let Some(dataset) = cli.dataset {
        config.dataset = dataset;
    }
    if let Some(algorithm) = cli.algorithm {
        config.algorithm = algorithm;
    }

    run::execute(&config, &Status::new(cli.quiet))?;

    Ok(())
}
