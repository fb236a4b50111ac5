use colored::Colorize;

use std::path::Path;

use crate::config::Algorithm;
use crate::run::Report;

const FULL_WIDTH: usize = 60;

/// Prints the progress of a run to stdout
pub struct Status {
    quiet: bool,
}

impl Status {
    pub fn new(quiet: bool) -> Self {
        Status { quiet }
    }

    pub fn header(&self, algorithm: Algorithm, data_dir: &Path, ninputs: usize) {
        if self.quiet {
            return;
        }

        println!("{}", "=".repeat(FULL_WIDTH));
        println!(
            "{:>12} {}",
            "Algorithm".bold(),
            algorithm.name().bold().green()
        );
        println!("{:>12} {}", "Data".bold(), data_dir.display());
        println!("{:>12} {}", "Inputs".bold(), ninputs.to_string().yellow());
        println!("{}", "=".repeat(FULL_WIDTH));
    }

    pub fn report(&self, report: &Report) {
        if self.quiet {
            return;
        }

        println!(
            "{:>12} {} -> {} [{} examples, {} attributes, {} classes, depth {}, {} leaves, accuracy {:.3}]",
            "Fitted".bold().green(),
            report.input.display(),
            report.output.display().to_string().cyan(),
            report.nsamples,
            report.nattributes,
            report.nclasses,
            report.depth,
            report.leaves,
            report.accuracy,
        );
    }
}
