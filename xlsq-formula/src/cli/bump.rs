use std::fs;
use std::path::Path;

use clap::Args;
use colored::Colorize;
use semver::Version;
use xlsq_common::error::{Result, XlsqError};
use xlsq_formula::model::{ruby_path_for, Formula};
use xlsq_formula::render::write_rendered;

#[derive(Args, Debug)]
pub struct Bump {
    /// New version, e.g. 0.2.0
    pub version: Version,

    /// SHA-256 of the new source archive
    #[arg(long)]
    pub sha256: Option<String>,
}

impl Bump {
    pub fn run(&self, formula_path: &Path) -> Result<()> {
        let mut formula = Formula::load(formula_path)?;
        let previous = formula.version.clone();
        formula.bump(self.version.clone(), self.sha256.as_deref())?;

        // The descriptor is written last so a failed Ruby write leaves it unbumped.
        let json = formula.to_json()?;
        let ruby_path = ruby_path_for(formula_path);
        write_rendered(&formula, &ruby_path)?;
        fs::write(formula_path, json).map_err(|e| {
            XlsqError::IoError(format!(
                "Failed to write formula {}: {}",
                formula_path.display(),
                e
            ))
        })?;

        println!(
            "Bumped {} {} -> {} ({})",
            formula.name,
            previous,
            formula.version,
            formula.url
        );
        if formula.has_placeholder_checksum() {
            println!(
                "{} sha256 reset to the placeholder; run `xlsq-formula fetch` to get the new digest",
                "Warning:".yellow()
            );
        }
        Ok(())
    }
}
