use std::path::{Path, PathBuf};

use clap::Args;
use colored::Colorize;
use xlsq_common::error::{Result, XlsqError};
use xlsq_formula::checksum::{sha256_file, verify_checksum};
use xlsq_formula::model::Formula;

#[derive(Args, Debug)]
pub struct Checksum {
    /// Source archive to hash
    pub archive: PathBuf,

    /// Also compare with the descriptor's sha256
    #[arg(long)]
    pub verify: bool,
}

impl Checksum {
    pub fn run(&self, formula_path: &Path) -> Result<()> {
        let actual = sha256_file(&self.archive)?;
        println!("{}  {}", actual, self.archive.display());

        if self.verify {
            let formula = Formula::load(formula_path)?;
            if formula.has_placeholder_checksum() {
                return Err(XlsqError::ChecksumError(format!(
                    "formula '{}' still carries the placeholder checksum; expected value is {}",
                    formula.name, actual
                )));
            }
            verify_checksum(&self.archive, &formula.sha256)?;
            println!("{}", "Checksum matches the formula".green());
        }
        Ok(())
    }
}
