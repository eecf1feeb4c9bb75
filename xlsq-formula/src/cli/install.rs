use std::path::{Path, PathBuf};

use clap::Args;
use xlsq_common::error::Result;
use xlsq_common::Config;
use xlsq_formula::install::run_install;
use xlsq_formula::model::Formula;

use crate::cli::step;

#[derive(Args, Debug)]
pub struct Install {
    /// Install prefix (default: HOMEBREW_PREFIX or /opt/homebrew)
    #[arg(long)]
    pub prefix: Option<PathBuf>,

    /// Source checkout to build from
    #[arg(long, default_value = ".")]
    pub source: PathBuf,
}

impl Install {
    pub async fn run(&self, formula_path: &Path, config: &Config) -> Result<()> {
        let formula = Formula::load(formula_path)?;
        let prefix = self
            .prefix
            .clone()
            .unwrap_or_else(|| config.prefix().to_path_buf());
        step(&format!(
            "Installing {} {} into {}",
            formula.name,
            formula.version,
            prefix.display()
        ));
        let binary = run_install(&formula, &self.source, &prefix).await?;
        println!("Installed {}", binary.display());
        Ok(())
    }
}
