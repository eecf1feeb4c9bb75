use std::path::Path;

use clap::Args;
use xlsq_common::error::Result;
use xlsq_common::Config;
use xlsq_formula::http::fetch_source;
use xlsq_formula::model::Formula;

use crate::cli::step;

#[derive(Args, Debug)]
pub struct Fetch;

impl Fetch {
    pub async fn run(&self, formula_path: &Path, config: &Config) -> Result<()> {
        let formula = Formula::load(formula_path)?;
        step(&format!("Fetching {} {}", formula.name, formula.version));
        let archive = fetch_source(&formula, config).await?;
        println!("{}  {}", archive.sha256, archive.path.display());
        Ok(())
    }
}
