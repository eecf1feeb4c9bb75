use std::path::Path;

use clap::Args;
use colored::Colorize;
use xlsq_common::error::Result;
use xlsq_formula::model::{ruby_path_for, Formula};
use xlsq_formula::render::check_rendered;

#[derive(Args, Debug)]
pub struct Lint {
    /// Skip comparing the Ruby formula with the descriptor
    #[arg(long)]
    pub skip_render_check: bool,
}

impl Lint {
    pub fn run(&self, formula_path: &Path) -> Result<()> {
        let formula = Formula::load(formula_path)?;
        formula.validate()?;
        if !self.skip_render_check {
            check_rendered(&formula, &ruby_path_for(formula_path))?;
        }
        println!(
            "{} {} {} passes lint",
            "✓".green().bold(),
            formula.name.bold(),
            formula.version
        );
        Ok(())
    }
}
