use std::path::{Path, PathBuf};

use clap::Args;
use xlsq_common::error::Result;
use xlsq_formula::model::{ruby_path_for, Formula};
use xlsq_formula::render::{check_rendered, render_ruby, write_rendered};

#[derive(Args, Debug)]
pub struct Render {
    /// Destination (default: descriptor path with an .rb extension; "-" for stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Fail if the destination differs instead of writing it
    #[arg(long)]
    pub check: bool,
}

impl Render {
    pub fn run(&self, formula_path: &Path) -> Result<()> {
        let formula = Formula::load(formula_path)?;
        let target = self
            .output
            .clone()
            .unwrap_or_else(|| ruby_path_for(formula_path));

        if target.as_os_str() == "-" {
            print!("{}", render_ruby(&formula));
            return Ok(());
        }
        if self.check {
            check_rendered(&formula, &target)?;
            println!("{} is up to date", target.display());
        } else {
            write_rendered(&formula, &target)?;
            println!("Wrote {}", target.display());
        }
        Ok(())
    }
}
