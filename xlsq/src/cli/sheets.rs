use clap::Args;
use colored::Colorize;
use xlsq_common::error::Result;
use xlsq_core::Workbook;

#[derive(Args, Debug)]
pub struct Sheets;

impl Sheets {
    pub fn run(&self, workbook: &Workbook) -> Result<()> {
        let names = workbook.sheet_names();
        tracing::debug!("{} has {} sheet(s)", workbook.path().display(), names.len());

        println!("{}", "Available sheets:".bold());
        for (index, name) in names.iter().enumerate() {
            println!("  {index}: {name}");
        }
        Ok(())
    }
}
