use clap::Args;
use colored::Colorize;
use xlsq_common::error::Result;
use xlsq_common::Config;
use xlsq_core::{show_sheet, SheetView, Workbook};

#[derive(Args, Debug)]
pub struct Show {
    /// Sheet name or index (0-based)
    #[arg(short, long, default_value = "0")]
    pub sheet: String,

    /// Number of rows to display (0 for all) [default: 10, or XLSQ_DEFAULT_ROWS]
    #[arg(short, long)]
    pub rows: Option<usize>,
}

impl Show {
    pub fn run(&self, workbook: &mut Workbook, config: &Config) -> Result<()> {
        let rows = self.rows.unwrap_or(config.default_rows);
        let view = show_sheet(workbook, &self.sheet, rows)?;
        print_sheet_view(&view);
        Ok(())
    }
}

pub fn print_sheet_view(view: &SheetView) {
    println!("{}", format!("Sheet: {}", view.sheet).bold());
    println!(
        "Dimensions: {} rows x {} columns",
        view.height, view.width
    );
    println!();

    for (idx, row) in view.rows.iter().enumerate() {
        println!("Row {}: {}", idx + 1, row.join(" | "));
    }

    let remaining = view.remaining();
    if remaining > 0 {
        println!();
        println!("{}", format!("... and {remaining} more rows").dimmed());
    }
}
