use clap::Args;
use colored::Colorize;
use xlsq_common::error::Result;
use xlsq_core::{search_sheet, SearchMatch, SearchReport, Workbook};

const HIGHLIGHT: &str = "***";

#[derive(Args, Debug)]
pub struct Search {
    /// Value to search for
    pub value: String,

    /// Sheet name or index to search in (default: first sheet)
    #[arg(short, long, default_value = "0")]
    pub sheet: String,

    /// Case-sensitive search
    #[arg(short, long)]
    pub case_sensitive: bool,
}

impl Search {
    pub fn run(&self, workbook: &mut Workbook) -> Result<()> {
        let report = search_sheet(workbook, &self.sheet, &self.value, self.case_sensitive)?;
        print_search_report(&report);
        Ok(())
    }
}

fn highlight_row(found: &SearchMatch) -> String {
    found
        .cells
        .iter()
        .enumerate()
        .map(|(col, text)| {
            if found.is_match(col) {
                format!("{HIGHLIGHT}{text}{HIGHLIGHT}").yellow().bold().to_string()
            } else {
                text.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(" | ")
}

pub fn print_search_report(report: &SearchReport) {
    println!(
        "{}",
        format!("Searching for '{}' in sheet: {}", report.query, report.sheet).bold()
    );
    println!();

    for (idx, found) in report.matches.iter().enumerate() {
        println!("Match {} - Row {}:", idx + 1, found.row);
        println!("{}", highlight_row(found));
        println!();
    }

    if report.matches.is_empty() {
        println!(
            "{}",
            format!("No matches found for '{}'", report.query).yellow()
        );
    } else {
        println!(
            "{}",
            format!("Found {} matching row(s)", report.matches.len()).bold()
        );
    }
}
