// xlsq/src/cli.rs
//! Defines the command-line argument structure using clap.
use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use xlsq_common::error::Result;
use xlsq_common::Config;
use xlsq_core::Workbook;

pub mod search;
pub mod sheets;
pub mod show;

use crate::cli::search::Search;
use crate::cli::sheets::Sheets;
use crate::cli::show::Show;

#[derive(Parser, Debug)]
#[command(version, long_about = None, name = "xlsq", bin_name = "xlsq")]
#[command(about = "A CLI tool for reading and searching Excel files")]
pub struct CliArgs {
    /// Path to the Excel file
    #[arg(short, long)]
    pub file: PathBuf,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List all sheets in the workbook
    Sheets(Sheets),
    /// Display contents of a sheet
    Show(Show),
    /// Search for a value and display matching rows
    Search(Search),
}

impl Command {
    pub fn run(&self, workbook: &mut Workbook, config: &Config) -> Result<()> {
        match self {
            Self::Sheets(command) => command.run(workbook),
            Self::Show(command) => command.run(workbook, config),
            Self::Search(command) => command.run(workbook),
        }
    }
}
