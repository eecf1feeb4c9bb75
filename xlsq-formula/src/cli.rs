// xlsq-formula/src/cli.rs
//! Defines the command-line argument structure using clap.
use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser, Subcommand};
use colored::Colorize;
use xlsq_common::error::Result;
use xlsq_common::Config;

pub mod bump;
pub mod checksum;
pub mod fetch;
pub mod install;
pub mod lint;
pub mod render;

use crate::cli::bump::Bump;
use crate::cli::checksum::Checksum;
use crate::cli::fetch::Fetch;
use crate::cli::install::Install;
use crate::cli::lint::Lint;
use crate::cli::render::Render;
use crate::cli::test::Test;

#[derive(Parser, Debug)]
#[command(author, version, long_about = None, name = "xlsq-formula", bin_name = "xlsq-formula")]
#[command(about = "Maintain and exercise the Homebrew formula for xlsq")]
pub struct CliArgs {
    /// Formula descriptor (JSON)
    #[arg(long, global = true, default_value = "Formula/xlsq.json")]
    pub formula: PathBuf,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check the descriptor for missing or placeholder fields
    Lint(Lint),
    /// Write (or check) the Ruby formula rendered from the descriptor
    Render(Render),
    /// Print the SHA-256 of a source archive
    Checksum(Checksum),
    /// Download the source archive and verify its checksum
    Fetch(Fetch),
    /// Move the formula to a new version
    Bump(Bump),
    /// Run the install step from a source checkout
    Install(Install),
    /// Run the test step against an installed binary
    Test(Test),
}

impl Command {
    pub async fn run(&self, formula_path: &Path, config: &Config) -> Result<()> {
        match self {
            Self::Lint(command) => command.run(formula_path),
            Self::Render(command) => command.run(formula_path),
            Self::Checksum(command) => command.run(formula_path),
            Self::Fetch(command) => command.run(formula_path, config).await,
            Self::Bump(command) => command.run(formula_path),
            Self::Install(command) => command.run(formula_path, config).await,
            Self::Test(command) => command.run(formula_path, config).await,
        }
    }
}

pub(crate) fn step(message: &str) {
    println!("{}{}", "==> ".bold().blue(), message.bold());
}
