// xlsq/src/main.rs
use std::process;

use clap::Parser;
use colored::Colorize;
use tracing::debug;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use xlsq_common::error::Result;
use xlsq_common::Config;
use xlsq_core::open_workbook;

mod cli;
use cli::show::Show;
use cli::CliArgs;

fn init_tracing(verbose: u8) {
    let level_filter = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let env_filter = EnvFilter::builder()
        .with_default_directive(level_filter.into())
        .with_env_var("XLSQ_LOG")
        .from_env_lossy();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .without_time()
        .try_init();
}

fn run(cli_args: &CliArgs) -> Result<()> {
    let config = Config::load()?;
    let mut workbook = open_workbook(&cli_args.file)?;

    match &cli_args.command {
        Some(command) => command.run(&mut workbook, &config),
        // No subcommand: preview the first sheet.
        None => Show {
            sheet: "0".to_string(),
            rows: None,
        }
        .run(&mut workbook, &config),
    }
}

fn main() {
    let cli_args = CliArgs::parse();
    init_tracing(cli_args.verbose);

    if let Err(e) = run(&cli_args) {
        debug!("Command failed: {:?}", e);
        eprintln!("{}: {}", "Error".red().bold(), e);
        process::exit(1);
    }

    debug!("Command completed successfully.");
}
