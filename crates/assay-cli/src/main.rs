//! Assay CLI - data quality checks for CSV/TSV files.

mod cli;
mod commands;
mod render;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

/// Log to stderr so stdout only carries the report.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Check {
            file,
            schema,
            default_schema,
            json,
            delimiter,
            max_rows,
        } => commands::check::run(commands::check::CheckArgs {
            file,
            schema,
            default_schema,
            json,
            delimiter,
            max_rows,
        }),

        Commands::Kinds { file, delimiter } => commands::kinds::run(file, delimiter),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
